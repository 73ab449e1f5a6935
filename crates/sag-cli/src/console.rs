//! CLI console utilities

use colored::*;
use sag_core::error::{SagError, UnifiedError, UserFriendlyError};

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print an aligned `label: value` line
    pub fn print_field(&self, label: &str, value: &str) {
        let label = format!("{:<10}", format!("{}:", label));
        println!("  {} {}", label.dimmed(), value);
    }

    /// Report a command failure on stderr with suggested fixes
    pub fn report_error(&self, error: &SagError) {
        let friendly = UserFriendlyError::from(error);

        self.error(&format!(
            "{}: {}",
            friendly.category.display_name(),
            friendly.title
        ));
        eprintln!("  {}", friendly.message);

        if !friendly.suggestions.is_empty() {
            eprintln!();
            eprintln!("{}", "Suggested actions:".bold());
            for (i, suggestion) in friendly.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
        }

        if self.verbose {
            eprintln!();
            eprintln!("{} {}", "Error code:".dimmed(), error.error_code());
        }
    }
}
