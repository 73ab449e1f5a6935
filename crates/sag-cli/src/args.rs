//! CLI argument definitions using clap
//!
//! - sag prompting              # Print the prompting guide
//! - sag status                 # Show which API key source is in effect
//! - sag status --json          # Same, as JSON

use clap::{Parser, Subcommand};
use sag_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sag")]
#[command(about = "sag - ElevenLabs text-to-speech from the command line")]
#[command(
    long_about = r#"sag - ElevenLabs text-to-speech from the command line

USAGE:
  sag prompting                  # Print the prompting guide
  sag status                     # Show which API key is in use

API KEY (first match wins):
  --api-key, --api-key-file, ELEVENLABS_API_KEY_FILE, SAG_API_KEY_FILE,
  ELEVENLABS_API_KEY, SAG_API_KEY"#
)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// ElevenLabs API key (takes precedence over every other source)
    #[arg(long = "api-key", value_name = "KEY", global = true)]
    pub api_key: Option<String>,

    /// Read the ElevenLabs API key from this file
    #[arg(long = "api-key-file", value_name = "PATH", global = true)]
    pub api_key_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the runtime config from the parsed flags
    pub fn config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            api_key_file: self.api_key_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a guide to writing text that ElevenLabs voices read well
    #[command(verbatim_doc_comment)]
    Prompting,

    /// Show which API key source is in effect
    #[command(verbatim_doc_comment)]
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_prompting() {
        let cli = Cli::try_parse_from(["sag", "prompting"]).unwrap();
        assert!(matches!(cli.command, Commands::Prompting));
        assert_eq!(cli.config(), Config::new());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sag",
            "status",
            "--json",
            "--api-key-file",
            "/run/secrets/elevenlabs",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Status { json: true }));
        assert_eq!(
            cli.config(),
            Config::new().with_api_key_file("/run/secrets/elevenlabs")
        );
    }

    #[test]
    fn test_api_key_flag() {
        let cli = Cli::try_parse_from(["sag", "--api-key", "cli-key", "status"]).unwrap();
        assert_eq!(cli.config().api_key(), Some("cli-key"));
    }

    #[test]
    fn test_prompting_takes_no_arguments() {
        assert!(Cli::try_parse_from(["sag", "prompting", "extra"]).is_err());
    }
}
