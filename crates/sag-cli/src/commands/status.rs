//! Credential status command implementation

use crate::console::CliConsole;
use sag_core::{Config, CredentialSource, ResolvedCredential, SagResult};
use serde::Serialize;

/// JSON shape of `sag status --json`
#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    configured: bool,
    source: &'a CredentialSource,
    priority: &'static str,
    masked_key: String,
}

impl<'a> From<&'a ResolvedCredential> for StatusReport<'a> {
    fn from(credential: &'a ResolvedCredential) -> Self {
        Self {
            configured: true,
            source: &credential.source,
            priority: credential.priority().name(),
            masked_key: credential.masked_value(),
        }
    }
}

/// Resolve the API key and report where it came from
pub fn show(mut config: Config, json: bool) -> SagResult<()> {
    let credential = sag_core::ensure_api_key(&mut config)?;

    if json {
        let report = StatusReport::from(&credential);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let console = CliConsole::new(false);
    console.success("API key configured");
    console.print_field("Source", &credential.source.description());
    console.print_field("Priority", credential.priority().name());
    console.print_field("Key", &credential.masked_value());

    Ok(())
}
