//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use sag_core::SagResult;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> SagResult<()> {
    let config = cli.config();
    tracing::debug!(?config, "Routing command");

    match cli.command {
        Commands::Prompting => commands::prompting::print_guide(),
        Commands::Status { json } => commands::status::show(config, json),
    }
}
