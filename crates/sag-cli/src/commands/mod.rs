//! CLI commands

pub mod prompting;
pub mod status;
