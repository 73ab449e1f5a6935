//! Configuration management for sag

#[allow(clippy::module_inception)] // config module in config directory is intentional
mod config;

pub mod credential;

pub use config::Config;
