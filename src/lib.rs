//! Library surface for cueconf
//!
//! The binary is a thin wrapper over [`cli::run`]; the loader itself lives in
//! [`config`] so tests (and any embedding caller) can load without going
//! through the CLI.

pub mod cli;
pub mod config;
pub mod cue;

pub use config::{load_config, Config, ConfigError};
