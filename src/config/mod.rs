//! Configuration data model and loading
//!
//! A `Config` is created fresh on each load, owned by the caller and never
//! mutated afterwards. Fields absent from the source file default to their
//! zero values (0, empty string); nothing here validates port ranges or
//! non-empty hosts.

pub mod loader;

pub use loader::load_config;

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    // No port-range validation; out-of-range values load unchanged.
    pub listen_port: i64,
}

/// Database connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
}

/// Errors produced by [`load_config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing file extension, must be .json or .cue: {}", .0.display())]
    MissingExtension(PathBuf),

    #[error("invalid configuration file type: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("failed reading config file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON config: {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CUE config: {}", path.display())]
    Cue {
        path: PathBuf,
        #[source]
        source: crate::cue::CueError,
    },
}
