//! Command-line interface for cueconf
//!
//! A single flag selects the configuration file; the loaded values are
//! printed to standard output.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;

/// Load an application configuration from a JSON or CUE file and print it
#[derive(Parser)]
#[command(name = "cueconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a .json or .cue configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH", default_value = "config.json")]
    config: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment takes precedence; default to WARN.
    let filter = EnvFilter::from_default_env().add_directive(Level::WARN.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    println!("Starting cueconf...");
    println!("Loading configuration file: {}", cli.config.display());

    let config = load_config(&cli.config)?;

    // The password is loaded but deliberately not printed.
    println!("Running Configuration");
    println!("    HTTP Port: {}", config.http.listen_port);
    println!("    Database Host: {}", config.database.host);
    println!("    Database User: {}", config.database.user);

    Ok(())
}
