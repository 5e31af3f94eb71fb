//! cueconf: load an application configuration from a JSON or CUE file
//!
//! Reads one configuration file, decodes it into a fixed `Config` structure
//! and prints the loaded values.

use anyhow::Result;

fn main() -> Result<()> {
    cueconf::cli::run()
}
