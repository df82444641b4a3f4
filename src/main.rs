use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod output;

use cli::Cli;

fn main() -> Result<()> {
    // .env has to be loaded before clap reads the env fallbacks
    let env_file = config::load_env_file();

    // Initialize tracing
    config::init_tracing();
    match env_file {
        Some(path) => tracing::debug!("Loaded environment from {}", path.display()),
        None => tracing::trace!("No .env file found"),
    }

    let cli = Cli::parse();
    cli.run()?;

    Ok(())
}
