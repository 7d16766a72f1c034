use clap::Parser;
use seating_engine::cli::{Cli, run};
use seating_engine::setup_environment;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // dotenv, work dir, logging
    let config = setup_environment()?;

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
