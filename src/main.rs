/*
 * Boid Flocking Simulation
 *
 * Boids steer by four local rules: cohesion, separation, alignment and
 * turning back at the margins, with their speed kept inside a fixed range.
 * Parameters come from the command line and can be tuned live in the
 * control panel.
 */

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flocking::app;
use flocking::cli::Cli;
use flocking::Simulation;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let params = cli.params();
    let simulation = Simulation::new(params, cli.seed).context("invalid simulation parameters")?;

    info!(?params, "starting flocking simulation");
    app::launch(simulation);
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
