use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use slidedeck::cli::{deck_summary, Cli};
use slidedeck::config::Config;
use slidedeck::deck::Deck;
use slidedeck::logging::init_tracing;
use slidedeck::shutdown::{spawn_signal_listener, ShutdownCoordinator};
use slidedeck::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    cli.apply_to_config(&mut config);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging)?;

    let deck = match &config.presentation.deck {
        Some(path) => Deck::load(path)
            .with_context(|| format!("Failed to load deck {}", path.display()))?,
        None => Deck::builtin().context("Builtin deck is invalid")?,
    };

    if cli.check {
        println!("{}", deck_summary(&deck));
        return Ok(());
    }

    let coordinator = ShutdownCoordinator::new();
    spawn_signal_listener(coordinator.handle());

    runtime::run(Arc::new(deck), &config.presentation, coordinator.handle()).await
}
