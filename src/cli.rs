//! Command-line interface.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::deck::Deck;

#[derive(Debug, Clone, Parser)]
#[command(name = "slidedeck", version, about = "Present a slide deck in the terminal")]
pub struct Cli {
    /// Deck file to present (.toml or .json). Defaults to the bundled deck
    #[arg(short, long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Transition settle period in milliseconds
    #[arg(long, value_name = "MS")]
    pub settle_ms: Option<u64>,

    /// Do not capture mouse clicks
    #[arg(long)]
    pub no_mouse: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Validate the deck, print a summary and exit
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(deck) = &self.deck {
            config.presentation.deck = Some(deck.clone());
        }
        if let Some(settle_ms) = self.settle_ms {
            config.presentation.settle_ms = settle_ms;
        }
        if self.no_mouse {
            config.presentation.mouse = false;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

/// One line per slide: position, kind and title.
pub fn deck_summary(deck: &Deck) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} slides)", deck.title(), deck.len());
    for (idx, slide) in deck.slides().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<14} {}",
            idx + 1,
            slide.kind().as_ref(),
            slide.title()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "slidedeck",
            "--deck",
            "talk.json",
            "--settle-ms",
            "250",
            "--no-mouse",
        ]);
        let mut config = Config::default();
        cli.apply_to_config(&mut config);
        assert_eq!(config.presentation.deck, Some(PathBuf::from("talk.json")));
        assert_eq!(config.presentation.settle_ms, 250);
        assert!(!config.presentation.mouse);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["slidedeck"]);
        let mut config = Config::default();
        cli.apply_to_config(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn summary_lists_every_slide() {
        let deck = Deck::builtin().expect("builtin deck");
        let summary = deck_summary(&deck);
        assert!(summary.starts_with("Breaking Silos (10 slides)"));
        assert!(summary.contains("  3. stats          Survey Insights"));
        assert_eq!(summary.lines().count(), 11);
    }
}
