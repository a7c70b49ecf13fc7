//! Shared deck builders and navigation helpers.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use slidedeck::deck::{
    Deck, Emphasis, Metric, ProblemSlide, Slide, StatsSlide, TitleSlide,
};
use slidedeck::navigation::{ManualScheduler, Navigator, SlideChange};
use tempfile::TempDir;

pub const SETTLE: Duration = Duration::from_millis(600);

pub fn title_slide(n: usize) -> Slide {
    Slide::Title(TitleSlide {
        title: format!("Slide {n}"),
        subtitle: "Subtitle".to_string(),
        detail: "Detail".to_string(),
    })
}

pub fn stats_slide(value: u32, total: u32) -> Slide {
    Slide::Stats(StatsSlide {
        title: "Survey Insights".to_string(),
        subtitle: "Responses".to_string(),
        metrics: vec![Metric {
            label: "Feel isolated".to_string(),
            value,
            total,
            emphasis: Emphasis::Negative,
        }],
    })
}

pub fn problem_slide(items: &[&str]) -> Slide {
    Slide::Problem(ProblemSlide {
        title: "The Problem".to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    })
}

/// Deck of `len` title slides.
pub fn deck_of(len: usize) -> Deck {
    Deck::new((0..len).map(title_slide).collect()).expect("valid deck")
}

/// Navigator over `len` slides driven by a manual clock.
pub fn navigator(len: usize) -> (Navigator, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let navigator = Navigator::new(&deck_of(len), scheduler.clone(), SETTLE);
    (navigator, scheduler)
}

/// Let every pending settle timer fire and hand the tickets back.
pub fn settle(navigator: &mut Navigator, scheduler: &ManualScheduler) {
    for ticket in scheduler.advance(SETTLE) {
        navigator.settle(ticket);
    }
}

/// Observer that records every notification.
pub fn recorder(navigator: &mut Navigator) -> Arc<Mutex<Vec<SlideChange>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    navigator.subscribe(move |change: SlideChange| {
        sink.lock().expect("recorder lock").push(change);
    });
    seen
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
