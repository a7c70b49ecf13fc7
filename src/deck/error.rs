use std::path::PathBuf;
use thiserror::Error;

use crate::deck::slide::SlideKind;

/// Errors raised while building or querying a [`Deck`](crate::deck::Deck).
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Deck must contain at least one slide")]
    Empty,

    /// A slide failed its kind's field requirements. Fatal at construction.
    #[error("Slide {index} is malformed: {reason}")]
    MalformedSlide {
        index: usize,
        /// `None` when the `type` tag itself is missing or unknown.
        kind: Option<SlideKind>,
        reason: String,
    },

    /// Caller asked for a slide outside `[0, len)`. A wiring bug, not a
    /// runtime condition.
    #[error("Slide index {index} out of range for deck of {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to read deck file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck document: {message}")]
    Parse { message: String },

    #[error("Unsupported deck format '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl DeckError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedSlide { .. })
    }
}
