//! Decoding decks from TOML and JSON documents.
//!
//! A document is a `slides` array whose entries are tagged by `type`. Each
//! entry is decoded on its own so decoding failures point at a slide index.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::deck::error::DeckError;
use crate::deck::slide::{Slide, SlideKind};
use crate::deck::Deck;

const BUILTIN_DECK: &str = include_str!("../../decks/breaking_silos.toml");

/// Document formats a deck can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Toml,
    Json,
}

impl DeckFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
struct RawDeck<V> {
    slides: Vec<V>,
}

impl Deck {
    /// The bundled "Breaking Silos" talk.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_toml_str(BUILTIN_DECK)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        let raw: RawDeck<toml::Value> = toml::from_str(content).map_err(|e| DeckError::Parse {
            message: e.to_string(),
        })?;
        let slides = decode_slides(raw.slides, |value| {
            let tag = value.get("type").and_then(toml::Value::as_str).map(str::to_owned);
            (tag, value.try_into::<Slide>().map_err(|e| e.to_string()))
        })?;
        Self::new(slides)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DeckError> {
        let raw: RawDeck<serde_json::Value> =
            serde_json::from_str(content).map_err(|e| DeckError::Parse {
                message: e.to_string(),
            })?;
        let slides = decode_slides(raw.slides, |value| {
            let tag = value.get("type").and_then(|t| t.as_str()).map(str::to_owned);
            (tag, decode_json(value))
        })?;
        Self::new(slides)
    }

    /// Load a deck file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let format = DeckFormat::from_path(path).ok_or_else(|| DeckError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = fs::read_to_string(path).map_err(|e| DeckError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let deck = match format {
            DeckFormat::Toml => Self::from_toml_str(&content)?,
            DeckFormat::Json => Self::from_json_str(&content)?,
        };
        tracing::info!(path = %path.display(), slides = deck.len(), "Loaded deck");
        Ok(deck)
    }
}

fn decode_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Decode raw entries one by one. `decode` returns the raw `type` tag (if
/// any) alongside the decode result so failures can name the slide kind.
fn decode_slides<V>(
    values: Vec<V>,
    decode: impl Fn(V) -> (Option<String>, Result<Slide, String>),
) -> Result<Vec<Slide>, DeckError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let (tag, result) = decode(value);
            result.map_err(|reason| DeckError::MalformedSlide {
                index,
                kind: tag.as_deref().and_then(|t| SlideKind::from_str(t).ok()),
                reason,
            })
        })
        .collect()
}
