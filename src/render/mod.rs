//! Render dispatch: one registered handler per slide kind.

mod handlers;
mod view;

use std::collections::HashMap;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::deck::{DeckError, Slide, SlideKind};

pub use handlers::{payload, render_payload, RenderSlide};
pub use view::{ratio, Column, SlideView, ViewBlock};

#[derive(Debug, Error)]
pub enum RenderError {
    /// The slide's kind has no handler. Schema and dispatcher have drifted.
    #[error("No renderer registered for slide kind '{kind}'")]
    UnknownVariant { kind: SlideKind },

    #[error(transparent)]
    Slide(#[from] DeckError),
}

/// Handler signature. Handlers see only the slide they render.
pub type Handler = Box<dyn Fn(&Slide) -> SlideView + Send + Sync>;

/// Table from slide kind to handler.
pub struct RenderDispatcher {
    handlers: HashMap<SlideKind, Handler>,
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl RenderDispatcher {
    /// A table with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The standard renderer registered for every kind.
    pub fn standard() -> Self {
        let mut dispatcher = Self::empty();
        for kind in SlideKind::iter() {
            dispatcher.register(kind, render_payload);
        }
        dispatcher
    }

    /// Register (or replace) the handler for `kind`.
    pub fn register<F>(&mut self, kind: SlideKind, handler: F) -> &mut Self
    where
        F: Fn(&Slide) -> SlideView + Send + Sync + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    /// Remove the handler for `kind`. Returns whether one was registered.
    pub fn unregister(&mut self, kind: SlideKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    pub fn has_handler(&self, kind: SlideKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Kinds with no registered handler, in declaration order.
    pub fn missing_kinds(&self) -> Vec<SlideKind> {
        SlideKind::iter().filter(|kind| !self.has_handler(*kind)).collect()
    }

    pub fn dispatch(&self, slide: &Slide) -> Result<SlideView, RenderError> {
        let kind = slide.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or(RenderError::UnknownVariant { kind })?;
        Ok(handler(slide))
    }
}
