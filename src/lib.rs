//! Terminal slide presenter.
//!
//! The core is the [`navigation`] state machine over an immutable
//! [`deck::Deck`] of tagged slides, plus the [`render::RenderDispatcher`]
//! that turns each slide into a [`render::SlideView`]. The [`ui`] module is
//! the terminal shell that paints views and feeds input back as commands.

pub mod cli;
pub mod config;
pub mod deck;
pub mod logging;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod shutdown;
pub mod ui;
