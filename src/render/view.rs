use crate::deck::{Emphasis, SlideKind};

/// Terminal-agnostic description of a rendered slide.
///
/// Built only from the slide's own payload; the shell decides colors,
/// spacing and animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub kind: SlideKind,
    pub heading: String,
    pub subheading: Option<String>,
    pub blocks: Vec<ViewBlock>,
    /// Title-style slides are laid out centered.
    pub centered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewBlock {
    Paragraph {
        text: String,
        accent: bool,
    },
    Bullets {
        items: Vec<String>,
        emphasis: Emphasis,
    },
    /// Proportional bar; `ratio` is `value / total` clamped to `[0, 1]`.
    Meter {
        label: String,
        value: u32,
        total: u32,
        ratio: f64,
        emphasis: Emphasis,
    },
    Quote {
        text: String,
        attribution: String,
        emphasis: Emphasis,
    },
    Tiles(Vec<String>),
    Columns(Vec<Column>),
    Card {
        badge: Option<String>,
        heading: String,
        meta: Option<String>,
        body: String,
    },
    Banner(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub heading: String,
    pub items: Vec<String>,
}

/// `value / total`, clamped; a zero total yields an empty bar.
pub fn ratio(value: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(total)).clamp(0.0, 1.0)
}
