//! The slide content model: an immutable, validated sequence of slides.

mod error;
mod loader;
mod slide;
mod validate;

pub use error::DeckError;
pub use loader::DeckFormat;
pub use slide::{
    ConclusionSlide, CourseCategory, CoursesSlide, Emphasis, FeasibilityPoint, FeasibilitySlide,
    FeedbackSlide, ImpactArea, ImpactSlide, ImplementationSlide, Metric, Phase, ProblemSlide,
    Slide, SlideKind, SolutionSlide, StatsSlide, Testimonial, TitleSlide,
};
pub use validate::validate;

/// Ordered, non-empty, validated slides. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Validate `slides` and freeze them into a deck.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        validate(&slides)?;
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at `index`; out-of-range indexes are a caller bug and fail.
    pub fn slide_at(&self, index: usize) -> Result<&Slide, DeckError> {
        self.slides.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.slides.len(),
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Title of the opening slide.
    pub fn title(&self) -> &str {
        self.slides.first().map(Slide::title).unwrap_or_default()
    }
}
