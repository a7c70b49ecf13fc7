//! Standard per-kind renderers.

use crate::deck::{
    ConclusionSlide, CoursesSlide, Emphasis, FeasibilitySlide, FeedbackSlide, ImpactSlide,
    ImplementationSlide, ProblemSlide, Slide, SlideKind, SolutionSlide, StatsSlide, TitleSlide,
};
use crate::render::view::{ratio, Column, SlideView, ViewBlock};

/// Renders one payload type into a [`SlideView`].
pub trait RenderSlide {
    fn render(&self) -> SlideView;
}

/// The payload of `slide` as a renderer.
///
/// Exhaustive: a new slide case does not compile until its
/// payload implements [`RenderSlide`] and is listed here.
pub fn payload(slide: &Slide) -> &dyn RenderSlide {
    let renderer: &dyn RenderSlide = match slide {
        Slide::Title(s) => s,
        Slide::Problem(s) => s,
        Slide::Stats(s) => s,
        Slide::Feedback(s) => s,
        Slide::Solution(s) => s,
        Slide::Courses(s) => s,
        Slide::Impact(s) => s,
        Slide::Implementation(s) => s,
        Slide::Feasibility(s) => s,
        Slide::Conclusion(s) => s,
    };
    renderer
}

/// Handler registered for every kind by the standard dispatcher.
pub fn render_payload(slide: &Slide) -> SlideView {
    payload(slide).render()
}

impl RenderSlide for TitleSlide {
    fn render(&self) -> SlideView {
        SlideView {
            kind: SlideKind::Title,
            heading: self.title.clone(),
            subheading: Some(self.subtitle.clone()),
            blocks: vec![ViewBlock::Paragraph {
                text: self.detail.clone(),
                accent: true,
            }],
            centered: true,
        }
    }
}

impl RenderSlide for ProblemSlide {
    fn render(&self) -> SlideView {
        SlideView {
            kind: SlideKind::Problem,
            heading: self.title.clone(),
            subheading: None,
            blocks: vec![ViewBlock::Bullets {
                items: self.items.clone(),
                emphasis: Emphasis::Negative,
            }],
            centered: false,
        }
    }
}

impl RenderSlide for StatsSlide {
    fn render(&self) -> SlideView {
        let blocks = self
            .metrics
            .iter()
            .map(|metric| ViewBlock::Meter {
                label: metric.label.clone(),
                value: metric.value,
                total: metric.total,
                ratio: ratio(metric.value, metric.total),
                emphasis: metric.emphasis,
            })
            .collect();
        SlideView {
            kind: SlideKind::Stats,
            heading: self.title.clone(),
            subheading: Some(self.subtitle.clone()),
            blocks,
            centered: false,
        }
    }
}

impl RenderSlide for FeedbackSlide {
    fn render(&self) -> SlideView {
        let blocks = self
            .testimonials
            .iter()
            .map(|t| ViewBlock::Quote {
                text: t.quote.clone(),
                attribution: t.role.clone(),
                emphasis: t.emphasis,
            })
            .collect();
        SlideView {
            kind: SlideKind::Feedback,
            heading: self.title.clone(),
            subheading: Some(self.subtitle.clone()),
            blocks,
            centered: false,
        }
    }
}

impl RenderSlide for SolutionSlide {
    fn render(&self) -> SlideView {
        SlideView {
            kind: SlideKind::Solution,
            heading: self.title.clone(),
            subheading: Some(self.subtitle.clone()),
            blocks: vec![
                ViewBlock::Paragraph {
                    text: self.description.clone(),
                    accent: false,
                },
                ViewBlock::Tiles(self.features.clone()),
            ],
            centered: false,
        }
    }
}

impl RenderSlide for CoursesSlide {
    fn render(&self) -> SlideView {
        let columns = self
            .categories
            .iter()
            .map(|category| Column {
                heading: category.name.clone(),
                items: category.courses.clone(),
            })
            .collect();
        SlideView {
            kind: SlideKind::Courses,
            heading: self.title.clone(),
            subheading: None,
            blocks: vec![ViewBlock::Columns(columns)],
            centered: false,
        }
    }
}

impl RenderSlide for ImpactSlide {
    fn render(&self) -> SlideView {
        let blocks = self
            .areas
            .iter()
            .map(|area| ViewBlock::Card {
                badge: None,
                heading: format!("{} Impact", area.label),
                meta: None,
                body: area.impact.clone(),
            })
            .collect();
        SlideView {
            kind: SlideKind::Impact,
            heading: self.title.clone(),
            subheading: None,
            blocks,
            centered: false,
        }
    }
}

impl RenderSlide for ImplementationSlide {
    fn render(&self) -> SlideView {
        let blocks = self
            .phases
            .iter()
            .map(|phase| ViewBlock::Card {
                badge: Some(phase.phase.clone()),
                heading: phase.name.clone(),
                meta: Some(phase.duration.clone()),
                body: phase.actions.clone(),
            })
            .collect();
        SlideView {
            kind: SlideKind::Implementation,
            heading: self.title.clone(),
            subheading: None,
            blocks,
            centered: false,
        }
    }
}

impl RenderSlide for FeasibilitySlide {
    fn render(&self) -> SlideView {
        let blocks = self
            .points
            .iter()
            .map(|point| ViewBlock::Card {
                badge: Some(point.icon.clone()),
                heading: point.label.clone(),
                meta: None,
                body: point.desc.clone(),
            })
            .collect();
        SlideView {
            kind: SlideKind::Feasibility,
            heading: self.title.clone(),
            subheading: None,
            blocks,
            centered: false,
        }
    }
}

impl RenderSlide for ConclusionSlide {
    fn render(&self) -> SlideView {
        let mut blocks = vec![ViewBlock::Paragraph {
            text: self.message.clone(),
            accent: false,
        }];
        if let Some(call) = &self.call_to_action {
            blocks.push(ViewBlock::Banner(call.clone()));
        }
        SlideView {
            kind: SlideKind::Conclusion,
            heading: self.title.clone(),
            subheading: Some(self.subtitle.clone()),
            blocks,
            centered: true,
        }
    }
}
