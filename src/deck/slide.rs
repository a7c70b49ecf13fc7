use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Discriminant of [`Slide`], used as the key of the render handler table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    Problem,
    Stats,
    Feedback,
    Solution,
    Courses,
    Impact,
    Implementation,
    Feasibility,
    Conclusion,
}

/// Emphasis tag attached to metrics and testimonials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Positive,
    Negative,
    Info,
}

/// One slide of a deck.
///
/// The `type` tag selects the case and the case alone decides which payload
/// fields exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Slide {
    Title(TitleSlide),
    Problem(ProblemSlide),
    Stats(StatsSlide),
    Feedback(FeedbackSlide),
    Solution(SolutionSlide),
    Courses(CoursesSlide),
    Impact(ImpactSlide),
    Implementation(ImplementationSlide),
    Feasibility(FeasibilitySlide),
    Conclusion(ConclusionSlide),
}

impl Slide {
    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Title(_) => SlideKind::Title,
            Slide::Problem(_) => SlideKind::Problem,
            Slide::Stats(_) => SlideKind::Stats,
            Slide::Feedback(_) => SlideKind::Feedback,
            Slide::Solution(_) => SlideKind::Solution,
            Slide::Courses(_) => SlideKind::Courses,
            Slide::Impact(_) => SlideKind::Impact,
            Slide::Implementation(_) => SlideKind::Implementation,
            Slide::Feasibility(_) => SlideKind::Feasibility,
            Slide::Conclusion(_) => SlideKind::Conclusion,
        }
    }

    /// Every slide kind carries a title.
    pub fn title(&self) -> &str {
        match self {
            Slide::Title(s) => &s.title,
            Slide::Problem(s) => &s.title,
            Slide::Stats(s) => &s.title,
            Slide::Feedback(s) => &s.title,
            Slide::Solution(s) => &s.title,
            Slide::Courses(s) => &s.title,
            Slide::Impact(s) => &s.title,
            Slide::Implementation(s) => &s.title,
            Slide::Feasibility(s) => &s.title,
            Slide::Conclusion(s) => &s.title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemSlide {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSlide {
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<Metric>,
}

/// A survey-style figure: `value` out of `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    pub label: String,
    pub value: u32,
    pub total: u32,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedbackSlide {
    pub title: String,
    pub subtitle: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub role: String,
    pub quote: String,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolutionSlide {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoursesSlide {
    pub title: String,
    pub categories: Vec<CourseCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseCategory {
    pub name: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactSlide {
    pub title: String,
    pub areas: Vec<ImpactArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactArea {
    pub label: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImplementationSlide {
    pub title: String,
    pub phases: Vec<Phase>,
}

/// One step of a rollout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phase {
    /// Short badge, usually the step number.
    pub phase: String,
    pub name: String,
    pub duration: String,
    pub actions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeasibilitySlide {
    pub title: String,
    pub points: Vec<FeasibilityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeasibilityPoint {
    pub icon: String,
    pub label: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConclusionSlide {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names_match_serde_tags() {
        for kind in SlideKind::iter() {
            let tag = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(tag.as_str(), Some(kind.as_ref()));
            assert_eq!(SlideKind::from_str(kind.as_ref()).ok(), Some(kind));
        }
    }

    #[test]
    fn slide_kind_follows_variant() {
        let slide = Slide::Problem(ProblemSlide {
            title: "Isolation".to_string(),
            items: vec!["Silos".to_string()],
        });
        assert_eq!(slide.kind(), SlideKind::Problem);
        assert_eq!(slide.title(), "Isolation");
    }

    #[test]
    fn internally_tagged_json_decodes() {
        let slide: Slide = serde_json::from_str(
            r#"{"type":"conclusion","title":"T","subtitle":"S","message":"M"}"#,
        )
        .expect("decode");
        match slide {
            Slide::Conclusion(c) => assert!(c.call_to_action.is_none()),
            other => panic!("Expected conclusion, got {:?}", other.kind()),
        }
    }

    #[test]
    fn emphasis_tags_are_lowercase() {
        let emphasis: Emphasis = serde_json::from_str("\"negative\"").expect("decode");
        assert_eq!(emphasis, Emphasis::Negative);
    }
}
