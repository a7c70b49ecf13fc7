//! Construction-time validation of slide payloads.
//!
//! Decoding already guarantees that every required field is present with the
//! right type. These checks cover what the type system cannot: non-empty
//! text, non-empty lists and `value <= total` for metrics.

use crate::deck::error::DeckError;
use crate::deck::slide::{
    CourseCategory, FeasibilityPoint, ImpactArea, Metric, Phase, Slide, Testimonial,
};

/// Validate a slide sequence. The first failure wins.
///
/// Pure: calling it again on the same slides gives the same answer.
pub fn validate(slides: &[Slide]) -> Result<(), DeckError> {
    if slides.is_empty() {
        return Err(DeckError::Empty);
    }

    for (index, slide) in slides.iter().enumerate() {
        check_slide(slide).map_err(|reason| DeckError::MalformedSlide {
            index,
            kind: Some(slide.kind()),
            reason,
        })?;
    }

    Ok(())
}

fn check_slide(slide: &Slide) -> Result<(), String> {
    require_text("title", slide.title())?;

    match slide {
        Slide::Title(s) => {
            require_text("subtitle", &s.subtitle)?;
            require_text("detail", &s.detail)
        }
        Slide::Problem(s) => require_items("items", &s.items, check_line),
        Slide::Stats(s) => {
            require_text("subtitle", &s.subtitle)?;
            require_items("metrics", &s.metrics, check_metric)
        }
        Slide::Feedback(s) => {
            require_text("subtitle", &s.subtitle)?;
            require_items("testimonials", &s.testimonials, check_testimonial)
        }
        Slide::Solution(s) => {
            require_text("subtitle", &s.subtitle)?;
            require_text("description", &s.description)?;
            require_items("features", &s.features, check_line)
        }
        Slide::Courses(s) => require_items("categories", &s.categories, check_category),
        Slide::Impact(s) => require_items("areas", &s.areas, check_area),
        Slide::Implementation(s) => require_items("phases", &s.phases, check_phase),
        Slide::Feasibility(s) => require_items("points", &s.points, check_point),
        Slide::Conclusion(s) => {
            require_text("subtitle", &s.subtitle)?;
            require_text("message", &s.message)?;
            match &s.call_to_action {
                Some(text) => require_text("call_to_action", text),
                None => Ok(()),
            }
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("`{field}` must not be empty"));
    }
    Ok(())
}

fn require_items<T>(
    field: &str,
    items: &[T],
    check: impl Fn(&str, &T) -> Result<(), String>,
) -> Result<(), String> {
    if items.is_empty() {
        return Err(format!("`{field}` must contain at least one entry"));
    }
    for (idx, item) in items.iter().enumerate() {
        check(&format!("{field}[{idx}]"), item)?;
    }
    Ok(())
}

fn check_line(path: &str, line: &String) -> Result<(), String> {
    require_text(path, line)
}

fn check_metric(path: &str, metric: &Metric) -> Result<(), String> {
    require_text(&format!("{path}.label"), &metric.label)?;
    if metric.total == 0 {
        return Err(format!("`{path}.total` must be greater than zero"));
    }
    if metric.value > metric.total {
        return Err(format!(
            "`{path}.value` ({}) exceeds `{path}.total` ({})",
            metric.value, metric.total
        ));
    }
    Ok(())
}

fn check_testimonial(path: &str, testimonial: &Testimonial) -> Result<(), String> {
    require_text(&format!("{path}.role"), &testimonial.role)?;
    require_text(&format!("{path}.quote"), &testimonial.quote)
}

fn check_category(path: &str, category: &CourseCategory) -> Result<(), String> {
    require_text(&format!("{path}.name"), &category.name)?;
    require_items(&format!("{path}.courses"), &category.courses, check_line)
}

fn check_area(path: &str, area: &ImpactArea) -> Result<(), String> {
    require_text(&format!("{path}.label"), &area.label)?;
    require_text(&format!("{path}.impact"), &area.impact)
}

fn check_phase(path: &str, phase: &Phase) -> Result<(), String> {
    require_text(&format!("{path}.phase"), &phase.phase)?;
    require_text(&format!("{path}.name"), &phase.name)?;
    require_text(&format!("{path}.duration"), &phase.duration)?;
    require_text(&format!("{path}.actions"), &phase.actions)
}

fn check_point(path: &str, point: &FeasibilityPoint) -> Result<(), String> {
    require_text(&format!("{path}.icon"), &point.icon)?;
    require_text(&format!("{path}.label"), &point.label)?;
    require_text(&format!("{path}.desc"), &point.desc)
}
