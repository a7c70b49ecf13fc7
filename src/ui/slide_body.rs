//! Paints a [`SlideView`] as styled text lines.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::render::{RenderError, SlideView, ViewBlock};
use crate::ui::theme::{
    emphasis_color, CYAN, EMERALD, RED, SLATE_MUTED, SLATE_TEXT, SLATE_TRACK,
};

/// Horizontal padding inside the body block.
const BODY_PADDING: u16 = 4;

/// Build the body widget. `settling` dims the slide while its transition
/// settles.
pub fn slide_paragraph(view: &SlideView, width: u16, settling: bool) -> Paragraph<'static> {
    let inner_width = usize::from(width.saturating_sub(BODY_PADDING * 2 + 2)).max(10);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        view.heading.to_uppercase(),
        Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
    )));
    if let Some(subheading) = &view.subheading {
        lines.push(Line::from(Span::styled(
            subheading.clone(),
            Style::default().fg(CYAN),
        )));
    }
    lines.push(Line::default());

    for block in &view.blocks {
        push_block(&mut lines, block, inner_width);
        lines.push(Line::default());
    }

    let mut style = Style::default().fg(SLATE_TEXT);
    if settling {
        style = style.add_modifier(Modifier::DIM);
    }
    let alignment = if view.centered {
        Alignment::Center
    } else {
        Alignment::Left
    };

    Paragraph::new(lines)
        .style(style)
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::NONE)
                .padding(Padding::new(BODY_PADDING, BODY_PADDING, 1, 0)),
        )
}

/// Shown instead of a slide when rendering failed. Never blank.
pub fn error_paragraph(error: &RenderError) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Unable to render this slide",
            Style::default().fg(RED).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(error.to_string()),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(RED)),
        )
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &ViewBlock, width: usize) {
    match block {
        ViewBlock::Paragraph { text, accent } => {
            let style = if *accent {
                Style::default().fg(EMERALD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text.clone(), style)));
        }
        ViewBlock::Bullets { items, emphasis } => {
            let marker = Style::default().fg(emphasis_color(*emphasis));
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled(" ⚠  ", marker),
                    Span::raw(item.clone()),
                ]));
            }
        }
        ViewBlock::Meter {
            label,
            value,
            total,
            ratio,
            emphasis,
        } => {
            let figure = format!("{value} / {total}");
            let padding = width
                .saturating_sub(label.chars().count())
                .saturating_sub(figure.chars().count())
                .max(1);
            lines.push(Line::from(vec![
                Span::styled(label.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(padding)),
                Span::styled(figure, Style::default().fg(EMERALD)),
            ]));
            let filled = ((width as f64) * ratio).round() as usize;
            let filled = filled.min(width);
            lines.push(Line::from(vec![
                Span::styled("█".repeat(filled), Style::default().fg(emphasis_color(*emphasis))),
                Span::styled("░".repeat(width - filled), Style::default().fg(SLATE_TRACK)),
            ]));
        }
        ViewBlock::Quote {
            text,
            attribution,
            emphasis,
        } => {
            lines.push(Line::from(Span::styled(
                format!("“{text}”"),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(vec![
                Span::styled("  ● ", Style::default().fg(emphasis_color(*emphasis))),
                Span::styled(format!("— {attribution}"), Style::default().fg(CYAN)),
            ]));
        }
        ViewBlock::Tiles(tiles) => {
            let spans: Vec<Span<'static>> = tiles
                .iter()
                .flat_map(|tile| {
                    [
                        Span::styled(" ◆ ", Style::default().fg(EMERALD)),
                        Span::styled(
                            format!("{tile}   "),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
        }
        ViewBlock::Columns(columns) => {
            for column in columns {
                lines.push(Line::from(Span::styled(
                    column.heading.clone(),
                    Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
                )));
                let joined = column.items.join("  ·  ");
                lines.push(Line::from(format!("  {joined}")));
            }
        }
        ViewBlock::Card {
            badge,
            heading,
            meta,
            body,
        } => {
            let mut head = Vec::new();
            if let Some(badge) = badge {
                head.push(Span::styled(
                    format!("[{badge}] "),
                    Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
                ));
            }
            head.push(Span::styled(
                heading.clone(),
                Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
            ));
            if let Some(meta) = meta {
                head.push(Span::styled(format!("  · {meta}"), Style::default().fg(SLATE_MUTED)));
            }
            lines.push(Line::from(head));
            lines.push(Line::from(format!("    {body}")));
        }
        ViewBlock::Banner(text) => {
            lines.push(Line::from(Span::styled(
                format!("  {text}  "),
                Style::default()
                    .fg(EMERALD)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Emphasis, SlideKind};

    fn meter_view(value: u32, total: u32) -> SlideView {
        SlideView {
            kind: SlideKind::Stats,
            heading: "Survey".to_string(),
            subheading: None,
            blocks: vec![ViewBlock::Meter {
                label: "Isolated".to_string(),
                value,
                total,
                ratio: crate::render::ratio(value, total),
                emphasis: Emphasis::Info,
            }],
            centered: false,
        }
    }

    fn bar_line(lines: &[Line<'static>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .find(|text| text.starts_with('█') || text.starts_with('░'))
            .expect("bar line")
    }

    #[test]
    fn meter_bar_fills_proportionally() {
        let mut lines = Vec::new();
        let view = meter_view(30, 120);
        push_block(&mut lines, &view.blocks[0], 40);
        let bar = bar_line(&lines);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(bar.chars().count(), 40);
    }

    #[test]
    fn empty_metric_draws_only_track() {
        let mut lines = Vec::new();
        let view = meter_view(0, 120);
        push_block(&mut lines, &view.blocks[0], 20);
        assert!(bar_line(&lines).chars().all(|c| c == '░'));
    }
}
