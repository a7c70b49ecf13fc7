use crate::navigation::NavigationSnapshot;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, SLATE_MUTED, SLATE_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = "←/→ Navigate │ 1-9 Jump │ Q Quit";

pub struct Header<'a> {
    deck_title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(deck_title: &'a str) -> Self {
        Self { deck_title }
    }

    pub fn widget(&self, area: Rect, snapshot: NavigationSnapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(SLATE_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let hint_style = Style::default().fg(SLATE_MUTED).add_modifier(Modifier::DIM);

        let title = format!("  {}", self.deck_title);
        let counter = format!("{} / {}  ", snapshot.index + 1, snapshot.total);

        // Pad with char counts, not bytes: the hints contain arrows.
        let used = title.chars().count() + 5 + HINTS.chars().count() + counter.chars().count();
        let padding = usize::from(area.width).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(title, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(HINTS, hint_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(counter, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
