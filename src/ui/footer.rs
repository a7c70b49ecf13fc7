use crate::navigation::NavigationSnapshot;
use crate::ui::layout::NavBarLayout;
use crate::ui::theme::{EMERALD, GLOBAL_BORDER, SLATE_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Previous/next buttons and one indicator per slide.
pub struct NavBar<'a> {
    layout: &'a NavBarLayout,
    snapshot: NavigationSnapshot,
}

impl<'a> NavBar<'a> {
    pub fn new(layout: &'a NavBarLayout, snapshot: NavigationSnapshot) -> Self {
        Self { layout, snapshot }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .render(area, buf);

        let enabled = Style::default().fg(EMERALD).add_modifier(Modifier::BOLD);
        let disabled = Style::default().fg(SLATE_MUTED).add_modifier(Modifier::DIM);
        let at_start = self.snapshot.index == 0;
        let at_end = self.snapshot.index + 1 >= self.snapshot.total;

        let prev = self.layout.prev;
        if prev.width > 0 {
            buf.set_string(prev.x, prev.y, "[ ‹ ]", if at_start { disabled } else { enabled });
        }
        let next = self.layout.next;
        if next.width > 0 {
            buf.set_string(next.x, next.y, "[ › ]", if at_end { disabled } else { enabled });
        }

        for (idx, rect) in self.layout.indicators.iter().enumerate() {
            if idx == self.snapshot.index {
                let bar = "━".repeat(usize::from(rect.width));
                buf.set_string(rect.x, rect.y, bar, Style::default().fg(EMERALD));
            } else {
                buf.set_string(rect.x, rect.y, "●", Style::default().fg(SLATE_MUTED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(index: usize, total: usize) -> (Buffer, NavBarLayout) {
        let area = Rect::new(0, 0, 60, 3);
        let layout = NavBarLayout::compute(area, total, index);
        let mut buf = Buffer::empty(area);
        let snapshot = NavigationSnapshot {
            index,
            total,
            transition_lock: false,
        };
        NavBar::new(&layout, snapshot).render(area, &mut buf);
        (buf, layout)
    }

    #[test]
    fn current_indicator_is_a_bar() {
        let (buf, layout) = painted(2, 5);
        let active = layout.indicators[2];
        assert_eq!(buf[(active.x, active.y)].symbol(), "━");
        let other = layout.indicators[0];
        assert_eq!(buf[(other.x, other.y)].symbol(), "●");
    }

    #[test]
    fn previous_button_is_dimmed_on_first_slide() {
        let (buf, layout) = painted(0, 5);
        let cell = &buf[(layout.prev.x + 2, layout.prev.y)];
        assert_eq!(cell.symbol(), "‹");
        assert!(cell.modifier.contains(Modifier::DIM));
        let next = &buf[(layout.next.x + 2, layout.next.y)];
        assert!(!next.modifier.contains(Modifier::DIM));
    }
}
