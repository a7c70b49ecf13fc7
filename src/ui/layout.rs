use ratatui::layout::Rect;

/// Width of the `[ ‹ ]` / `[ › ]` buttons.
pub const NAV_BUTTON_WIDTH: u16 = 5;
/// The indicator of the current slide is drawn wider than the others.
pub const ACTIVE_INDICATOR_WIDTH: u16 = 4;
const INDICATOR_GAP: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn footer_rect(area: Rect) -> Rect {
    layout_regions(area).2
}

/// Clickable element of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Previous,
    Next,
    Indicator(usize),
}

/// Positions of the navigation bar elements inside the footer.
///
/// Shared by the painter and by mouse hit-testing so both always agree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavBarLayout {
    pub prev: Rect,
    pub next: Rect,
    /// One rect per slide; empty when the footer is too narrow for them.
    pub indicators: Vec<Rect>,
}

impl NavBarLayout {
    pub fn compute(footer: Rect, total: usize, current: usize) -> Self {
        let row = Rect {
            x: footer.x.saturating_add(1),
            y: footer.y.saturating_add(1),
            width: footer.width.saturating_sub(2),
            height: footer.height.saturating_sub(2).min(1),
        };
        if row.height == 0 || row.width < NAV_BUTTON_WIDTH * 2 {
            return Self::default();
        }

        let prev = Rect {
            width: NAV_BUTTON_WIDTH,
            ..row
        };
        let next = Rect {
            x: row.x + row.width - NAV_BUTTON_WIDTH,
            width: NAV_BUTTON_WIDTH,
            ..row
        };

        let widths: Vec<u16> = (0..total)
            .map(|idx| {
                if idx == current {
                    ACTIVE_INDICATOR_WIDTH
                } else {
                    1
                }
            })
            .collect();
        let needed = widths.iter().map(|w| usize::from(*w)).sum::<usize>()
            + total.saturating_sub(1) * usize::from(INDICATOR_GAP);
        // Keep one blank cell between the buttons and the indicators.
        let available = usize::from(row.width - NAV_BUTTON_WIDTH * 2).saturating_sub(2);

        let mut indicators = Vec::with_capacity(total);
        if total > 0 && needed <= available {
            let mut x = row.x + (row.width - needed as u16) / 2;
            for width in widths {
                indicators.push(Rect {
                    x,
                    width,
                    ..row
                });
                x += width + INDICATOR_GAP;
            }
        }

        Self {
            prev,
            next,
            indicators,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<NavTarget> {
        if contains(self.prev, column, row) {
            return Some(NavTarget::Previous);
        }
        if contains(self.next, column, row) {
            return Some(NavTarget::Next);
        }
        self.indicators
            .iter()
            .position(|rect| contains(*rect, column, row))
            .map(NavTarget::Indicator)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer() -> Rect {
        footer_rect(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn regions_stack_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.y, 21);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn buttons_sit_at_the_edges() {
        let bar = NavBarLayout::compute(footer(), 10, 0);
        assert_eq!(bar.hit(1, 22), Some(NavTarget::Previous));
        assert_eq!(bar.hit(78, 22), Some(NavTarget::Next));
        assert_eq!(bar.hit(40, 21), None);
    }

    #[test]
    fn active_indicator_is_wider() {
        let bar = NavBarLayout::compute(footer(), 10, 3);
        assert_eq!(bar.indicators.len(), 10);
        assert_eq!(bar.indicators[3].width, ACTIVE_INDICATOR_WIDTH);
        assert_eq!(bar.indicators[4].width, 1);
        let target = bar.indicators[7];
        assert_eq!(bar.hit(target.x, target.y), Some(NavTarget::Indicator(7)));
    }

    #[test]
    fn gaps_between_indicators_do_not_hit() {
        let bar = NavBarLayout::compute(footer(), 10, 0);
        let gap_x = bar.indicators[1].x + 1;
        assert_eq!(bar.hit(gap_x, bar.indicators[1].y), None);
    }

    #[test]
    fn narrow_footer_drops_indicators() {
        let bar = NavBarLayout::compute(Rect::new(0, 0, 16, 3), 10, 0);
        assert!(bar.indicators.is_empty());
        assert_eq!(bar.hit(1, 1), Some(NavTarget::Previous));
    }

    #[test]
    fn flat_footer_has_no_targets() {
        let bar = NavBarLayout::compute(Rect::new(0, 0, 80, 1), 10, 0);
        assert_eq!(bar, NavBarLayout::default());
    }
}
