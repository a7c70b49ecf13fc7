use crate::ui::app::App;
use crate::ui::footer::NavBar;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, NavBarLayout};
use crate::ui::slide_body::{error_paragraph, slide_paragraph};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let snapshot = app.snapshot();

    let header_widget = Header::new(app.deck().title());
    frame.render_widget(header_widget.widget(header, snapshot), header);

    frame.render_widget(Clear, body);
    match app.view() {
        Ok(view) => frame.render_widget(
            slide_paragraph(view, body.width, snapshot.transition_lock),
            body,
        ),
        Err(err) => frame.render_widget(error_paragraph(err), body),
    }

    let nav_layout = NavBarLayout::compute(footer, snapshot.total, snapshot.index);
    frame.render_widget(NavBar::new(&nav_layout, snapshot), footer);
}
