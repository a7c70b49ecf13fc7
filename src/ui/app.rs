use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;

use crate::deck::{Deck, DeckError, Slide};
use crate::navigation::{
    MoveOutcome, NavCommand, NavigationError, NavigationObserver, NavigationSnapshot, Navigator,
    SettleScheduler, SettleTicket,
};
use crate::render::{RenderDispatcher, RenderError, SlideView};
use crate::ui::events::AppEvent;
use crate::ui::input::{translate_key, translate_mouse, InputAction};
use crate::ui::layout::{footer_rect, NavBarLayout};

/// What the shell paints: the slide at the current index.
#[derive(Debug, Clone, Copy)]
pub struct SlideFrame<'a> {
    pub index: usize,
    pub total: usize,
    pub slide: &'a Slide,
}

pub struct App {
    deck: Arc<Deck>,
    dispatcher: RenderDispatcher,
    navigator: Navigator,
    /// Rendered view of the current slide, refreshed on every transition.
    view: Result<SlideView, RenderError>,
    size: Option<(u16, u16)>,
    should_quit: bool,
}

impl App {
    /// Slide 0 is rendered immediately with the lock released.
    pub fn new(
        deck: Arc<Deck>,
        dispatcher: RenderDispatcher,
        scheduler: impl SettleScheduler + 'static,
        settle_after: Duration,
    ) -> Self {
        let navigator = Navigator::new(&deck, scheduler, settle_after);
        let view = render_at(&deck, &dispatcher, navigator.state().current());
        Self {
            deck,
            dispatcher,
            navigator,
            view,
            size: None,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = translate_key(key, self.deck.len());
                self.apply(action);
            }
            AppEvent::Mouse(mouse) => {
                let action = translate_mouse(mouse, &self.nav_bar(), self.deck.len());
                self.apply(action);
            }
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::Tick => {}
            AppEvent::Settled(ticket) => self.on_settled(ticket),
        }
    }

    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::None => {}
            InputAction::Quit => self.request_quit(),
            InputAction::Navigate(command) => {
                // Out-of-range jumps are already logged by the navigator.
                let _ = self.navigate(command);
            }
        }
    }

    pub fn navigate(&mut self, command: NavCommand) -> Result<MoveOutcome, NavigationError> {
        let outcome = self.navigator.request_move(command)?;
        if outcome.is_moved() {
            self.refresh_view();
        }
        Ok(outcome)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_settled(&mut self, ticket: SettleTicket) {
        self.navigator.settle(ticket);
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.navigator.snapshot()
    }

    pub fn current_frame(&self) -> Result<SlideFrame<'_>, DeckError> {
        let index = self.navigator.state().current();
        let slide = self.deck.slide_at(index)?;
        Ok(SlideFrame {
            index,
            total: self.deck.len(),
            slide,
        })
    }

    pub fn view(&self) -> Result<&SlideView, &RenderError> {
        self.view.as_ref()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn subscribe(&mut self, observer: impl NavigationObserver + 'static) {
        self.navigator.subscribe(observer);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Hit regions of the navigation bar for the last known terminal size.
    pub fn nav_bar(&self) -> NavBarLayout {
        let Some((cols, rows)) = self.size else {
            return NavBarLayout::default();
        };
        let snapshot = self.snapshot();
        NavBarLayout::compute(
            footer_rect(Rect::new(0, 0, cols, rows)),
            snapshot.total,
            snapshot.index,
        )
    }

    fn refresh_view(&mut self) {
        self.view = render_at(&self.deck, &self.dispatcher, self.navigator.state().current());
    }
}

fn render_at(
    deck: &Deck,
    dispatcher: &RenderDispatcher,
    index: usize,
) -> Result<SlideView, RenderError> {
    let view = deck
        .slide_at(index)
        .map_err(RenderError::from)
        .and_then(|slide| dispatcher.dispatch(slide));
    if let Err(err) = &view {
        tracing::error!(error = %err, index, "Slide render failed");
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ManualScheduler;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> (App, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let deck = Arc::new(Deck::builtin().expect("builtin deck"));
        let app = App::new(
            deck,
            RenderDispatcher::standard(),
            scheduler.clone(),
            Duration::from_millis(600),
        );
        (app, scheduler)
    }

    #[test]
    fn starts_on_first_slide_with_view() {
        let (app, _) = app();
        assert_eq!(app.snapshot().index, 0);
        assert!(!app.snapshot().transition_lock);
        assert!(app.view().is_ok());
    }

    #[test]
    fn first_view_reports_missing_title_handler() {
        let mut dispatcher = RenderDispatcher::standard();
        dispatcher.unregister(crate::deck::SlideKind::Title);
        let deck = Arc::new(Deck::builtin().expect("builtin deck"));
        let app = App::new(deck, dispatcher, ManualScheduler::new(), Duration::from_millis(600));
        assert!(matches!(
            app.view(),
            Err(RenderError::UnknownVariant {
                kind: crate::deck::SlideKind::Title
            })
        ));
    }

    #[test]
    fn quit_key_sets_flag() {
        let (mut app, _) = app();
        app.handle_event(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn settled_event_releases_lock() {
        let (mut app, scheduler) = app();
        app.handle_event(AppEvent::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)));
        assert!(app.snapshot().transition_lock);
        for ticket in scheduler.advance(Duration::from_millis(600)) {
            app.handle_event(AppEvent::Settled(ticket));
        }
        assert!(!app.snapshot().transition_lock);
        assert_eq!(app.snapshot().index, 1);
    }
}
