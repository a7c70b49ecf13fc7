use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::PresentationConfig;
use crate::deck::Deck;
use crate::navigation::SlideChange;
use crate::render::RenderDispatcher;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{InputSubscription, TimerScheduler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the presenter until the user quits or shutdown is signalled.
pub async fn run(
    deck: Arc<Deck>,
    config: &PresentationConfig,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.mouse)?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let scheduler = TimerScheduler::new(tx.clone(), Handle::current());
    let mut app = App::new(deck, RenderDispatcher::standard(), scheduler, config.settle());
    app.subscribe(|change: SlideChange| {
        tracing::info!(slide = change.index + 1, total = change.total, "Showing slide");
    });

    let size = terminal.size()?;
    app.on_resize(size.width, size.height);
    // First slide is on screen before any input is read.
    terminal.draw(|frame| draw(frame, &app))?;

    let input = InputSubscription::start(tx, config.tick_rate())?;
    tracing::info!(slides = app.deck().len(), "Presenter started");

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                app.handle_event(event);
            }
            _ = shutdown.wait() => {
                app.request_quit();
            }
        }

        if app.should_quit() {
            break;
        }
        terminal.draw(|frame| draw(frame, &app))?;
    }

    drop(input);
    drop(guard);
    tracing::info!("Presenter stopped");
    Ok(())
}
