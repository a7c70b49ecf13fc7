use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

/// Terminal modes switched on for the presentation.
#[derive(Debug, Clone, Copy)]
struct PresenterModes {
    mouse_capture: bool,
}

impl PresenterModes {
    fn enter(self, stdout: &mut Stdout) -> io::Result<()> {
        enable_raw_mode()?;
        stdout.execute(EnterAlternateScreen)?;
        if self.mouse_capture {
            stdout.execute(EnableMouseCapture)?;
        }
        stdout.execute(TermClear(ClearType::All))?;
        stdout.execute(Hide)?;
        Ok(())
    }

    /// Best effort: every step runs even if an earlier one failed.
    fn leave(self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse_capture {
            let _ = stdout.execute(DisableMouseCapture);
        }
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

/// Restores the terminal on drop or from the panic hook, whichever runs
/// first. The modes are taken out of the shared slot so they are left once.
pub struct TerminalGuard {
    active: Arc<Mutex<Option<PresenterModes>>>,
}

impl TerminalGuard {
    fn new(modes: PresenterModes) -> Self {
        let guard = Self {
            active: Arc::new(Mutex::new(Some(modes))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let active = Arc::clone(&self.active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_from(&active);
            default_hook(info);
        }));
    }

    pub fn restore(&self) {
        restore_from(&self.active);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn restore_from(active: &Mutex<Option<PresenterModes>>) {
    let modes = active.lock().ok().and_then(|mut slot| slot.take());
    if let Some(modes) = modes {
        modes.leave();
    }
}

/// Enter raw mode and the alternate screen, with mouse capture when
/// `mouse` is set.
pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let modes = PresenterModes {
        mouse_capture: mouse,
    };
    let mut stdout = io::stdout();
    if let Err(err) = modes.enter(&mut stdout) {
        modes.leave();
        return Err(err);
    }
    let guard = TerminalGuard::new(modes);

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok((terminal, guard))
}
