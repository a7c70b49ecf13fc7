use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::navigation::{SettleScheduler, SettleTicket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// A transition's settle delay elapsed.
    Settled(SettleTicket),
}

pub type EventSender = UnboundedSender<AppEvent>;

/// Background reader forwarding terminal events into the app channel.
///
/// The thread stops when the subscription is dropped or the channel closes.
pub struct InputSubscription {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl InputSubscription {
    pub fn start(tx: EventSender, tick_rate: Duration) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let thread = thread::Builder::new()
            .name("slidedeck-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                while !thread_stop.load(Ordering::Relaxed) {
                    // Short poll so the stop flag is checked frequently.
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                            Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => {
                                tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
                tracing::debug!("Input reader stopped");
            })?;

        Ok(Self {
            stop,
            thread: Some(thread),
        })
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Settle scheduler backed by tokio timers.
///
/// Each ticket is delivered back to the event loop as [`AppEvent::Settled`].
pub struct TimerScheduler {
    tx: EventSender,
    runtime: Handle,
}

impl TimerScheduler {
    pub fn new(tx: EventSender, runtime: Handle) -> Self {
        Self { tx, runtime }
    }
}

impl SettleScheduler for TimerScheduler {
    fn schedule(&mut self, delay: Duration, ticket: SettleTicket) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the presenter already exited.
            let _ = tx.send(AppEvent::Settled(ticket));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn timer_scheduler_delivers_ticket_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TimerScheduler::new(tx, Handle::current());

        scheduler.schedule(Duration::from_millis(600), SettleTicket(7));
        assert!(rx.try_recv().is_err());

        let event = rx.recv().await;
        assert_eq!(event, Some(AppEvent::Settled(SettleTicket(7))));
    }
}
