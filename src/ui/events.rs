use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

/// Upper bound on a single poll so the shutdown flag is checked often.
const POLL_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

impl AppEvent {
    /// Map a terminal event; events the app does not consume map to `None`.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. Fails only if the thread cannot be created.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("ui-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        tracing::info!(target: "events", "Shutdown signal received");
                        let _ = tx.send(AppEvent::Shutdown);
                        break;
                    }

                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(POLL_SLICE);

                    match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(raw) => {
                                if let Some(event) = AppEvent::from_terminal(raw) {
                                    if tx.send(event).is_err() {
                                        break;
                                    }
                                }
                            }
                            Err(err) => {
                                tracing::error!(target: "events", error = %err, "Terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => {
                            // Timeout — no event
                        }
                        Err(err) => {
                            tracing::error!(target: "events", error = %err, "Terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
