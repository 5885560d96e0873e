use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::input::{handle_event, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &Config) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    shutdown.register_signals()?;

    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new();
    let events = EventHandler::new(tick_rate, shutdown)?;
    tracing::info!(
        target: "runtime",
        tick_rate_ms = config.ui.tick_rate_ms,
        mouse = config.ui.mouse,
        "UI started"
    );

    loop {
        // Always redraw from current state; there is no dependency tracking.
        let area = terminal.draw(|frame| draw(frame, &app))?.area;
        if app.should_quit() {
            break;
        }

        let action = match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event, area),
            Err(RecvTimeoutError::Timeout) => InputAction::None,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        match action {
            InputAction::Activated => {
                tracing::debug!(target: "runtime", count = app.count(), "Button activated");
            }
            InputAction::Quit => tracing::info!(target: "runtime", "Quit requested"),
            InputAction::None => {}
        }
    }

    drop(guard);
    tracing::info!(target: "runtime", final_count = app.count(), "UI stopped");
    Ok(())
}
