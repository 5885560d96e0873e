use crate::ui::app::App;
use crate::ui::events::AppEvent;
use crate::ui::layout::hits_button;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Action taken after processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Event ignored.
    None,
    /// The button was activated and the counter incremented.
    Activated,
    /// Quit requested.
    Quit,
}

/// Route one event from the input thread. `area` is the last drawn frame,
/// used to hit-test mouse clicks against what is on screen.
pub fn handle_event(app: &mut App, event: AppEvent, area: Rect) -> InputAction {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse, area),
        // A redraw follows every event; nothing to change here.
        AppEvent::Tick | AppEvent::Resize(..) => InputAction::None,
        AppEvent::Shutdown => {
            app.request_quit();
            InputAction::Quit
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return InputAction::Quit;
    }

    // The button is the only focusable control, so it always has focus.
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate();
            InputAction::Activated
        }
        _ => InputAction::None,
    }
}

/// Handle a mouse event against the last drawn `area`.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if hits_button(area, mouse.column, mouse.row) => {
            app.activate();
            InputAction::Activated
        }
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
