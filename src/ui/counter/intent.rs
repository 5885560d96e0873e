use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// The button was clicked or pressed from the keyboard.
    Activate,
}

impl Intent for CounterIntent {}
