use crate::ui::mvi::UiState;

/// Text shown on the button before the current count.
pub const LABEL_PREFIX: &str = "Count is ";

/// Counter owned by a mounted component. Starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    count: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Button label, e.g. `Count is 3`.
    pub fn label(&self) -> String {
        format!("{LABEL_PREFIX}{}", self.count)
    }
}
