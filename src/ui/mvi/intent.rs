//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are discrete events (a button activation, a key press) that a
/// reducer turns into the next state.
pub trait Intent: Send + 'static {}
