//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to derive the next one, compared to
/// detect changes, and defaulted to produce the freshly mounted state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
