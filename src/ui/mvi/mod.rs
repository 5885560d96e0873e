//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! Every piece of UI state changes in exactly one place, its reducer.
//! The runtime redraws from the new state after each handled event.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value describing everything the view needs to draw
//! - **Intent**: an activation or other discrete event
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
