//! Model-View-Intent primitives for view state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for intents (user selections, navigation).
pub trait Intent: Send + 'static {}

/// Marker trait for view state: self-contained, cloneable, comparable.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
