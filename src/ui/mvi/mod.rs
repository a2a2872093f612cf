//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer, plus the store that owns the state and
//! the channel that carries one-shot effects to the view.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                    │
//!    │          └──→ Effect ──→ Shell│
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Effect**: One-shot command for the shell, never replayed
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Single writer of the state; posts effects to subscribers

mod channel;
mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use channel::{EventChannel, EventStream, DEFAULT_EVENT_CAPACITY};
pub use effect::Effect;
pub use intent::Intent;
pub use reducer::{Reducer, Reduction};
pub use state::UiState;
pub use store::{StateStream, Store};
