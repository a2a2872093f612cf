//! Camera permission view-model.
//!
//! Maps user actions and permission-result callbacks onto a
//! [`PermissionUiState`] and one-shot [`UiEvent`]s for the shell.

mod event;
mod identity;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use event::UiEvent;
pub use identity::Permission;
pub use intent::{PermissionIntent, UserEvent};
pub use reducer::PermissionReducer;
pub use state::{
    PermissionUiState, TEXT_GRANTED, TEXT_IDLE, TEXT_PERMANENTLY_DENIED, TEXT_RATIONALE,
};
pub use view_model::PermissionViewModel;
