//! Intents accepted by the permission view-model.

use crate::ui::mvi::Intent;

/// Actions the user performs on the permission screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// User acknowledged the rationale dialog.
    RationaleButtonClicked,
    /// User pressed the "Open Settings" button.
    OpenSettingsClicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionIntent {
    User(UserEvent),

    /// Outcome of a permission request, together with the platform's
    /// answer to "should a rationale be shown" queried right after it.
    PermissionResult {
        is_granted: bool,
        should_show_rationale: bool,
    },
}

impl Intent for PermissionIntent {}

impl From<UserEvent> for PermissionIntent {
    fn from(event: UserEvent) -> Self {
        Self::User(event)
    }
}
