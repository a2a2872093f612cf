//! State for the permission screen.

use crate::ui::mvi::UiState;

pub const TEXT_IDLE: &str = "Permission Idle";
pub const TEXT_GRANTED: &str = "Permission granted";
pub const TEXT_PERMANENTLY_DENIED: &str = "Permission permanently denied";
/// The status line is blanked while the rationale dialog is up.
pub const TEXT_RATIONALE: &str = "";

/// Everything the permission screen needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionUiState {
    /// Render the rationale dialog.
    pub is_rationale_visible: bool,
    /// Status line.
    pub permission_text: String,
    /// Render the "Open Settings" button.
    pub permission_permanently_denied: bool,
}

impl Default for PermissionUiState {
    fn default() -> Self {
        Self {
            is_rationale_visible: false,
            permission_text: TEXT_IDLE.to_string(),
            permission_permanently_denied: false,
        }
    }
}

impl UiState for PermissionUiState {}

impl PermissionUiState {
    /// The rationale dialog and the settings button are mutually exclusive.
    pub fn is_consistent(&self) -> bool {
        !(self.is_rationale_visible && self.permission_permanently_denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = PermissionUiState::default();
        assert!(!state.is_rationale_visible);
        assert_eq!(state.permission_text, "Permission Idle");
        assert!(!state.permission_permanently_denied);
        assert!(state.is_consistent());
    }

    #[test]
    fn both_modes_is_inconsistent() {
        let state = PermissionUiState {
            is_rationale_visible: true,
            permission_text: String::new(),
            permission_permanently_denied: true,
        };
        assert!(!state.is_consistent());
    }
}
