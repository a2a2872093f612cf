//! Reducer for the permission screen.

use crate::ui::mvi::{Reducer, Reduction};

use super::event::UiEvent;
use super::intent::{PermissionIntent, UserEvent};
use super::state::{PermissionUiState, TEXT_GRANTED, TEXT_PERMANENTLY_DENIED, TEXT_RATIONALE};

/// Reducer for permission state transitions.
pub struct PermissionReducer;

impl Reducer for PermissionReducer {
    type State = PermissionUiState;
    type Intent = PermissionIntent;
    type Effect = UiEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect> {
        match intent {
            PermissionIntent::User(UserEvent::OpenSettingsClicked) => {
                Reduction::with_effect(state, UiEvent::OpenAppSettings)
            }

            PermissionIntent::User(UserEvent::RationaleButtonClicked) => Reduction::with_effect(
                PermissionUiState {
                    is_rationale_visible: false,
                    ..state
                },
                UiEvent::RequestCameraPermission,
            ),

            // Order matters: granted wins, then a denial the platform still
            // wants explained, then permanent denial.
            PermissionIntent::PermissionResult {
                is_granted: true, ..
            } => Reduction::state(PermissionUiState {
                permission_text: TEXT_GRANTED.to_string(),
                permission_permanently_denied: false,
                ..state
            }),

            PermissionIntent::PermissionResult {
                is_granted: false,
                should_show_rationale: true,
            } => Reduction::state(PermissionUiState {
                is_rationale_visible: true,
                permission_text: TEXT_RATIONALE.to_string(),
                permission_permanently_denied: false,
            }),

            PermissionIntent::PermissionResult {
                is_granted: false,
                should_show_rationale: false,
            } => Reduction::state(PermissionUiState {
                is_rationale_visible: false,
                permission_text: TEXT_PERMANENTLY_DENIED.to_string(),
                permission_permanently_denied: true,
            }),
        }
    }
}
