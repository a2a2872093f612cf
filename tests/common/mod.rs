//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use permflow::permission::{
    Permission, PermissionUiState, PermissionViewModel, TEXT_GRANTED, TEXT_PERMANENTLY_DENIED,
};
use permflow::platform::SimulatedPlatform;
use permflow::shell::PermissionShell;
use permflow::ui::app::App;

pub fn view_model() -> PermissionViewModel {
    PermissionViewModel::new(Permission::camera(), 8)
}

pub fn shell() -> PermissionShell<SimulatedPlatform> {
    PermissionShell::new(view_model(), SimulatedPlatform::default())
}

/// App that has already been started (system prompt showing).
pub fn started_app() -> App {
    let mut app = App::new(shell());
    app.start();
    app
}

pub fn granted_state() -> PermissionUiState {
    PermissionUiState {
        is_rationale_visible: false,
        permission_text: TEXT_GRANTED.to_string(),
        permission_permanently_denied: false,
    }
}

pub fn rationale_state() -> PermissionUiState {
    PermissionUiState {
        is_rationale_visible: true,
        permission_text: String::new(),
        permission_permanently_denied: false,
    }
}

pub fn permanently_denied_state() -> PermissionUiState {
    PermissionUiState {
        is_rationale_visible: false,
        permission_text: TEXT_PERMANENTLY_DENIED.to_string(),
        permission_permanently_denied: true,
    }
}
