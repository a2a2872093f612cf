//! Glue between the permission view-model and a platform.
//!
//! The shell subscribes to the view-model's events once, performs them
//! against the platform, and hands every resolved request back to the
//! view-model together with the platform's rationale answer.

use clap::ValueEnum;

use crate::permission::{PermissionUiState, PermissionViewModel, UiEvent, UserEvent};
use crate::platform::{PermissionPlatform, SimulatedPlatform};
use crate::ui::mvi::EventStream;

pub struct PermissionShell<P> {
    view_model: PermissionViewModel,
    events: EventStream<UiEvent>,
    platform: P,
}

impl<P: PermissionPlatform> PermissionShell<P> {
    pub fn new(view_model: PermissionViewModel, platform: P) -> Self {
        let events = view_model.subscribe_events();
        Self {
            view_model,
            events,
            platform,
        }
    }

    pub fn view_model(&self) -> &PermissionViewModel {
        &self.view_model
    }

    pub fn state(&self) -> PermissionUiState {
        self.view_model.state()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// The screen became visible: ask for the permission.
    ///
    /// Called at startup and whenever the app comes back to the
    /// foreground, e.g. after the settings screen is closed.
    pub fn on_started(&mut self) {
        tracing::debug!(permission = %self.view_model.permission(), "screen started");
        self.platform.launch_request(self.view_model.permission());
        self.deliver_result();
    }

    /// Perform every pending event and deliver any resolved request.
    ///
    /// Returns the number of events performed.
    pub fn pump(&mut self) -> usize {
        let mut performed = 0;
        self.deliver_result();
        while let Some(event) = self.events.try_recv() {
            self.perform(event);
            performed += 1;
            self.deliver_result();
        }
        performed
    }

    fn perform(&mut self, event: UiEvent) {
        tracing::debug!(?event, "performing ui event");
        let permission = self.view_model.permission();
        match event {
            UiEvent::OpenAppSettings => self.platform.open_app_settings(permission),
            UiEvent::RequestCameraPermission => self.platform.launch_request(permission),
        }
    }

    fn deliver_result(&mut self) -> bool {
        let Some(is_granted) = self.platform.poll_result() else {
            return false;
        };
        let should_show_rationale = self
            .platform
            .should_show_rationale(self.view_model.permission());
        self.view_model
            .handle_permission_result(is_granted, should_show_rationale);
        true
    }
}

/// Something a person can do on the simulated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Allow in the system prompt.
    Allow,
    /// Deny in the system prompt.
    Deny,
    /// Press OK in the rationale dialog.
    RationaleOk,
    /// Press the "Open Settings" button.
    OpenSettings,
    /// Turn the permission on in the settings screen.
    Grant,
    /// Reset the permission in the settings screen.
    Revoke,
    /// Leave the settings screen.
    Back,
}

impl PermissionShell<SimulatedPlatform> {
    /// Apply `action` if it is possible on the current screen, then pump.
    ///
    /// Returns `false` when the action was not available, e.g. pressing a
    /// button that is not rendered.
    pub fn apply(&mut self, action: Action) -> bool {
        let state = self.view_model.state();
        let prompting = self.platform.is_prompting();
        let in_settings = self.platform.is_settings_open();

        let available = match action {
            Action::Allow | Action::Deny => prompting,
            Action::RationaleOk => !prompting && !in_settings && state.is_rationale_visible,
            Action::OpenSettings => {
                !prompting && !in_settings && state.permission_permanently_denied
            }
            Action::Grant | Action::Revoke | Action::Back => in_settings,
        };
        if !available {
            tracing::debug!(?action, "action not available on current screen");
            return false;
        }

        match action {
            Action::Allow => self.platform.answer(true),
            Action::Deny => self.platform.answer(false),
            Action::RationaleOk => self
                .view_model
                .handle_user_event(UserEvent::RationaleButtonClicked),
            Action::OpenSettings => self
                .view_model
                .handle_user_event(UserEvent::OpenSettingsClicked),
            Action::Grant => self.platform.grant_from_settings(),
            Action::Revoke => self.platform.revoke_from_settings(),
            Action::Back => {
                self.platform.close_settings();
                self.on_started();
            }
        }
        self.pump();
        true
    }
}
