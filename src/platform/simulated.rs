//! In-process stand-in for the OS permission service.

use crate::permission::Permission;

use super::PermissionPlatform;

/// Denials after which the prompt is no longer shown.
pub const DEFAULT_DENIALS_BEFORE_PERMANENT: u32 = 2;

/// What the simulated OS has recorded for the permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Never answered, or reset from settings.
    NotDetermined,
    Granted,
    /// Denied `count` times, prompt still available.
    Denied { count: u32 },
    /// The prompt is suppressed; only settings can grant it.
    PermanentlyDenied,
}

/// Simulated OS following the usual mobile rules.
///
/// - A request for a granted permission resolves `true` without a prompt.
/// - A request for a permanently denied permission resolves `false`
///   without a prompt.
/// - Otherwise a system prompt is pending until [`answer`](Self::answer).
/// - After `denials_before_permanent` denials the permission is
///   permanently denied.
/// - A rationale is wanted only after a denial that was not permanent.
#[derive(Debug)]
pub struct SimulatedPlatform {
    status: PermissionStatus,
    denials_before_permanent: u32,
    prompt_pending: bool,
    settings_open: bool,
    resolved: Option<bool>,
    requests_launched: u32,
    settings_opened: u32,
}

impl SimulatedPlatform {
    pub fn new(denials_before_permanent: u32) -> Self {
        Self {
            status: PermissionStatus::NotDetermined,
            denials_before_permanent: denials_before_permanent.max(1),
            prompt_pending: false,
            settings_open: false,
            resolved: None,
            requests_launched: 0,
            settings_opened: 0,
        }
    }

    pub fn status(&self) -> PermissionStatus {
        self.status
    }

    /// The system prompt is on screen waiting for [`answer`](Self::answer).
    pub fn is_prompting(&self) -> bool {
        self.prompt_pending
    }

    /// The settings screen is on top of the app.
    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn requests_launched(&self) -> u32 {
        self.requests_launched
    }

    pub fn settings_opened(&self) -> u32 {
        self.settings_opened
    }

    /// Resolve the pending system prompt. Ignored when none is pending.
    pub fn answer(&mut self, allow: bool) {
        if !self.prompt_pending {
            tracing::debug!(allow, "answer without pending prompt ignored");
            return;
        }
        self.prompt_pending = false;

        self.status = if allow {
            PermissionStatus::Granted
        } else {
            let count = match self.status {
                PermissionStatus::Denied { count } => count + 1,
                _ => 1,
            };
            if count >= self.denials_before_permanent {
                PermissionStatus::PermanentlyDenied
            } else {
                PermissionStatus::Denied { count }
            }
        };
        tracing::debug!(allow, status = ?self.status, "system prompt answered");
        self.resolved = Some(allow);
    }

    /// Toggle the permission on from the settings screen.
    pub fn grant_from_settings(&mut self) {
        if self.settings_open {
            self.status = PermissionStatus::Granted;
        }
    }

    /// Reset the permission from the settings screen, as if never asked.
    pub fn revoke_from_settings(&mut self) {
        if self.settings_open {
            self.status = PermissionStatus::NotDetermined;
        }
    }

    /// Leave the settings screen and return to the app.
    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }
}

impl Default for SimulatedPlatform {
    fn default() -> Self {
        Self::new(DEFAULT_DENIALS_BEFORE_PERMANENT)
    }
}

impl PermissionPlatform for SimulatedPlatform {
    fn launch_request(&mut self, permission: &Permission) {
        self.requests_launched += 1;
        match self.status {
            PermissionStatus::Granted => self.resolved = Some(true),
            PermissionStatus::PermanentlyDenied => self.resolved = Some(false),
            PermissionStatus::NotDetermined | PermissionStatus::Denied { .. } => {
                self.prompt_pending = true;
            }
        }
        tracing::debug!(
            %permission,
            status = ?self.status,
            prompt = self.prompt_pending,
            "request launched"
        );
    }

    fn poll_result(&mut self) -> Option<bool> {
        self.resolved.take()
    }

    fn should_show_rationale(&self, _permission: &Permission) -> bool {
        matches!(self.status, PermissionStatus::Denied { .. })
    }

    fn open_app_settings(&mut self, permission: &Permission) {
        tracing::debug!(%permission, "app settings opened");
        self.settings_open = true;
        self.settings_opened += 1;
    }
}
