//! Operating-system side of the permission flow.
//!
//! The view-model never talks to the OS directly; the shell performs its
//! events against a [`PermissionPlatform`] and feeds the outcome back.

mod simulated;

pub use simulated::{PermissionStatus, SimulatedPlatform, DEFAULT_DENIALS_BEFORE_PERMANENT};

use crate::permission::Permission;

/// Capability for requesting a runtime permission.
///
/// Mirrors how mobile platforms expose permissions: a request is launched
/// and its result arrives later through a callback, and the rationale
/// query is a separate synchronous call made once the result is known.
pub trait PermissionPlatform {
    /// Launch the system permission prompt (or its silent equivalent).
    ///
    /// The outcome is picked up with [`poll_result`](Self::poll_result).
    fn launch_request(&mut self, permission: &Permission);

    /// Take the outcome of the last launched request, if it has resolved.
    ///
    /// Each outcome is returned once.
    fn poll_result(&mut self) -> Option<bool>;

    /// Whether the platform wants the app to explain the permission
    /// before asking again.
    fn should_show_rationale(&self, permission: &Permission) -> bool;

    /// Navigate to the app's page in the system settings.
    fn open_app_settings(&mut self, permission: &Permission);
}
