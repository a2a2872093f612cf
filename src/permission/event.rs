use crate::ui::mvi::Effect;

/// Commands the shell must carry out. Delivered once, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Navigate to the application's page in the system settings.
    OpenAppSettings,
    /// Launch the system permission prompt again.
    RequestCameraPermission,
}

impl Effect for UiEvent {}
