use crate::permission::PermissionUiState;
use crate::platform::{PermissionStatus, SimulatedPlatform};
use crate::shell::{Action, PermissionShell};

/// What currently has the user's attention.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    /// The app's permission screen.
    Permission,
    /// The simulated system permission prompt.
    SystemPrompt,
    /// The simulated app settings page.
    Settings,
}

pub struct App {
    should_quit: bool,
    shell: PermissionShell<SimulatedPlatform>,
    last_rejected: Option<Action>,
}

impl App {
    pub fn new(shell: PermissionShell<SimulatedPlatform>) -> Self {
        Self {
            should_quit: false,
            shell,
            last_rejected: None,
        }
    }

    /// First frame: the screen is started, which requests the permission.
    pub fn start(&mut self) {
        self.shell.on_started();
        self.shell.pump();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        let platform = self.shell.platform();
        if platform.is_prompting() {
            Screen::SystemPrompt
        } else if platform.is_settings_open() {
            Screen::Settings
        } else {
            Screen::Permission
        }
    }

    pub fn state(&self) -> PermissionUiState {
        self.shell.state()
    }

    pub fn permission_name(&self) -> &str {
        self.shell.view_model().permission().name()
    }

    pub fn platform_status(&self) -> PermissionStatus {
        self.shell.platform().status()
    }

    pub fn dispatch(&mut self, action: Action) {
        if self.shell.apply(action) {
            self.last_rejected = None;
        } else {
            self.last_rejected = Some(action);
        }
    }

    /// The most recent key that mapped to an action with no effect.
    pub fn last_rejected(&self) -> Option<Action> {
        self.last_rejected
    }
}
