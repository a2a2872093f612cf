use crate::ui::mvi::{EventStream, StateStream, Store};

use super::event::UiEvent;
use super::identity::Permission;
use super::intent::{PermissionIntent, UserEvent};
use super::reducer::PermissionReducer;
use super::state::PermissionUiState;

/// Single source of truth for one permission's screen.
///
/// The shell renders [`state`](Self::state), performs every [`UiEvent`]
/// it receives from [`subscribe_events`](Self::subscribe_events), and
/// reports back through the two `handle_*` methods.
///
/// Events posted while nobody is subscribed are dropped, so the shell
/// should subscribe before it starts feeding results in.
pub struct PermissionViewModel {
    permission: Permission,
    store: Store<PermissionReducer>,
}

impl PermissionViewModel {
    pub fn new(permission: Permission, event_capacity: usize) -> Self {
        tracing::debug!(%permission, event_capacity, "permission view-model created");
        Self {
            permission,
            store: Store::new(event_capacity),
        }
    }

    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    pub fn handle_user_event(&self, event: UserEvent) {
        tracing::info!(permission = %self.permission, ?event, "user event");
        self.store.dispatch(PermissionIntent::User(event));
    }

    pub fn handle_permission_result(&self, is_granted: bool, should_show_rationale: bool) {
        tracing::info!(
            permission = %self.permission,
            is_granted,
            should_show_rationale,
            "permission result"
        );
        self.store.dispatch(PermissionIntent::PermissionResult {
            is_granted,
            should_show_rationale,
        });
    }

    pub fn state(&self) -> PermissionUiState {
        self.store.state()
    }

    pub fn subscribe_state(&self) -> StateStream<PermissionUiState> {
        self.store.subscribe_state()
    }

    pub fn subscribe_events(&self) -> EventStream<UiEvent> {
        self.store.subscribe_events()
    }

    /// Whether an event posted now would reach anyone.
    pub fn has_event_subscriber(&self) -> bool {
        self.store.event_subscriber_count() > 0
    }
}

impl Default for PermissionViewModel {
    fn default() -> Self {
        Self::new(Permission::camera(), crate::ui::mvi::DEFAULT_EVENT_CAPACITY)
    }
}
