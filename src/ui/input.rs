use crate::shell::Action;
use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    if let Some(action) = action_for_key(app, key) {
        app.dispatch(action);
    }
}

/// Map a key to the action it triggers on the current screen.
pub fn action_for_key(app: &App, key: KeyEvent) -> Option<Action> {
    match app.screen() {
        Screen::SystemPrompt => match key.code {
            KeyCode::Char('a') | KeyCode::Char('y') => Some(Action::Allow),
            KeyCode::Char('d') | KeyCode::Char('n') => Some(Action::Deny),
            _ => None,
        },
        Screen::Settings => match key.code {
            KeyCode::Char('g') => Some(Action::Grant),
            KeyCode::Char('r') => Some(Action::Revoke),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        },
        Screen::Permission => {
            let state = app.state();
            match key.code {
                // Dismissing the rationale dialog counts as acknowledging it.
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o')
                    if state.is_rationale_visible =>
                {
                    Some(Action::RationaleOk)
                }
                KeyCode::Enter | KeyCode::Char('o') if state.permission_permanently_denied => {
                    Some(Action::OpenSettings)
                }
                _ => None,
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
