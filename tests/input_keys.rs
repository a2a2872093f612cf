mod common;

use common::{permanently_denied_state, rationale_state, shell, started_app};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use permflow::platform::PermissionStatus;
use permflow::shell::Action;
use permflow::ui::app::{App, Screen};
use permflow::ui::input::{action_for_key, handle_key};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn system_prompt_keys() {
    let app = started_app();
    assert_eq!(app.screen(), Screen::SystemPrompt);
    assert_eq!(action_for_key(&app, key(KeyCode::Char('a'))), Some(Action::Allow));
    assert_eq!(action_for_key(&app, key(KeyCode::Char('d'))), Some(Action::Deny));
    assert_eq!(action_for_key(&app, key(KeyCode::Enter)), None);
}

#[test]
fn deny_then_escape_dismisses_rationale() {
    let mut app = started_app();
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.state(), rationale_state());
    assert_eq!(app.screen(), Screen::Permission);

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.state().is_rationale_visible);
    assert_eq!(app.screen(), Screen::SystemPrompt);
}

#[test]
fn enter_opens_settings_when_permanently_denied() {
    let mut app = started_app();
    handle_key(&mut app, key(KeyCode::Char('d')));
    handle_key(&mut app, key(KeyCode::Enter));
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.state(), permanently_denied_state());

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.screen(), Screen::Settings);

    handle_key(&mut app, key(KeyCode::Char('g')));
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.screen(), Screen::Permission);
    assert_eq!(app.platform_status(), PermissionStatus::Granted);
    assert_eq!(app.state().permission_text, "Permission granted");
}

#[test]
fn enter_does_nothing_on_idle_screen() {
    let app = App::new(shell());
    assert_eq!(action_for_key(&app, key(KeyCode::Enter)), None);
}

#[test]
fn release_events_are_ignored() {
    let mut app = started_app();
    let release =
        KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    handle_key(&mut app, release);
    assert_eq!(app.screen(), Screen::SystemPrompt);
}

#[test]
fn quit_keys() {
    let mut app = started_app();
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(app.should_quit());

    let mut app = started_app();
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
