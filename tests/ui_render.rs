mod common;

use common::started_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use permflow::ui::app::App;
use permflow::ui::input::handle_key;
use permflow::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
}

#[test]
fn system_prompt_is_drawn_after_start() {
    let app = started_app();
    let screen = render(&app);
    assert!(screen.contains("Allow permflow to use the camera?"));
    assert!(screen.contains("os: not determined"));
    assert!(screen.contains("a: Allow"));
}

#[test]
fn granted_text_is_drawn() {
    let mut app = started_app();
    press(&mut app, 'a');
    let screen = render(&app);
    assert!(screen.contains("Permission granted"));
    assert!(screen.contains("os: granted"));
    assert!(!screen.contains("Open Settings"));
}

#[test]
fn rationale_dialog_is_drawn() {
    let mut app = started_app();
    press(&mut app, 'd');
    let screen = render(&app);
    assert!(screen.contains("This is a rationale"));
    assert!(screen.contains("[ OK ]"));
}

#[test]
fn open_settings_button_when_permanently_denied() {
    let mut app = started_app();
    press(&mut app, 'd');
    handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    press(&mut app, 'd');
    let screen = render(&app);
    assert!(screen.contains("Permission permanently denied"));
    assert!(screen.contains("[ Open Settings ]"));
    assert!(screen.contains("os: permanently denied"));
}
