use crate::ui::app::App;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the interactive shell until the user quits.
pub fn run(app: &mut App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    app.start();
    tracing::info!(permission = app.permission_name(), "interactive shell started");

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        if !event::poll(TICK_RATE)? {
            continue;
        }
        // Resizes need no handling; the next draw picks up the new size.
        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }
    }

    drop(guard);
    tracing::info!("interactive shell stopped");
    Ok(())
}
