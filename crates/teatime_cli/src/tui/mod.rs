//! # TUI Module
//!
//! Terminal front-end: project list, project view with reminders, note
//! lists and the split-pane editor.

pub mod app;
pub mod editor;
pub mod event;
pub mod markdown;
pub mod ui;

pub use app::{App, Screen};
pub use event::{Event, EventHandler};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use event::map_key_event;
use log::{info, warn};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use teatime_core::NoteStore;

/// Poll interval; ticks notice midnight while the app sits idle
const TICK_RATE: Duration = Duration::from_millis(1000);

/// Runs the TUI until the user quits, restoring the terminal afterwards.
pub fn run<S: NoteStore>(store: S) -> Result<()> {
    let mut terminal = setup_terminal()?;
    install_restore_hook();

    let mut app = App::new(store, Local::now().date_naive());
    let events = EventHandler::new(TICK_RATE);
    info!("event=tui_start module=tui status=ok");

    let result = run_app(&mut terminal, &mut app, &events);

    restore_terminal()?;
    terminal.show_cursor()?;

    info!("event=tui_stop module=tui status=ok");
    result
}

/// Enters raw mode and the alternate screen; undoes both if any step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let entered = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())));
    restore_on_error(entered, restore_terminal)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn restore_on_error<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        if let Err(err) = restore() {
            warn!("event=terminal_restore module=tui status=error error=\"{err}\"");
        }
    }
    result
}

/// Leaves raw mode before a panic message is printed.
fn install_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

fn run_app<S: NoteStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => {
                let action = map_key_event(key, app.input_mode());
                app.handle_action(action, Local::now().date_naive());
            }
            Event::Tick => app.on_tick(Local::now().date_naive()),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::restore_on_error;
    use std::cell::Cell;
    use std::io;

    #[test]
    fn failed_setup_step_restores_terminal() {
        let restored = Cell::new(false);
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "no tty"));

        let result = restore_on_error(failed, || {
            restored.set(true);
            Ok(())
        });

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = restore_on_error(Ok(7), || {
            restored.set(true);
            Ok(())
        });

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn restore_failure_keeps_original_error() {
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        let result = restore_on_error(failed, || Err(io::Error::new(io::ErrorKind::Other, "stuck")));
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }
}
