//! # TUI UI Components
//!
//! Ratatui-based rendering for each screen.

mod editor;
mod note_list;
mod project_view;
mod projects;

pub use editor::render_editor;
pub use note_list::render_note_list;
pub use project_view::render_project_view;
pub use projects::render_projects;

use crate::tui::{App, Screen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use teatime_core::NoteStore;

/// Main render function - dispatches to screen-specific renderers
pub fn render<S: NoteStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);

    match app.screen {
        Screen::ProjectList => render_projects(frame, app, chunks[1]),
        Screen::ProjectView => render_project_view(frame, app, chunks[1]),
        Screen::NoteList => render_note_list(frame, app, chunks[1]),
        Screen::Edit => render_editor(frame, app, chunks[1]),
    }

    render_status(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let location = match app.screen {
        Screen::ProjectList => "Projects".to_string(),
        Screen::ProjectView => app.current_project.clone(),
        Screen::NoteList => format!("{} / {}", app.current_project, app.note_category.label()),
        Screen::Edit => match &app.edit {
            Some(session) => format!("{} / {}", app.current_project, session.name),
            None => app.current_project.clone(),
        },
    };
    let line = Line::from(vec![
        Span::styled(" teatime ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(location, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}", app.today.format("%Y-%m-%d")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let line = match &app.status {
        Some(status) if status.is_error => Line::from(Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(Color::Red),
        )),
        Some(status) => Line::from(Span::styled(
            format!(" {} ", status.text),
            Style::default().fg(Color::Green),
        )),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let hint = match app.screen {
        Screen::ProjectList if app.prompt.is_some() => "Enter:Create  Esc:Cancel",
        Screen::ProjectList => "↑↓/jk:Move  Enter:Open  n:New project  q:Quit",
        Screen::ProjectView => "↑↓/jk:Move  Enter:Open  e:Today  d/w/m/Q/y:Lists  Esc:Back  q:Quit",
        Screen::NoteList => "↑↓/jk:Move  Enter/e:Edit  n:New  Esc:Back  q:Quit",
        Screen::Edit => match app.edit.as_ref().and_then(|s| s.reference.as_ref()) {
            Some(_) => "Esc:Save  Ctrl+C:Discard  Tab:Switch pane  PgUp/PgDn:Scroll",
            None => "Esc:Save  Ctrl+C:Discard",
        },
    };
    let paragraph = Paragraph::new(format!(" {hint}"))
        .style(Style::default().fg(Color::Gray).bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Bordered block with a padded title
pub fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
}

/// Style for the row under the cursor
pub fn selection_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
