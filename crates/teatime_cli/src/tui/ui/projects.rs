//! # Project List UI

use crate::tui::app::App;
use crate::tui::ui::{selection_style, titled_block};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};
use teatime_core::NoteStore;

/// Render the project list and the new-project prompt
pub fn render_projects<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    if app.projects.is_empty() {
        let paragraph = Paragraph::new("No projects yet. Press 'n' to create one.")
            .block(titled_block("Projects"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let selected = i == app.project_cursor;
                let prefix = if selected { "> " } else { "  " };
                ListItem::new(format!("{prefix}{project}")).style(selection_style(selected))
            })
            .collect();
        frame.render_widget(List::new(items).block(titled_block("Projects")), chunks[0]);
    }

    if let Some(prompt) = &app.prompt {
        let input = Paragraph::new(prompt.as_str())
            .block(titled_block("New project name"))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(input, chunks[1]);
        let width = prompt.chars().count() as u16;
        frame.set_cursor_position((chunks[1].x + 1 + width, chunks[1].y + 1));
    }
}
