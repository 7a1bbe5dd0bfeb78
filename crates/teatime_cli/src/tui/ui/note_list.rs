//! # Note List UI

use crate::tui::app::App;
use crate::tui::markdown::render_markdown;
use crate::tui::ui::{selection_style, titled_block};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};
use teatime_core::NoteStore;

/// Render the note names of one category beside a preview of the selection
pub fn render_note_list<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let title = app.note_category.label();
    if app.notes.is_empty() {
        let hint = format!("No notes yet.\nPress 'n' for {}.", app.note_category.name_format());
        let paragraph = Paragraph::new(hint)
            .block(titled_block(title))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                let selected = i == app.note_cursor;
                let prefix = if selected { "> " } else { "  " };
                ListItem::new(format!("{prefix}{}", note.name)).style(selection_style(selected))
            })
            .collect();
        frame.render_widget(List::new(items).block(titled_block(title)), chunks[0]);
    }

    let preview = Paragraph::new(render_markdown(&app.preview))
        .block(titled_block("Preview"))
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, chunks[1]);
}
