//! # Editor UI
//!
//! Full-width editor for daily notes; summaries get the reference bundle in a
//! scrollable right-hand pane.

use crate::tui::app::{App, EditFocus, EditSession};
use crate::tui::markdown::render_markdown;
use crate::tui::ui::titled_block;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use teatime_core::NoteStore;

pub fn render_editor<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let Some(session) = &app.edit else {
        return;
    };

    let Some(reference) = &session.reference else {
        render_buffer(frame, session, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    render_buffer(frame, session, chunks[0]);

    let focused = session.focus == EditFocus::Reference;
    let title = session.category.reference_label();
    let paragraph = Paragraph::new(render_markdown(reference))
        .block(titled_block(title).border_style(border_style(focused)))
        .wrap(Wrap { trim: false })
        .scroll((session.reference_scroll, 0));
    frame.render_widget(paragraph, chunks[1]);
}

fn render_buffer(frame: &mut Frame, session: &EditSession, area: Rect) {
    let focused = session.focus == EditFocus::Editor;
    let marker = if session.dirty { " (unsaved)" } else { "" };
    let title = format!("{} {}{marker}", session.category.adjective(), session.name);

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2) as usize;
    let (row, col) = session.buffer.cursor();
    // Keep the cursor row visible; lines are not wrapped.
    let top = (row + 1).saturating_sub(inner_height);
    let left = (col + 1).saturating_sub(inner_width);

    let text: Vec<Line> = session
        .buffer
        .lines()
        .iter()
        .map(|line| Line::raw(line.as_str()))
        .collect();
    let paragraph = Paragraph::new(text)
        .block(titled_block(&title).border_style(border_style(focused)))
        .scroll((top as u16, left as u16));
    frame.render_widget(paragraph, area);

    // A pane too small to show any text gets no cursor.
    if focused && inner_height > 0 && inner_width > 0 {
        let x = area.x + 1 + col.saturating_sub(left) as u16;
        let y = area.y + 1 + row.saturating_sub(top) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
