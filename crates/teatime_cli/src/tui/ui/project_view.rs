//! # Project View UI
//!
//! Missing-summary reminders and the project menu beside today's note.

use crate::tui::app::{App, MENU_ITEMS};
use crate::tui::markdown::render_markdown;
use crate::tui::ui::{selection_style, titled_block};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph, Wrap};
use teatime_core::NoteStore;

pub fn render_project_view<S: NoteStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(area);

    let today = if app.today_note.is_empty() {
        Paragraph::new("(nothing written today; press 'e' to start)")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(render_markdown(&app.today_note))
    };
    let title = format!("Today {}", app.today.format("%Y-%m-%d"));
    frame.render_widget(
        today.block(titled_block(&title)).wrap(Wrap { trim: false }),
        chunks[1],
    );

    let mut items: Vec<ListItem> = Vec::with_capacity(app.project_view_len());
    for (i, reminder) in app.reminders.iter().enumerate() {
        let selected = i == app.menu_cursor;
        let prefix = if selected { "> " } else { "  " };
        let style = if selected {
            selection_style(true)
        } else {
            Style::default().fg(Color::LightRed)
        };
        items.push(ListItem::new(format!("{prefix}! {}", reminder.label)).style(style));
    }
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let selected = app.reminders.len() + i == app.menu_cursor;
        let prefix = if selected { "> " } else { "  " };
        items.push(
            ListItem::new(format!("{prefix}[{}] {}", item.key, item.label))
                .style(selection_style(selected)),
        );
    }

    let title = match app.reminders.len() {
        0 => "Menu".to_string(),
        n => format!("Missing summaries ({n}) · Menu"),
    };
    frame.render_widget(List::new(items).block(titled_block(&title)), chunks[0]);
}
