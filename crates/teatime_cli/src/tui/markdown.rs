//! # Markdown Rendering
//!
//! Converts note markdown into styled ratatui `Text` for the read-only panes
//! (today's note, list preview, reference bundle). Wrapping is left to the
//! `Paragraph` that displays the result.
//!
//! Single line breaks inside a paragraph are kept: journal entries are typed
//! line by line and reference headers sit directly above their content.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::prelude::*;

const RULE: &str = "────────────────────";

/// Renders `content` as styled text; returns the raw text when nothing renders.
pub fn render_markdown(content: &str) -> Text<'static> {
    if content.is_empty() {
        return Text::default();
    }
    let lines = MarkdownWriter::default().run(content);
    if lines.is_empty() {
        return Text::raw(content.to_string());
    }
    Text::from(lines)
}

#[derive(Default)]
struct MarkdownWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// Next number per open list; `None` for bullet lists
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    link_target: Option<String>,
}

impl MarkdownWriter {
    fn run(mut self, content: &str) -> Vec<Line<'static>> {
        let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        for event in Parser::new_ext(content, options) {
            self.handle(event);
        }
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                let style = self.style().fg(Color::Cyan);
                self.current.push(Span::styled(code.to_string(), style));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.separate();
                self.lines.push(Line::styled(RULE, Style::default().fg(Color::DarkGray)));
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                self.current.push(Span::raw(marker));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.current.is_empty() {
                    self.separate();
                }
            }
            Tag::Heading { level, .. } => {
                self.separate();
                let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
                self.current
                    .push(Span::styled(format!("{} ", "#".repeat(level as usize)), style));
                self.styles.push(style);
            }
            Tag::BlockQuote { .. } => {
                self.separate();
                self.quote_depth += 1;
            }
            Tag::CodeBlock { .. } => {
                self.separate();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.separate();
                } else {
                    self.flush_line();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = format!("{next}. ");
                        *next += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.current.push(Span::raw("  ".repeat(depth)));
                self.current
                    .push(Span::styled(marker, Style::default().fg(Color::Yellow)));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_target = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush_line(),
            TagEnd::Heading { .. } => {
                self.styles.pop();
                self.flush_line();
            }
            TagEnd::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
            }
            TagEnd::List { .. } => {
                self.flush_line();
                self.lists.pop();
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.styles.pop();
            }
            TagEnd::Link => {
                self.styles.pop();
                if let Some(target) = self.link_target.take() {
                    self.current.push(Span::styled(
                        format!(" ({target})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if !self.in_code_block {
            let style = self.style();
            self.current.push(Span::styled(text.to_string(), style));
            return;
        }
        let style = Style::default().fg(Color::Cyan);
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.flush_line();
            }
            if !part.is_empty() {
                self.current.push(Span::styled(format!("  {part}"), style));
            }
        }
    }

    fn push_style(&mut self, style: Style) {
        let patched = self.style().patch(style);
        self.styles.push(patched);
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    /// Ends the pending line, prefixed with quote bars when inside a quote.
    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    /// Blank line between top-level blocks; list items stay tight.
    fn separate(&mut self) {
        self.flush_line();
        if !self.lists.is_empty() {
            return;
        }
        if self.lines.last().is_some_and(|line| !line.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render_markdown;
    use ratatui::style::Modifier;
    use ratatui::text::Text;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn empty_content_renders_nothing() {
        assert!(render_markdown("").lines.is_empty());
    }

    #[test]
    fn headings_are_bold_and_blocks_are_separated() {
        let text = render_markdown("# Monday\n\nwent for a walk");
        assert_eq!(plain(&text), vec!["# Monday", "", "went for a walk"]);
        let heading = &text.lines[0].spans[0];
        assert!(heading.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn line_breaks_inside_paragraph_are_kept() {
        let text = render_markdown("── 2025-01-13 (Monday) ──\nshipped the release");
        assert_eq!(
            plain(&text),
            vec!["── 2025-01-13 (Monday) ──", "shipped the release"]
        );
    }

    #[test]
    fn lists_get_markers_and_nesting() {
        let text = render_markdown("- tea\n- cake\n  1. lemon\n  2. carrot\n");
        assert_eq!(
            plain(&text),
            vec!["• tea", "• cake", "  1. lemon", "  2. carrot"]
        );
    }

    #[test]
    fn inline_styles_and_code_blocks() {
        let text = render_markdown("a *quiet* **day**\n\n```\nlet x = 1;\n```");
        let lines = plain(&text);
        assert_eq!(lines[0], "a quiet day");
        assert_eq!(lines[2], "  let x = 1;");

        let spans = &text.lines[0].spans;
        assert!(spans[1].style.add_modifier.contains(Modifier::ITALIC));
        assert!(spans[3].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn quotes_tasks_and_links() {
        let text = render_markdown("> calm\n\n- [x] done\n\n[site](https://example.com)");
        assert_eq!(
            plain(&text),
            vec![
                "│ calm",
                "",
                "• [x] done",
                "",
                "site (https://example.com)"
            ]
        );
    }
}
