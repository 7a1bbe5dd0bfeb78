//! # TUI Event Handling
//!
//! Keyboard input, resize and tick events, plus key-to-action mapping.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::mpsc;
use std::time::Duration;
use teatime_core::PeriodCategory;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Poll timeout; used to notice the date rolling over
    Tick,
}

/// Forwards terminal events from a polling thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    _ => continue,
                }
            } else {
                Event::Tick
            };
            if tx.send(event).is_err() {
                break;
            }
        });

        EventHandler { rx }
    }

    /// Blocks until the next event
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Which key map applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation
    Normal,
    /// Single-line prompt (new project name)
    Prompt,
    /// Multi-line note editor
    Editing,
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Up,
    Down,
    Select,
    Back,
    /// Create a project or a note, depending on screen
    New,
    /// Edit today's entry or the selected note
    Edit,
    OpenCategory(PeriodCategory),
    SubmitInput,
    CancelInput,
    Char(char),
    Backspace,
    Delete,
    Newline,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Save and leave the editor
    Save,
    /// Leave the editor without saving
    Discard,
    /// Switch focus between editor and reference pane
    ToggleFocus,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent, mode: InputMode) -> KeyAction {
    match mode {
        InputMode::Normal => map_normal(key),
        InputMode::Prompt => match key.code {
            KeyCode::Esc => KeyAction::CancelInput,
            KeyCode::Enter => KeyAction::SubmitInput,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::CancelInput
            }
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        },
        InputMode::Editing => map_editing(key),
    }
}

fn map_normal(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Up,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Down,
        (KeyCode::Enter, _) => KeyAction::Select,
        (KeyCode::Esc, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => KeyAction::Back,

        (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::New,
        (KeyCode::Char('e'), KeyModifiers::NONE) => KeyAction::Edit,

        (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::OpenCategory(PeriodCategory::Daily),
        (KeyCode::Char('w'), KeyModifiers::NONE) => {
            KeyAction::OpenCategory(PeriodCategory::Weekly)
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            KeyAction::OpenCategory(PeriodCategory::Monthly)
        }
        // Capital Q; lower-case q quits.
        (KeyCode::Char('Q'), _) => KeyAction::OpenCategory(PeriodCategory::Quarterly),
        (KeyCode::Char('y'), KeyModifiers::NONE) => KeyAction::OpenCategory(PeriodCategory::Yearly),

        _ => KeyAction::None,
    }
}

fn map_editing(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Save,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Discard,
        KeyCode::Tab => KeyAction::ToggleFocus,
        KeyCode::Enter => KeyAction::Newline,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::Delete,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Up => KeyAction::Up,
        KeyCode::Down => KeyAction::Down,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Char(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::{map_key_event, InputMode, KeyAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use teatime_core::PeriodCategory;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn q_quits_but_shift_q_opens_quarterly() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), InputMode::Normal),
            KeyAction::Quit
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('Q'), KeyModifiers::SHIFT), InputMode::Normal),
            KeyAction::OpenCategory(PeriodCategory::Quarterly)
        );
    }

    #[test]
    fn editing_mode_types_letters_instead_of_navigating() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), InputMode::Editing),
            KeyAction::Char('q')
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('W'), KeyModifiers::SHIFT), InputMode::Editing),
            KeyAction::Char('W')
        );
        assert_eq!(
            map_key_event(key(KeyCode::Esc, KeyModifiers::NONE), InputMode::Editing),
            KeyAction::Save
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), InputMode::Editing),
            KeyAction::Discard
        );
    }

    #[test]
    fn prompt_mode_submits_and_cancels() {
        assert_eq!(
            map_key_event(key(KeyCode::Enter, KeyModifiers::NONE), InputMode::Prompt),
            KeyAction::SubmitInput
        );
        assert_eq!(
            map_key_event(key(KeyCode::Esc, KeyModifiers::NONE), InputMode::Prompt),
            KeyAction::CancelInput
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('n'), KeyModifiers::NONE), InputMode::Prompt),
            KeyAction::Char('n')
        );
    }
}
