//! # TUI Application Core
//!
//! Screen state and navigation. All journal logic is delegated to
//! `teatime_core`; "today" arrives with every action so one key press sees a
//! single consistent date.

use crate::tui::editor::TextBuffer;
use crate::tui::event::{InputMode, KeyAction};
use chrono::NaiveDate;
use log::{info, warn};
use teatime_core::{
    default_name, NoteFile, NoteStore, PeriodCategory, ReferenceService, Reminder,
    ReminderService,
};

/// Lines scrolled by PageUp/PageDown in the reference pane
const PAGE_SCROLL: u16 = 10;

/// Available screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ProjectList,
    ProjectView,
    NoteList,
    Edit,
}

/// What a project menu entry opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    EditToday,
    List(PeriodCategory),
}

/// One entry of the project menu
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub key: char,
    pub label: &'static str,
    pub target: MenuTarget,
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        key: 'e',
        label: "Edit today",
        target: MenuTarget::EditToday,
    },
    MenuItem {
        key: 'd',
        label: "Daily notes",
        target: MenuTarget::List(PeriodCategory::Daily),
    },
    MenuItem {
        key: 'w',
        label: "Weekly notes",
        target: MenuTarget::List(PeriodCategory::Weekly),
    },
    MenuItem {
        key: 'm',
        label: "Monthly notes",
        target: MenuTarget::List(PeriodCategory::Monthly),
    },
    MenuItem {
        key: 'Q',
        label: "Quarterly notes",
        target: MenuTarget::List(PeriodCategory::Quarterly),
    },
    MenuItem {
        key: 'y',
        label: "Yearly notes",
        target: MenuTarget::List(PeriodCategory::Yearly),
    },
];

/// Pane receiving keys in a split editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditFocus {
    Editor,
    Reference,
}

/// Note being edited
#[derive(Debug, Clone)]
pub struct EditSession {
    pub category: PeriodCategory,
    pub name: String,
    pub buffer: TextBuffer,
    pub dirty: bool,
    /// Reference bundle; `None` for daily notes
    pub reference: Option<String>,
    pub reference_scroll: u16,
    pub focus: EditFocus,
}

/// Transient message for the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App<S: NoteStore> {
    store: S,
    pub screen: Screen,
    pub should_quit: bool,
    /// Date captured for the action being handled
    pub today: NaiveDate,
    pub projects: Vec<String>,
    pub project_cursor: usize,
    /// New project name while the prompt is open
    pub prompt: Option<String>,
    pub current_project: String,
    /// Cursor over reminders followed by menu items
    pub menu_cursor: usize,
    pub today_note: String,
    pub reminders: Vec<Reminder>,
    pub note_category: PeriodCategory,
    pub notes: Vec<NoteFile>,
    pub note_cursor: usize,
    pub preview: String,
    pub edit: Option<EditSession>,
    pub status: Option<StatusMessage>,
}

impl<S: NoteStore> App<S> {
    pub fn new(store: S, today: NaiveDate) -> Self {
        let mut app = Self {
            store,
            screen: Screen::ProjectList,
            should_quit: false,
            today,
            projects: Vec::new(),
            project_cursor: 0,
            prompt: None,
            current_project: String::new(),
            menu_cursor: 0,
            today_note: String::new(),
            reminders: Vec::new(),
            note_category: PeriodCategory::Daily,
            notes: Vec::new(),
            note_cursor: 0,
            preview: String::new(),
            edit: None,
            status: None,
        };
        app.load_projects();
        app
    }

    pub fn input_mode(&self) -> InputMode {
        match self.screen {
            Screen::Edit => InputMode::Editing,
            Screen::ProjectList if self.prompt.is_some() => InputMode::Prompt,
            _ => InputMode::Normal,
        }
    }

    /// Total navigable rows in the project view
    pub fn project_view_len(&self) -> usize {
        self.reminders.len() + MENU_ITEMS.len()
    }

    /// Handle one key action as of `today`
    pub fn handle_action(&mut self, action: KeyAction, today: NaiveDate) {
        self.today = today;
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::ProjectList => self.on_project_list(action),
            Screen::ProjectView => self.on_project_view(action),
            Screen::NoteList => self.on_note_list(action),
            Screen::Edit => self.on_edit(action),
        }
    }

    /// Periodic tick; reloads the project view when the date rolls over
    pub fn on_tick(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        self.today = today;
        if self.screen == Screen::ProjectView {
            self.reload_project_view();
        }
    }

    // --- Project list ---

    fn on_project_list(&mut self, action: KeyAction) {
        if let Some(prompt) = self.prompt.as_mut() {
            match action {
                KeyAction::Char(c) => prompt.push(c),
                KeyAction::Backspace => {
                    prompt.pop();
                }
                KeyAction::CancelInput => self.prompt = None,
                KeyAction::SubmitInput => {
                    let name = prompt.clone();
                    if !name.trim().is_empty() {
                        self.prompt = None;
                        self.create_project(&name);
                    }
                }
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Up => self.project_cursor = self.project_cursor.saturating_sub(1),
            KeyAction::Down => {
                if self.project_cursor + 1 < self.projects.len() {
                    self.project_cursor += 1;
                }
            }
            KeyAction::Select => {
                if let Some(project) = self.projects.get(self.project_cursor).cloned() {
                    self.open_project(project);
                }
            }
            KeyAction::New => {
                self.prompt = Some(String::new());
                self.status = None;
            }
            _ => {}
        }
    }

    fn load_projects(&mut self) {
        match self.store.list_projects() {
            Ok(projects) => {
                self.projects = projects;
                if self.project_cursor >= self.projects.len() {
                    self.project_cursor = self.projects.len().saturating_sub(1);
                }
            }
            Err(err) => self.set_error(format!("Error: {err}")),
        }
    }

    fn create_project(&mut self, name: &str) {
        match self.store.create_project(name) {
            Ok(created) => {
                self.set_status("Project created ✓");
                self.load_projects();
                if let Some(index) = self.projects.iter().position(|p| *p == created) {
                    self.project_cursor = index;
                }
            }
            Err(err) => self.set_error(format!("Error creating project: {err}")),
        }
    }

    fn open_project(&mut self, project: String) {
        info!("event=project_open module=tui status=ok");
        self.current_project = project;
        self.screen = Screen::ProjectView;
        self.menu_cursor = 0;
        self.status = None;
        self.reminders.clear();
        self.reload_project_view();
    }

    // --- Project view ---

    fn on_project_view(&mut self, action: KeyAction) {
        match action {
            KeyAction::Back => {
                self.screen = Screen::ProjectList;
                self.status = None;
                self.load_projects();
            }
            KeyAction::Up => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            KeyAction::Down => {
                if self.menu_cursor + 1 < self.project_view_len() {
                    self.menu_cursor += 1;
                }
            }
            KeyAction::Select => self.select_menu_row(),
            KeyAction::Edit => self.edit_today(),
            KeyAction::OpenCategory(category) => self.enter_note_list(category),
            _ => {}
        }
    }

    fn select_menu_row(&mut self) {
        if let Some(reminder) = self.reminders.get(self.menu_cursor).cloned() {
            self.enter_edit(reminder.category, reminder.name);
            return;
        }
        let index = self.menu_cursor - self.reminders.len();
        match MENU_ITEMS.get(index).map(|item| item.target) {
            Some(MenuTarget::EditToday) => self.edit_today(),
            Some(MenuTarget::List(category)) => self.enter_note_list(category),
            None => {}
        }
    }

    fn edit_today(&mut self) {
        let name = default_name(PeriodCategory::Daily, self.today);
        self.enter_edit(PeriodCategory::Daily, name);
    }

    /// Reload today's note and recompute reminders
    fn reload_project_view(&mut self) {
        let today_name = default_name(PeriodCategory::Daily, self.today);
        match self
            .store
            .read_note(&self.current_project, PeriodCategory::Daily, &today_name)
        {
            Ok(content) => self.today_note = content,
            Err(err) => self.set_error(format!("Error loading note: {err}")),
        }

        // A failed scan leaves the menu usable and reports the error.
        let scan = ReminderService::new(&self.store)
            .compute_reminders(&self.current_project, self.today);
        match scan {
            Ok(reminders) => self.reminders = reminders,
            Err(err) => {
                warn!("event=reminder_scan module=tui status=error error=\"{err}\"");
                self.reminders.clear();
                self.set_error(format!("Error checking reminders: {err}"));
            }
        }
        let total = self.project_view_len();
        if self.menu_cursor >= total {
            self.menu_cursor = total.saturating_sub(1);
        }
    }

    // --- Note list ---

    fn enter_note_list(&mut self, category: PeriodCategory) {
        self.screen = Screen::NoteList;
        self.note_category = category;
        self.note_cursor = 0;
        self.preview.clear();
        self.status = None;
        match self.store.list_notes(&self.current_project, category) {
            Ok(notes) => {
                self.notes = notes;
                self.load_preview();
            }
            Err(err) => {
                self.notes.clear();
                self.set_error(format!("Error listing notes: {err}"));
            }
        }
    }

    fn on_note_list(&mut self, action: KeyAction) {
        match action {
            KeyAction::Back => {
                self.screen = Screen::ProjectView;
                self.status = None;
            }
            KeyAction::Up => {
                if self.note_cursor > 0 {
                    self.note_cursor -= 1;
                    self.load_preview();
                }
            }
            KeyAction::Down => {
                if self.note_cursor + 1 < self.notes.len() {
                    self.note_cursor += 1;
                    self.load_preview();
                }
            }
            KeyAction::Select | KeyAction::Edit => {
                if let Some(note) = self.notes.get(self.note_cursor).cloned() {
                    self.enter_edit(self.note_category, note.name);
                }
            }
            KeyAction::New => {
                let name = default_name(self.note_category, self.today);
                self.enter_edit(self.note_category, name);
            }
            _ => {}
        }
    }

    fn load_preview(&mut self) {
        let Some(note) = self.notes.get(self.note_cursor) else {
            self.preview.clear();
            return;
        };
        match self
            .store
            .read_note(&self.current_project, self.note_category, &note.name)
        {
            Ok(content) => self.preview = content,
            Err(err) => self.set_error(format!("Error loading note: {err}")),
        }
    }

    // --- Editor ---

    fn enter_edit(&mut self, category: PeriodCategory, name: String) {
        let content = match self.store.read_note(&self.current_project, category, &name) {
            Ok(content) => content,
            Err(err) => {
                self.set_error(format!("Error loading note: {err}"));
                return;
            }
        };

        let reference = category.is_summary().then(|| {
            ReferenceService::new(&self.store)
                .gather_reference(&self.current_project, category, &name)
                .unwrap_or_else(|err| format!("(error loading reference: {err})"))
        });

        self.edit = Some(EditSession {
            category,
            name,
            buffer: TextBuffer::from_text(&content),
            dirty: false,
            reference,
            reference_scroll: 0,
            focus: EditFocus::Editor,
        });
        self.screen = Screen::Edit;
        self.status = None;
    }

    fn on_edit(&mut self, action: KeyAction) {
        match action {
            KeyAction::Save => {
                self.save_edit();
                return;
            }
            KeyAction::Discard => {
                self.edit = None;
                self.screen = Screen::ProjectView;
                self.set_status("Edit cancelled");
                return;
            }
            _ => {}
        }

        let Some(session) = self.edit.as_mut() else {
            self.screen = Screen::ProjectView;
            return;
        };

        if action == KeyAction::ToggleFocus {
            if session.reference.is_some() {
                session.focus = match session.focus {
                    EditFocus::Editor => EditFocus::Reference,
                    EditFocus::Reference => EditFocus::Editor,
                };
            }
            return;
        }

        match session.focus {
            EditFocus::Reference => scroll_reference(session, action),
            EditFocus::Editor => edit_buffer(session, action),
        }
    }

    fn save_edit(&mut self) {
        let Some(session) = self.edit.as_ref() else {
            self.screen = Screen::ProjectView;
            return;
        };
        let content = session.buffer.text();
        match self.store.write_note(
            &self.current_project,
            session.category,
            &session.name,
            &content,
        ) {
            Ok(()) => {
                self.edit = None;
                self.screen = Screen::ProjectView;
                self.set_status("Saved ✓");
                self.reload_project_view();
            }
            // Stay in the editor so the text is not lost.
            Err(err) => self.set_error(format!("Error saving: {err}")),
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }
}

fn scroll_reference(session: &mut EditSession, action: KeyAction) {
    let scroll = &mut session.reference_scroll;
    match action {
        KeyAction::Up => *scroll = scroll.saturating_sub(1),
        KeyAction::Down => *scroll = scroll.saturating_add(1),
        KeyAction::PageUp => *scroll = scroll.saturating_sub(PAGE_SCROLL),
        KeyAction::PageDown => *scroll = scroll.saturating_add(PAGE_SCROLL),
        KeyAction::Home => *scroll = 0,
        _ => {}
    }
}

fn edit_buffer(session: &mut EditSession, action: KeyAction) {
    let buffer = &mut session.buffer;
    let modified = match action {
        KeyAction::Char(c) => {
            buffer.insert_char(c);
            true
        }
        KeyAction::Newline => {
            buffer.insert_newline();
            true
        }
        KeyAction::Backspace => {
            buffer.backspace();
            true
        }
        KeyAction::Delete => {
            buffer.delete();
            true
        }
        KeyAction::Left => {
            buffer.move_left();
            false
        }
        KeyAction::Right => {
            buffer.move_right();
            false
        }
        KeyAction::Up => {
            buffer.move_up();
            false
        }
        KeyAction::Down => {
            buffer.move_down();
            false
        }
        KeyAction::Home => {
            buffer.move_home();
            false
        }
        KeyAction::End => {
            buffer.move_end();
            false
        }
        _ => false,
    };
    if modified {
        session.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{App, EditFocus, Screen, MENU_ITEMS};
    use crate::tui::event::{InputMode, KeyAction};
    use crate::tui::ui::render;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use teatime_core::{FsNoteStore, NoteStore, PeriodCategory};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_with_project() -> (TempDir, App<FsNoteStore>) {
        let temp = tempfile::tempdir().unwrap();
        let store = FsNoteStore::open(temp.path()).unwrap();
        store.create_project("journal").unwrap();
        store
            .write_note("journal", PeriodCategory::Daily, "2025-01-14", "tuesday")
            .unwrap();
        (temp, App::new(store, date(2025, 1, 25)))
    }

    fn press(app: &mut App<FsNoteStore>, action: KeyAction) {
        let today = app.today;
        app.handle_action(action, today);
    }

    fn type_text(app: &mut App<FsNoteStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyAction::Char(c));
        }
    }

    #[test]
    fn opening_project_shows_reminders_before_menu() {
        let (_temp, mut app) = app_with_project();
        assert_eq!(app.projects, vec!["journal"]);

        press(&mut app, KeyAction::Select);

        assert_eq!(app.screen, Screen::ProjectView);
        assert_eq!(app.reminders.len(), 1);
        assert_eq!(app.reminders[0].name, "2025-W03");
        assert_eq!(app.project_view_len(), 1 + MENU_ITEMS.len());
    }

    #[test]
    fn writing_reminded_summary_clears_it() {
        let (_temp, mut app) = app_with_project();
        press(&mut app, KeyAction::Select);
        press(&mut app, KeyAction::Select);

        assert_eq!(app.screen, Screen::Edit);
        let session = app.edit.as_ref().unwrap();
        assert_eq!(session.category, PeriodCategory::Weekly);
        assert_eq!(
            session.reference.as_deref(),
            Some("── 2025-01-14 (Tuesday) ──\ntuesday")
        );

        type_text(&mut app, "good week");
        assert!(app.edit.as_ref().unwrap().dirty);
        press(&mut app, KeyAction::Save);

        assert_eq!(app.screen, Screen::ProjectView);
        assert!(app.reminders.is_empty());
        assert_eq!(app.menu_cursor, 0);
        assert_eq!(app.status.as_ref().map(|s| s.is_error), Some(false));
    }

    #[test]
    fn edit_today_uses_supplied_date_and_has_no_reference() {
        let (_temp, mut app) = app_with_project();
        press(&mut app, KeyAction::Select);
        app.handle_action(KeyAction::Edit, date(2025, 1, 26));

        let session = app.edit.as_ref().unwrap();
        assert_eq!(session.name, "2025-01-26");
        assert!(session.reference.is_none());
        assert_eq!(app.input_mode(), InputMode::Editing);

        press(&mut app, KeyAction::ToggleFocus);
        assert_eq!(app.edit.as_ref().unwrap().focus, EditFocus::Editor);

        type_text(&mut app, "sunday");
        press(&mut app, KeyAction::Save);
        assert_eq!(app.today_note, "sunday");
    }

    #[test]
    fn discard_leaves_note_untouched() {
        let (_temp, mut app) = app_with_project();
        press(&mut app, KeyAction::Select);
        press(&mut app, KeyAction::OpenCategory(PeriodCategory::Daily));
        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.preview, "tuesday");

        press(&mut app, KeyAction::Edit);
        type_text(&mut app, "oops ");
        press(&mut app, KeyAction::Discard);

        assert_eq!(app.screen, Screen::ProjectView);
        press(&mut app, KeyAction::OpenCategory(PeriodCategory::Daily));
        assert_eq!(app.preview, "tuesday");
    }

    #[test]
    fn reference_pane_scrolls_when_focused() {
        let (_temp, mut app) = app_with_project();
        press(&mut app, KeyAction::Select);
        press(&mut app, KeyAction::OpenCategory(PeriodCategory::Monthly));
        press(&mut app, KeyAction::New);

        let session = app.edit.as_ref().unwrap();
        assert_eq!(session.name, "2025-01");
        assert!(session.reference.as_deref().unwrap().contains("(no summary)"));

        press(&mut app, KeyAction::ToggleFocus);
        press(&mut app, KeyAction::PageDown);
        press(&mut app, KeyAction::Char('x'));
        let session = app.edit.as_ref().unwrap();
        assert_eq!(session.focus, EditFocus::Reference);
        assert_eq!(session.reference_scroll, 10);
        assert!(!session.dirty);
    }

    #[test]
    fn new_project_prompt_creates_sanitized_project() {
        let (_temp, mut app) = app_with_project();
        press(&mut app, KeyAction::New);
        assert_eq!(app.input_mode(), InputMode::Prompt);

        type_text(&mut app, "Side Quest");
        press(&mut app, KeyAction::SubmitInput);

        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.projects, vec!["journal", "side-quest"]);
        assert_eq!(app.project_cursor, 1);
    }

    #[test]
    fn tick_on_new_day_refreshes_reminders() {
        let (_temp, mut app) = app_with_project();
        app.handle_action(KeyAction::Select, date(2025, 1, 15));
        assert!(app.reminders.is_empty());

        app.on_tick(date(2025, 1, 20));
        assert_eq!(app.reminders.len(), 1);
    }

    #[test]
    fn failed_reminder_scan_is_reported_and_menu_stays() {
        let (temp, mut app) = app_with_project();
        let days = temp.path().join("journal").join("days");
        std::fs::remove_dir_all(&days).unwrap();
        std::fs::write(&days, "not a directory").unwrap();

        press(&mut app, KeyAction::Select);

        assert_eq!(app.screen, Screen::ProjectView);
        assert!(app.reminders.is_empty());
        let status = app.status.as_ref().expect("status message");
        assert!(status.is_error);
        assert!(status.text.starts_with("Error checking reminders"));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Edit today"));
        assert!(screen.contains("Error checking reminders"));
    }

    #[test]
    fn quit_works_from_any_normal_screen() {
        let (_temp, mut app) = app_with_project();
        press(&mut app, KeyAction::Select);
        press(&mut app, KeyAction::Quit);
        assert!(app.should_quit);
    }
}
