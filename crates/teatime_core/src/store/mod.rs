//! Note store contract and filesystem implementation.
//!
//! # Responsibility
//! - Define the read/write/list/exists contract the journal engine consumes.
//! - Keep path layout and file I/O details out of service code.
//!
//! # Invariants
//! - A missing note reads as empty text, never as an error.
//! - `note_exists` has no error channel; unreadable means "does not exist".
//! - Listing creates the category directory when absent.

mod fs_store;

pub use fs_store::{sanitize_project_name, FsNoteStore};

use crate::model::period::PeriodCategory;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for note and project operations.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    /// Project name is empty after sanitization.
    InvalidProjectName(String),
    /// Name cannot be used as a single path component.
    InvalidName(String),
    /// Target project directory does not exist.
    ProjectNotFound(String),
    /// Target note file does not exist.
    NoteNotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io {
                action,
                path,
                source,
            } => write!(f, "could not {action} `{}`: {source}", path.display()),
            Self::InvalidProjectName(name) => {
                write!(f, "project name `{name}` is empty after sanitization")
            }
            Self::InvalidName(name) => write!(f, "invalid name `{name}`"),
            Self::ProjectNotFound(name) => write!(f, "project `{name}` does not exist"),
            Self::NoteNotFound(name) => write!(f, "note `{name}` does not exist"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One markdown note on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    /// File stem, e.g. `2025-01-15`.
    pub name: String,
    /// Category directory the file lives in.
    pub category: PeriodCategory,
    /// Full path on disk.
    pub path: PathBuf,
}

/// Durable storage of named markdown notes keyed by
/// `(project, category, name)`.
pub trait NoteStore {
    /// Lists notes of one category, most recent (name descending) first.
    fn list_notes(&self, project: &str, category: PeriodCategory) -> StoreResult<Vec<NoteFile>>;
    /// Reads one note; returns empty text when the note does not exist.
    fn read_note(&self, project: &str, category: PeriodCategory, name: &str)
        -> StoreResult<String>;
    /// Returns whether the note exists. Never fails.
    fn note_exists(&self, project: &str, category: PeriodCategory, name: &str) -> bool;
    /// Replaces the full content of a note, creating it when needed.
    fn write_note(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
        content: &str,
    ) -> StoreResult<()>;
    /// Removes one note.
    fn delete_note(&self, project: &str, category: PeriodCategory, name: &str) -> StoreResult<()>;
    /// Lists project names alphabetically.
    fn list_projects(&self) -> StoreResult<Vec<String>>;
    /// Creates a project with every category directory; returns the
    /// sanitized name actually used.
    fn create_project(&self, name: &str) -> StoreResult<String>;
    /// Removes a project and all of its notes.
    fn delete_project(&self, name: &str) -> StoreResult<()>;
    /// Returns whether the project directory exists.
    fn project_exists(&self, name: &str) -> bool;
}

impl<T: NoteStore + ?Sized> NoteStore for &T {
    fn list_notes(&self, project: &str, category: PeriodCategory) -> StoreResult<Vec<NoteFile>> {
        (**self).list_notes(project, category)
    }

    fn read_note(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
    ) -> StoreResult<String> {
        (**self).read_note(project, category, name)
    }

    fn note_exists(&self, project: &str, category: PeriodCategory, name: &str) -> bool {
        (**self).note_exists(project, category, name)
    }

    fn write_note(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
        content: &str,
    ) -> StoreResult<()> {
        (**self).write_note(project, category, name, content)
    }

    fn delete_note(&self, project: &str, category: PeriodCategory, name: &str) -> StoreResult<()> {
        (**self).delete_note(project, category, name)
    }

    fn list_projects(&self) -> StoreResult<Vec<String>> {
        (**self).list_projects()
    }

    fn create_project(&self, name: &str) -> StoreResult<String> {
        (**self).create_project(name)
    }

    fn delete_project(&self, name: &str) -> StoreResult<()> {
        (**self).delete_project(name)
    }

    fn project_exists(&self, name: &str) -> bool {
        (**self).project_exists(name)
    }
}
