//! Filesystem-backed note store.
//!
//! Layout: `<root>/<project>/<category dir>/<name>.md`, one human-readable
//! markdown file per note, no index or manifest.

use crate::model::period::PeriodCategory;
use crate::store::{NoteFile, NoteStore, StoreError, StoreResult};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const NOTE_EXTENSION: &str = "md";

/// Note store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| io_error("create directory", &root, source))?;
        Ok(Self { root })
    }

    /// Storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_dir(&self, project: &str, category: PeriodCategory) -> StoreResult<PathBuf> {
        let project = checked_component(project)?;
        Ok(self.root.join(project).join(category.dir_name()))
    }

    fn note_path(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
    ) -> StoreResult<PathBuf> {
        let name = checked_component(name)?;
        Ok(self
            .category_dir(project, category)?
            .join(format!("{name}.{NOTE_EXTENSION}")))
    }
}

impl NoteStore for FsNoteStore {
    fn list_notes(&self, project: &str, category: PeriodCategory) -> StoreResult<Vec<NoteFile>> {
        let dir = self.category_dir(project, category)?;
        fs::create_dir_all(&dir).map_err(|source| io_error("create directory", &dir, source))?;

        let entries = fs::read_dir(&dir).map_err(|source| io_error("read directory", &dir, source))?;
        let mut notes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| io_error("read directory", &dir, source))?;
            let path = entry.path();
            if path.is_dir() || path.extension().and_then(|ext| ext.to_str()) != Some(NOTE_EXTENSION)
            {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                debug!(
                    "event=note_skipped module=store reason=non_utf8_name path={}",
                    path.display()
                );
                continue;
            };
            notes.push(NoteFile {
                name: name.to_string(),
                category,
                path: path.clone(),
            });
        }

        notes.sort_by(|left, right| right.name.cmp(&left.name));
        Ok(notes)
    }

    fn read_note(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
    ) -> StoreResult<String> {
        let path = self.note_path(project, category, name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(io_error("read note", &path, source)),
        }
    }

    fn note_exists(&self, project: &str, category: PeriodCategory, name: &str) -> bool {
        self.note_path(project, category, name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn write_note(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
        content: &str,
    ) -> StoreResult<()> {
        let dir = self.category_dir(project, category)?;
        fs::create_dir_all(&dir).map_err(|source| io_error("create directory", &dir, source))?;
        let path = self.note_path(project, category, name)?;
        fs::write(&path, content).map_err(|source| io_error("write note", &path, source))?;
        debug!(
            "event=note_write module=store status=ok category={} bytes={}",
            category.dir_name(),
            content.len()
        );
        Ok(())
    }

    fn delete_note(&self, project: &str, category: PeriodCategory, name: &str) -> StoreResult<()> {
        let path = self.note_path(project, category, name)?;
        if !path.is_file() {
            return Err(StoreError::NoteNotFound(name.to_string()));
        }
        fs::remove_file(&path).map_err(|source| io_error("delete note", &path, source))
    }

    fn list_projects(&self) -> StoreResult<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|source| io_error("read directory", &self.root, source))?;
        let mut projects = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| io_error("read directory", &self.root, source))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                // Hidden directories hold tool state such as logs.
                if !name.starts_with('.') {
                    projects.push(name.to_string());
                }
            }
        }
        projects.sort();
        Ok(projects)
    }

    fn create_project(&self, name: &str) -> StoreResult<String> {
        let sanitized = sanitize_project_name(name);
        if sanitized.is_empty() {
            return Err(StoreError::InvalidProjectName(name.to_string()));
        }
        for category in PeriodCategory::ALL {
            let dir = self.category_dir(&sanitized, category)?;
            fs::create_dir_all(&dir)
                .map_err(|source| io_error("create directory", &dir, source))?;
        }
        info!("event=project_create module=store status=ok");
        Ok(sanitized)
    }

    fn delete_project(&self, name: &str) -> StoreResult<()> {
        let dir = self.root.join(checked_component(name)?);
        if !dir.is_dir() {
            return Err(StoreError::ProjectNotFound(name.to_string()));
        }
        fs::remove_dir_all(&dir).map_err(|source| io_error("delete project", &dir, source))?;
        info!("event=project_delete module=store status=ok");
        Ok(())
    }

    fn project_exists(&self, name: &str) -> bool {
        checked_component(name)
            .map(|name| self.root.join(name).is_dir())
            .unwrap_or(false)
    }
}

/// Normalizes a project name: trimmed, lower-case, spaces become `-`, and
/// only `[a-z0-9_-]` survives.
pub fn sanitize_project_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        .collect()
}

fn checked_component(name: &str) -> StoreResult<&str> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);
    if valid {
        Ok(name)
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

fn io_error(action: &'static str, path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        action,
        path: path.to_path_buf(),
        source,
    }
}
