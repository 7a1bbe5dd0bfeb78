//! Application paths and log settings.
//!
//! # Responsibility
//! - Resolve the fixed per-user storage root (`~/.teatime`).
//! - Pick the log directory and level for the current process.
//!
//! # Invariants
//! - The storage root is not configurable; only the log level reads the
//!   environment.
//! - Logs live in a hidden directory under the root so project listing
//!   never shows them.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding all journals.
pub const ROOT_DIR_NAME: &str = ".teatime";
/// Log directory under the storage root.
pub const LOG_DIR_NAME: &str = ".logs";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "TEATIME_LOG";

#[derive(Debug)]
pub enum ConfigError {
    /// The platform reports no home directory.
    HomeDirUnavailable,
    /// A required directory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeDirUnavailable => write!(f, "could not determine home directory"),
            Self::CreateDir { path, source } => {
                write!(f, "could not create directory `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::HomeDirUnavailable => None,
            Self::CreateDir { source, .. } => Some(source),
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Journal storage root.
    pub root: PathBuf,
    /// Rolling log file directory.
    pub log_dir: PathBuf,
    /// Requested log level; validated by `init_logging`.
    pub log_level: String,
}

impl AppConfig {
    /// Resolves settings for the current user.
    ///
    /// # Errors
    /// - `ConfigError::HomeDirUnavailable` when no home directory is known.
    pub fn resolve() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        let mut config = Self::with_root(home.join(ROOT_DIR_NAME));
        config.log_level = level_or_default(std::env::var(LOG_LEVEL_ENV).ok());
        Ok(config)
    }

    /// Builds settings for an explicit storage root with the default level.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let log_dir = root.join(LOG_DIR_NAME);
        Self {
            root,
            log_dir,
            log_level: default_log_level().as_str().to_string(),
        }
    }

    /// Creates the storage root and log directory.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        create_dir(&self.root)?;
        create_dir(&self.log_dir)
    }
}

fn level_or_default(value: Option<String>) -> String {
    match value {
        Some(level) if !level.trim().is_empty() => level.trim().to_string(),
        _ => default_log_level().as_str().to_string(),
    }
}

fn create_dir(path: &Path) -> Result<(), ConfigError> {
    std::fs::create_dir_all(path).map_err(|source| ConfigError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
