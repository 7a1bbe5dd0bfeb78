//! Core journal logic for teatime.
//! Calendar naming, missing-summary reminders and reference gathering over a
//! markdown note store. Front-ends call into this crate and render results.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::{
    days_of_week, default_name, monday_of_iso_week, months_of_quarter, period_identifier,
    quarter_of, quarters_of_year, weeks_overlapping_month, PeriodParseError,
};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::period::PeriodCategory;
pub use model::reminder::Reminder;
pub use service::reference_service::ReferenceService;
pub use service::reminder_service::ReminderService;
pub use service::{JournalError, JournalResult};
pub use store::{FsNoteStore, NoteFile, NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
