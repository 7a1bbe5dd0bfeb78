//! Reminder value produced by missing-summary scans.

use crate::model::period::PeriodCategory;
use serde::Serialize;

/// A past period that has daily entries but no summary note yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    /// Summary category that is missing.
    pub category: PeriodCategory,
    /// Canonical period name, e.g. `2025-W03`.
    pub name: String,
    /// Display label, e.g. `Weekly summary for 2025-W03`.
    pub label: String,
}

impl Reminder {
    /// Builds a reminder with the canonical label for `category` and `name`.
    pub fn new(category: PeriodCategory, name: impl Into<String>) -> Self {
        let name = name.into();
        let label = format!("{} summary for {}", category.adjective(), name);
        Self {
            category,
            name,
            label,
        }
    }
}
