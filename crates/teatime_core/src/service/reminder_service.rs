//! Missing-summary reminder scan.
//!
//! # Responsibility
//! - Find every past week/month/quarter/year that has daily entries but no
//!   summary note.
//!
//! # Invariants
//! - Only periods strictly before the in-progress one (relative to `as_of`)
//!   are reminded; daily notes dated after `as_of` never produce reminders.
//! - Daily note names that do not parse as dates are skipped, not fatal.
//! - Output order: Weekly < Monthly < Quarterly < Yearly, then name
//!   descending (most recent first).

use crate::calendar::{parse_day, period_identifier};
use crate::model::period::PeriodCategory;
use crate::model::reminder::Reminder;
use crate::store::{NoteStore, StoreResult};
use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::BTreeSet;

/// Reminder scan over one note store.
pub struct ReminderService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> ReminderService<S> {
    /// Creates a service over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Computes missing-summary reminders for `project` as of `as_of`.
    ///
    /// # Errors
    /// - Returns the store error when daily notes cannot be listed.
    pub fn compute_reminders(&self, project: &str, as_of: NaiveDate) -> StoreResult<Vec<Reminder>> {
        let notes = self.store.list_notes(project, PeriodCategory::Daily)?;

        let mut dates = Vec::with_capacity(notes.len());
        for note in &notes {
            match parse_day(&note.name) {
                Ok(date) => dates.push(date),
                Err(err) => warn!(
                    "event=reminder_scan_skip module=reminder status=skipped reason=\"{}\"",
                    err
                ),
            }
        }
        if dates.is_empty() {
            return Ok(Vec::new());
        }

        let mut reminders = Vec::new();
        for category in PeriodCategory::SUMMARIES {
            let current = period_identifier(as_of, category);
            // Canonical names are zero-padded, so string order is time order.
            let periods: BTreeSet<String> = dates
                .iter()
                .map(|date| period_identifier(*date, category))
                .filter(|period| *period < current)
                .collect();

            reminders.extend(
                periods
                    .into_iter()
                    .filter(|period| !self.store.note_exists(project, category, period))
                    .map(|period| Reminder::new(category, period)),
            );
        }

        reminders.sort_by(|left, right| {
            left.category
                .cmp(&right.category)
                .then_with(|| right.name.cmp(&left.name))
        });

        debug!(
            "event=reminder_scan module=reminder status=ok daily_notes={} parsed={} reminders={}",
            notes.len(),
            dates.len(),
            reminders.len()
        );
        Ok(reminders)
    }
}
