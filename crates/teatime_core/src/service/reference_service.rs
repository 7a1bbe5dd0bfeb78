//! Reference bundle gathering for summary editing.
//!
//! # Responsibility
//! - Concatenate the notes one granularity below a summary period, each
//!   under a header naming its child period.
//!
//! # Invariants
//! - Daily returns empty text; there is nothing below a day.
//! - Weekly lists only non-empty days; Monthly lists every overlapping week;
//!   Quarterly and Yearly always list all 3 months / 4 quarters.
//! - Only Weekly and Monthly have an all-empty placeholder sentence.
//! - The first store error aborts the gather; partial text is never returned.

use crate::calendar::{
    days_of_week, month_name, months_of_quarter, parse_month, period_identifier,
    quarters_of_year, weekday_name, weeks_overlapping_month,
};
use crate::model::period::PeriodCategory;
use crate::service::JournalResult;
use crate::store::NoteStore;
use chrono::Datelike;
use log::debug;

/// Placeholder when no day of a week has content.
pub const NO_DAILY_ENTRIES: &str = "(no daily entries for this week)";
/// Placeholder body for a child period without a summary.
pub const NO_SUMMARY: &str = "(no summary)";
/// Placeholder when a month overlaps no ISO week.
pub const NO_WEEKLY_SUMMARIES: &str = "(no weekly summaries for this month)";

const BLOCK_SEPARATOR: &str = "\n\n";

/// Reference gathering over one note store.
pub struct ReferenceService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> ReferenceService<S> {
    /// Creates a service over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Builds the reference bundle shown while writing `category` note `name`.
    ///
    /// # Errors
    /// - `JournalError::Parse` when `name` is not a valid `category` name.
    /// - `JournalError::Store` on the first failed note read.
    pub fn gather_reference(
        &self,
        project: &str,
        category: PeriodCategory,
        name: &str,
    ) -> JournalResult<String> {
        let bundle = match category {
            PeriodCategory::Daily => String::new(),
            PeriodCategory::Weekly => self.daily_for_week(project, name)?,
            PeriodCategory::Monthly => self.weekly_for_month(project, name)?,
            PeriodCategory::Quarterly => self.monthly_for_quarter(project, name)?,
            PeriodCategory::Yearly => self.quarterly_for_year(project, name)?,
        };
        debug!(
            "event=reference_gather module=reference status=ok category={} bytes={}",
            category.dir_name(),
            bundle.len()
        );
        Ok(bundle)
    }

    fn daily_for_week(&self, project: &str, name: &str) -> JournalResult<String> {
        let mut blocks = Vec::new();
        for day in days_of_week(name)? {
            let day_name = period_identifier(day, PeriodCategory::Daily);
            let content = self
                .store
                .read_note(project, PeriodCategory::Daily, &day_name)?;
            if !content.is_empty() {
                let title = format!("{day_name} ({})", weekday_name(day.weekday()));
                blocks.push(block(&title, &content));
            }
        }

        if blocks.is_empty() {
            return Ok(NO_DAILY_ENTRIES.to_string());
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    fn weekly_for_month(&self, project: &str, name: &str) -> JournalResult<String> {
        let weeks = weeks_overlapping_month(name)?;
        let mut blocks = Vec::with_capacity(weeks.len());
        for week in &weeks {
            let content = self
                .store
                .read_note(project, PeriodCategory::Weekly, week)?;
            blocks.push(block(week, or_placeholder(&content)));
        }

        if blocks.is_empty() {
            return Ok(NO_WEEKLY_SUMMARIES.to_string());
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    fn monthly_for_quarter(&self, project: &str, name: &str) -> JournalResult<String> {
        let mut blocks = Vec::with_capacity(3);
        for month_id in months_of_quarter(name)? {
            let (_, month) = parse_month(&month_id)?;
            let content = self
                .store
                .read_note(project, PeriodCategory::Monthly, &month_id)?;
            let title = format!("{month_id} ({})", month_name(month).unwrap_or_default());
            blocks.push(block(&title, or_placeholder(&content)));
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }

    fn quarterly_for_year(&self, project: &str, name: &str) -> JournalResult<String> {
        let mut blocks = Vec::with_capacity(4);
        for quarter in quarters_of_year(name)? {
            let content = self
                .store
                .read_note(project, PeriodCategory::Quarterly, &quarter)?;
            blocks.push(block(&quarter, or_placeholder(&content)));
        }
        Ok(blocks.join(BLOCK_SEPARATOR))
    }
}

fn block(title: &str, body: &str) -> String {
    format!("── {title} ──\n{body}")
}

fn or_placeholder(content: &str) -> &str {
    if content.is_empty() {
        NO_SUMMARY
    } else {
        content
    }
}
