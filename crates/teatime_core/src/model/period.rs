//! Period category model.
//!
//! # Responsibility
//! - Carry per-category naming, labels and on-disk directory names.
//! - Centralize the day -> week -> month -> quarter -> year adjacency.
//!
//! # Invariants
//! - `Daily` has no child and `Yearly` has no parent.
//! - `dir_name()` values are stable; existing journals depend on them.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Granularity level of a journal note.
///
/// Variant declaration order is the finest-to-coarsest total order, so the
/// derived `Ord` doubles as the reminder sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodCategory {
    /// One calendar day, `YYYY-MM-DD`.
    Daily,
    /// One ISO week, `YYYY-Www`.
    Weekly,
    /// One calendar month, `YYYY-MM`.
    Monthly,
    /// One fixed 3-month block, `YYYY-Qq`.
    Quarterly,
    /// One calendar year, `YYYY`.
    Yearly,
}

impl PeriodCategory {
    /// All categories, finest first.
    pub const ALL: [PeriodCategory; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    /// Summary categories, i.e. every category that has a child.
    pub const SUMMARIES: [PeriodCategory; 4] =
        [Self::Weekly, Self::Monthly, Self::Quarterly, Self::Yearly];

    /// Directory name under a project root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Daily => "days",
            Self::Weekly => "weeks",
            Self::Monthly => "months",
            Self::Quarterly => "quarters",
            Self::Yearly => "years",
        }
    }

    /// Adjective used in reminder labels, e.g. `Weekly`.
    pub fn adjective(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    /// Heading for note lists.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily Notes",
            Self::Weekly => "Weekly Notes",
            Self::Monthly => "Monthly Notes",
            Self::Quarterly => "Quarterly Notes",
            Self::Yearly => "Yearly Notes",
        }
    }

    /// Heading for the reference pane shown while writing a summary.
    pub fn reference_label(self) -> &'static str {
        match self {
            Self::Weekly => "Daily entries",
            Self::Monthly => "Weekly summaries",
            Self::Quarterly => "Monthly summaries",
            Self::Yearly => "Quarterly summaries",
            Self::Daily => "Reference",
        }
    }

    /// Human-readable canonical name pattern.
    pub fn name_format(self) -> &'static str {
        match self {
            Self::Daily => "YYYY-MM-DD",
            Self::Weekly => "YYYY-Www",
            Self::Monthly => "YYYY-MM",
            Self::Quarterly => "YYYY-Qq",
            Self::Yearly => "YYYY",
        }
    }

    /// Next coarser category.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Daily => Some(Self::Weekly),
            Self::Weekly => Some(Self::Monthly),
            Self::Monthly => Some(Self::Quarterly),
            Self::Quarterly => Some(Self::Yearly),
            Self::Yearly => None,
        }
    }

    /// Next finer category.
    pub fn child(self) -> Option<Self> {
        match self {
            Self::Daily => None,
            Self::Weekly => Some(Self::Daily),
            Self::Monthly => Some(Self::Weekly),
            Self::Quarterly => Some(Self::Monthly),
            Self::Yearly => Some(Self::Quarterly),
        }
    }

    /// Whether notes of this category summarize a finer category.
    pub fn is_summary(self) -> bool {
        self.child().is_some()
    }
}

impl Display for PeriodCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.adjective())
    }
}
