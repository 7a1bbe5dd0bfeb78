//! Journal use-case services.
//!
//! # Responsibility
//! - Orchestrate calendar math and note store reads into the reminder scan
//!   and reference gathering use-cases.
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - Services hold no mutable state; every call recomputes from the store.
//! - "Now" is an explicit argument captured once per operation.

pub mod reference_service;
pub mod reminder_service;

use crate::calendar::PeriodParseError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type JournalResult<T> = Result<T, JournalError>;

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalError {
    /// Malformed period name supplied by the caller.
    Parse(PeriodParseError),
    /// Note store failure.
    Store(StoreError),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<PeriodParseError> for JournalError {
    fn from(value: PeriodParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<StoreError> for JournalError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
