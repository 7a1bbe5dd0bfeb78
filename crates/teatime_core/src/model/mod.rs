//! Domain model for journal periods and derived reminder values.
//!
//! # Responsibility
//! - Define the closed set of period categories and their adjacency.
//! - Define ephemeral values produced by core scans.
//!
//! # Invariants
//! - Category order is finest to coarsest: day, week, month, quarter, year.
//! - Derived values are computed per request and never persisted.

pub mod period;
pub mod reminder;
