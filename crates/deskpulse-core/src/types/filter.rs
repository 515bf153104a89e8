//! Filter primitives for dashboard criteria.
//!
//! A dimension is either unconstrained ([`Selection::All`]) or pinned to an
//! exact value. Date ranges are inclusive on both ends and compare calendar
//! dates.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The literal accepted as "no constraint" on a dimension.
pub const ALL: &str = "all";

/// Constraint on a single categorical dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    /// No constraint.
    #[default]
    All,
    /// Exact match on the given value.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this constraint.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> Selection<T> {
    /// Whether this dimension is unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr> Selection<T> {
    /// Parse a raw request value. Absent, empty, and `"all"` (any case) mean
    /// no constraint.
    pub fn parse(raw: Option<&str>) -> Result<Self, T::Err> {
        match raw.map(str::trim) {
            None => Ok(Self::All),
            Some(v) if v.is_empty() || v.eq_ignore_ascii_case(ALL) => Ok(Self::All),
            Some(v) => v.parse().map(Self::Only),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range. A range whose start is after its end selects nothing.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
