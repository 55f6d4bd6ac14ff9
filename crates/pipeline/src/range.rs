//! Inclusive min/max ranges and their validation.
//!
//! A `RangeConstraint` is a plain value: it can hold an inverted pair. Nothing
//! downstream accepts one without running it through [`validate_range`] first,
//! and an inverted range is reported, never swapped or clamped.

use crate::error::CriteriaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric attributes a listing can be constrained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Deposit,
    MonthlyRent,
    Area,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Deposit => "deposit",
            Dimension::MonthlyRent => "monthly rent",
            Dimension::Area => "area",
        })
    }
}

/// Check one `(min, max)` pair.
///
/// Succeeds iff `min <= max`, so a single-value range (`min == max`) is fine.
/// Unordered values (a NaN bound) fail as well, since no listing could ever
/// fall inside them.
pub fn validate_range<T>(dimension: Dimension, min: T, max: T) -> Result<(), CriteriaError>
where
    T: PartialOrd + Into<f64>,
{
    if min <= max {
        Ok(())
    } else {
        Err(CriteriaError::InvalidRange {
            dimension,
            min: min.into(),
            max: max.into(),
        })
    }
}

/// Inclusive `[min, max]` bounds on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
}

impl<T> RangeConstraint<T>
where
    T: PartialOrd + Copy + Into<f64>,
{
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Single-value range.
    pub fn exactly(value: T) -> Self {
        Self { min: value, max: value }
    }

    pub fn validate(&self, dimension: Dimension) -> Result<(), CriteriaError> {
        validate_range(dimension, self.min, self.max)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for RangeConstraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.min, self.max)
    }
}
