//! Error types for criteria validation.

use crate::range::Dimension;
use std::fmt;
use thiserror::Error;

/// A single problem with user-supplied criteria.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriteriaError {
    /// `min > max` for one of the numeric dimensions
    #[error("{dimension} range is inverted: min {min} is greater than max {max}")]
    InvalidRange { dimension: Dimension, min: f64, max: f64 },

    /// A collection request needs at least one district
    #[error("at least one district must be selected")]
    EmptyDistrictSelection,
}

impl CriteriaError {
    /// Dimension this error is about, if it is a range error.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            CriteriaError::InvalidRange { dimension, .. } => Some(*dimension),
            CriteriaError::EmptyDistrictSelection => None,
        }
    }
}

/// Every problem found in one validation pass.
///
/// Never empty: a pass that finds nothing returns `Ok` instead.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", DisplayList(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<CriteriaError>,
}

impl ValidationErrors {
    /// `Ok(())` when `errors` is empty.
    pub fn check(errors: Vec<CriteriaError>) -> Result<(), ValidationErrors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    pub fn contains(&self, error: &CriteriaError) -> bool {
        self.errors.contains(error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriteriaError> {
        self.errors.iter()
    }
}

struct DisplayList<'a>(&'a [CriteriaError]);

impl fmt::Display for DisplayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Returned when a sort key name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort key '{0}' (expected one of: deposit_asc, deposit_desc, rent_asc, rent_desc, area_asc, area_desc, registration_order)")]
pub struct UnknownSortKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_joins() {
        let errors = ValidationErrors {
            errors: vec![
                CriteriaError::EmptyDistrictSelection,
                CriteriaError::InvalidRange {
                    dimension: Dimension::Deposit,
                    min: 2000.0,
                    max: 500.0,
                },
            ],
        };
        assert_eq!(
            errors.to_string(),
            "at least one district must be selected; deposit range is inverted: min 2000 is greater than max 500"
        );
    }

    #[test]
    fn test_check_empty_is_ok() {
        assert!(ValidationErrors::check(Vec::new()).is_ok());
    }
}
