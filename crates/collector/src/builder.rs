//! Validated construction of collection requests.

use crate::request::CollectionRequest;
use data_loader::{ManWon, Pyeong};
use pipeline::{range_errors, CriteriaError, DistrictSelection, RangeConstraint, ValidationErrors};
use serde::Serialize;

/// A request plus the advisory size estimate shown before collecting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltRequest {
    pub request: CollectionRequest,
    /// Display only; never used to limit collection
    pub estimated_count: usize,
}

/// Builds `CollectionRequest`s.
///
/// ## Usage
/// ```ignore
/// let built = CollectionRequestBuilder::new()
///     .with_per_district_estimate(500)
///     .build(&districts, deposit, rent, area)?;
///
/// println!("about {} listings", built.estimated_count);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionRequestBuilder {
    per_district_estimate: usize,
}

impl CollectionRequestBuilder {
    /// Rough number of listings one district yields.
    pub const PER_DISTRICT_ESTIMATE: usize = 400;

    pub fn new() -> Self {
        Self {
            per_district_estimate: Self::PER_DISTRICT_ESTIMATE,
        }
    }

    /// Override the per-district estimate (builder pattern).
    pub fn with_per_district_estimate(mut self, per_district_estimate: usize) -> Self {
        self.per_district_estimate = per_district_estimate;
        self
    }

    pub fn per_district_estimate(&self) -> usize {
        self.per_district_estimate
    }

    /// Validate every input and build the request.
    ///
    /// All problems are reported together: an empty district selection and
    /// each inverted range appear in the same `ValidationErrors`.
    pub fn build(
        &self,
        districts: &DistrictSelection,
        deposit: RangeConstraint<ManWon>,
        monthly_rent: RangeConstraint<ManWon>,
        area_pyeong: RangeConstraint<Pyeong>,
    ) -> Result<BuiltRequest, ValidationErrors> {
        let mut errors = Vec::new();
        if districts.is_empty() {
            errors.push(CriteriaError::EmptyDistrictSelection);
        }
        errors.extend(range_errors(&deposit, &monthly_rent, &area_pyeong));

        if let Err(e) = ValidationErrors::check(errors) {
            tracing::warn!("Rejected collection request: {}", e);
            return Err(e);
        }

        let estimated_count = districts.len().saturating_mul(self.per_district_estimate);
        tracing::info!(
            "Built collection request for {} districts (estimated {} listings)",
            districts.len(),
            estimated_count
        );

        Ok(BuiltRequest {
            request: CollectionRequest::new(districts.clone(), deposit, monthly_rent, area_pyeong),
            estimated_count,
        })
    }
}

impl Default for CollectionRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{PROPERTY_TYPE, TRANSACTION_TYPE};
    use data_loader::District;
    use pipeline::Dimension;

    fn districts() -> DistrictSelection {
        [District::Gangnam, District::Mapo].into_iter().collect()
    }

    #[test]
    fn test_build_valid_request() {
        let built = CollectionRequestBuilder::new()
            .build(
                &districts(),
                RangeConstraint::new(500, 2000),
                RangeConstraint::new(50, 130),
                RangeConstraint::new(20.0, 50.0),
            )
            .unwrap();

        assert_eq!(built.estimated_count, 800);
        assert_eq!(built.request.districts(), &districts());
        assert_eq!(built.request.property_type(), PROPERTY_TYPE);
        assert_eq!(built.request.transaction_type(), TRANSACTION_TYPE);
        assert_eq!(built.request.deposit(), RangeConstraint::new(500, 2000));
    }

    #[test]
    fn test_empty_districts_rejected() {
        let errors = CollectionRequestBuilder::new()
            .build(
                &DistrictSelection::new(),
                RangeConstraint::new(0, 2000),
                RangeConstraint::new(0, 130),
                RangeConstraint::new(20.0, 100.0),
            )
            .unwrap_err();

        assert_eq!(errors.errors, vec![CriteriaError::EmptyDistrictSelection]);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = CollectionRequestBuilder::new()
            .build(
                &DistrictSelection::new(),
                RangeConstraint::new(2000, 500),
                RangeConstraint::new(130, 50),
                RangeConstraint::new(50.0, 20.0),
            )
            .unwrap_err();

        assert_eq!(errors.errors.len(), 4);
        assert!(errors.contains(&CriteriaError::EmptyDistrictSelection));
        let dims: Vec<_> = errors.iter().filter_map(|e| e.dimension()).collect();
        assert_eq!(dims, vec![Dimension::Deposit, Dimension::MonthlyRent, Dimension::Area]);
    }

    #[test]
    fn test_single_value_ranges_allowed() {
        let built = CollectionRequestBuilder::new().build(
            &districts(),
            RangeConstraint::exactly(0),
            RangeConstraint::exactly(0),
            RangeConstraint::exactly(0.0),
        );
        assert!(built.is_ok());
    }

    #[test]
    fn test_estimate_override() {
        let builder = CollectionRequestBuilder::new().with_per_district_estimate(4000);
        let built = builder
            .build(
                &DistrictSelection::all(),
                RangeConstraint::new(0, 2000),
                RangeConstraint::new(0, 130),
                RangeConstraint::new(20.0, 100.0),
            )
            .unwrap();
        assert_eq!(built.estimated_count, 25 * 4000);
    }

    #[test]
    fn test_default_estimate() {
        assert_eq!(CollectionRequestBuilder::default().per_district_estimate(), 400);
    }
}
