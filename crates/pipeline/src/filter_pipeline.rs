//! The FilterPipeline combines filters into one conjunctive predicate.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, and `filter_listings`, the
//! entry point that validates criteria before filtering.

use crate::criteria::FilterCriteria;
use crate::error::CriteriaError;
use crate::filters::{AreaRangeFilter, DepositRangeFilter, DistrictMembershipFilter, RentRangeFilter};
use crate::traits::Filter;
use data_loader::Listing;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// A listing passes the pipeline iff it passes every filter. An empty
/// pipeline passes everything.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::from_criteria(&criteria)?;
///
/// let filtered = pipeline.apply(set.listings());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard four-filter pipeline for `criteria`.
    ///
    /// Rejects inverted ranges with the same error `validate_range` reports.
    pub fn from_criteria(criteria: &FilterCriteria) -> Result<Self, CriteriaError> {
        criteria.validate()?;

        Ok(Self::new()
            .add_filter(DistrictMembershipFilter::new(criteria.districts.clone()))
            .add_filter(DepositRangeFilter::new(criteria.deposit))
            .add_filter(RentRangeFilter::new(criteria.monthly_rent))
            .add_filter(AreaRangeFilter::new(criteria.area_pyeong)))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Whether `listing` passes every filter.
    ///
    /// This is the one predicate used both for filtering and for compliance
    /// reporting.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters.iter().all(|filter| filter.matches(listing))
    }

    /// Names of the filters that reject `listing`, in pipeline order.
    pub fn failed_filters(&self, listing: &Listing) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|filter| !filter.matches(listing))
            .map(|filter| filter.name())
            .collect()
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with the input listings
    /// 2. For each filter in order:
    ///    a. Apply the filter
    ///    b. Log filter name and input/output counts
    /// 3. Return final filtered set
    ///
    /// The input is left untouched and retained listings keep their relative
    /// order.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut current = listings.to_vec();
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(&current);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter `listings` against `criteria`.
///
/// Fails up front if any range in `criteria` is inverted. An empty result is
/// not an error.
pub fn filter_listings(
    listings: &[Listing],
    criteria: &FilterCriteria,
) -> Result<Vec<Listing>, CriteriaError> {
    let pipeline = FilterPipeline::from_criteria(criteria)?;
    let filtered = pipeline.apply(listings);
    tracing::debug!("Filtered {} listings down to {}", listings.len(), filtered.len());
    Ok(filtered)
}
