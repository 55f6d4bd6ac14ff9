//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! independently testable predicates to be applied to listing sets.

use data_loader::Listing;

/// A single listing predicate.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters only answer "does this listing pass"; the pipeline decides how
///   to combine them, so filtering and compliance counting can never disagree
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `listing` passes this filter.
    fn matches(&self, listing: &Listing) -> bool;

    /// Keep only the listings that pass, preserving input order.
    fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect()
    }
}
