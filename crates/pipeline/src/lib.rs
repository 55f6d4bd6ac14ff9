//! Range-constraint engine for rental listings.
//!
//! This crate provides:
//! - Range validation and immutable filter criteria
//! - Filter trait and one implementation per criterion
//! - FilterPipeline for composing filters
//! - Stable multi-key sorting
//! - Summary, per-district and compliance statistics
//!
//! ## Architecture
//! Everything here is a pure function over values the caller already holds:
//! 1. Ranges are validated (`validate_range`, `FilterCriteria::validate`)
//! 2. Filters keep listings that meet every criterion, in input order
//! 3. The sorter orders the result by the chosen key
//! 4. Statistics summarize any listing sequence; compliance reuses the
//!    filter pipeline's predicate
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_listings, sort_listings, summarize, SortKey};
//!
//! let filtered = filter_listings(set.listings(), &criteria)?;
//! let sorted = sort_listings(&filtered, SortKey::RentDesc);
//! let summary = summarize(&sorted);
//! ```

pub mod error;
pub mod range;
pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sorter;
pub mod stats;

// Re-export main types
pub use criteria::{range_errors, DistrictSelection, FilterCriteria};
pub use error::{CriteriaError, UnknownSortKey, ValidationErrors};
pub use filter_pipeline::{filter_listings, FilterPipeline};
pub use range::{validate_range, Dimension, RangeConstraint};
pub use sorter::{sort_listings, SortKey};
pub use stats::{
    compliance_report, district_counts, summarize, ComplianceCategory, ComplianceReport,
    FieldSummary, ListingSummary,
};
pub use traits::Filter;
