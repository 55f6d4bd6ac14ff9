//! # Collector Crate
//!
//! Turns a user's district selection and ranges into a request for the
//! external listing collector. Nothing here touches the network: the request
//! is a plain value the calling layer decides whether to send.
//!
//! ## Example Usage
//!
//! ```ignore
//! use collector::CollectionRequestBuilder;
//! use pipeline::{DistrictSelection, RangeConstraint};
//!
//! let built = CollectionRequestBuilder::new().build(
//!     &districts,
//!     RangeConstraint::new(0, 2000),
//!     RangeConstraint::new(0, 130),
//!     RangeConstraint::new(20.0, 100.0),
//! )?;
//!
//! for (district, params) in built.request.district_queries() {
//!     println!("{district}: {params:?}");
//! }
//! ```

pub mod builder;
pub mod request;

// Re-export commonly used types
pub use builder::{BuiltRequest, CollectionRequestBuilder};
pub use request::{CollectionRequest, PROPERTY_TYPE, TRANSACTION_TYPE};
