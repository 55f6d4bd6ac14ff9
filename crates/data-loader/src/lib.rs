//! # Data Loader Crate
//!
//! This crate handles loading, indexing and exporting collected rental listings.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (District, Listing, unit aliases)
//! - **parser**: Parse listing CSV files into `Listing` records
//! - **index**: `ListingSet`, the ordered in-memory listing container
//! - **export**: Write listing sequences back out as CSV
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{District, ListingSet};
//! use std::path::Path;
//!
//! let set = ListingSet::load_from_file(Path::new("data/listings.csv"))?;
//! let gangnam = set.get_by_district(District::Gangnam);
//!
//! println!("{} of {} listings are in {}", gangnam.len(), set.len(), District::Gangnam);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod export;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::ListingSet;
pub use types::{
    // Type aliases
    ManWon,
    Pyeong,
    SequenceIndex,
    // Core types
    District,
    Listing,
    UnknownDistrict,
    SQUARE_METRES_PER_PYEONG,
};
