//! Filter implementations for the listing pipeline.
//!
//! One filter per criterion. Each can be applied on its own, or composed
//! into a FilterPipeline where all of them must pass.

pub mod area_range;
pub mod deposit_range;
pub mod district_membership;
pub mod rent_range;

// Re-export for convenience
pub use area_range::AreaRangeFilter;
pub use deposit_range::DepositRangeFilter;
pub use district_membership::DistrictMembershipFilter;
pub use rent_range::RentRangeFilter;
