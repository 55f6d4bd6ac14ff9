//! Filter to keep listings in the selected districts.
//!
//! An empty selection keeps nothing.

use crate::criteria::DistrictSelection;
use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings whose district is in the selection.
pub struct DistrictMembershipFilter {
    districts: DistrictSelection,
}

impl DistrictMembershipFilter {
    pub fn new(districts: DistrictSelection) -> Self {
        Self { districts }
    }
}

impl Filter for DistrictMembershipFilter {
    fn name(&self) -> &str {
        "DistrictMembershipFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.districts.contains(listing.district)
    }
}
