//! Filter on monthly rent (월세), inclusive on both ends.

use crate::range::RangeConstraint;
use crate::traits::Filter;
use data_loader::{Listing, ManWon};

pub struct RentRangeFilter {
    range: RangeConstraint<ManWon>,
}

impl RentRangeFilter {
    pub fn new(range: RangeConstraint<ManWon>) -> Self {
        Self { range }
    }
}

impl Filter for RentRangeFilter {
    fn name(&self) -> &str {
        "RentRangeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.range.contains(listing.monthly_rent)
    }
}
