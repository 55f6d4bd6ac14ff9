//! Filter on deposit (보증금), inclusive on both ends.

use crate::range::RangeConstraint;
use crate::traits::Filter;
use data_loader::{Listing, ManWon};

pub struct DepositRangeFilter {
    range: RangeConstraint<ManWon>,
}

impl DepositRangeFilter {
    pub fn new(range: RangeConstraint<ManWon>) -> Self {
        Self { range }
    }
}

impl Filter for DepositRangeFilter {
    fn name(&self) -> &str {
        "DepositRangeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.range.contains(listing.deposit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::District;

    #[test]
    fn test_deposit_range_filter() {
        let listings = vec![
            Listing::new(0, District::Gangnam, 499, 80, 30.0, ""),
            Listing::new(1, District::Gangnam, 500, 80, 30.0, ""),
            Listing::new(2, District::Gangnam, 2000, 80, 30.0, ""),
            Listing::new(3, District::Gangnam, 2500, 80, 30.0, ""),
        ];

        let filter = DepositRangeFilter::new(RangeConstraint::new(500, 2000));
        let filtered = filter.apply(&listings);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].deposit, 500);
        assert_eq!(filtered[1].deposit, 2000);
    }
}
