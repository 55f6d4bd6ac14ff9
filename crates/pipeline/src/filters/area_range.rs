//! Filter on floor area in pyeong, inclusive on both ends.

use crate::range::RangeConstraint;
use crate::traits::Filter;
use data_loader::{Listing, Pyeong};

pub struct AreaRangeFilter {
    range: RangeConstraint<Pyeong>,
}

impl AreaRangeFilter {
    pub fn new(range: RangeConstraint<Pyeong>) -> Self {
        Self { range }
    }
}

impl Filter for AreaRangeFilter {
    fn name(&self) -> &str {
        "AreaRangeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.range.contains(listing.area_pyeong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::District;

    #[test]
    fn test_area_range_filter() {
        let listings = vec![
            Listing::new(0, District::Seocho, 1000, 80, 19.99, ""),
            Listing::new(1, District::Seocho, 1000, 80, 20.0, ""),
            Listing::new(2, District::Seocho, 1000, 80, 50.0, ""),
            Listing::new(3, District::Seocho, 1000, 80, 50.01, ""),
        ];

        let filter = AreaRangeFilter::new(RangeConstraint::new(20.0, 50.0));
        let kept: Vec<_> = filter
            .apply(&listings)
            .iter()
            .map(|l| l.sequence_index)
            .collect();

        assert_eq!(kept, vec![1, 2]);
    }
}
