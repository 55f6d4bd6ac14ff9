//! Deterministic ordering of listing sequences.
//!
//! Every key uses a stable sort, so listings with equal keys keep their input
//! order. Sorting by the same key twice gives the same sequence.

use crate::error::UnknownSortKey;
use data_loader::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How to order a listing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    DepositAsc,
    DepositDesc,
    RentAsc,
    RentDesc,
    AreaAsc,
    AreaDesc,
    #[default]
    RegistrationOrder,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::DepositAsc,
        SortKey::DepositDesc,
        SortKey::RentAsc,
        SortKey::RentDesc,
        SortKey::AreaAsc,
        SortKey::AreaDesc,
        SortKey::RegistrationOrder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DepositAsc => "deposit_asc",
            SortKey::DepositDesc => "deposit_desc",
            SortKey::RentAsc => "rent_asc",
            SortKey::RentDesc => "rent_desc",
            SortKey::AreaAsc => "area_asc",
            SortKey::AreaDesc => "area_desc",
            SortKey::RegistrationOrder => "registration_order",
        }
    }

    fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::DepositAsc => a.deposit.cmp(&b.deposit),
            SortKey::DepositDesc => b.deposit.cmp(&a.deposit),
            SortKey::RentAsc => a.monthly_rent.cmp(&b.monthly_rent),
            SortKey::RentDesc => b.monthly_rent.cmp(&a.monthly_rent),
            SortKey::AreaAsc => area_key(a).total_cmp(&area_key(b)),
            SortKey::AreaDesc => area_key(b).total_cmp(&area_key(a)),
            SortKey::RegistrationOrder => a.sequence_index.cmp(&b.sequence_index),
        }
    }
}

/// Area as a sort key, with `-0.0` folded into `0.0` so the two tie.
fn area_key(listing: &Listing) -> f64 {
    listing.area_pyeong + 0.0
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Return `listings` ordered by `key`, leaving the input untouched.
pub fn sort_listings(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    // `sort_by` is stable
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
