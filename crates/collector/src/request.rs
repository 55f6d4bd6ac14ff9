//! The immutable request handed to the external listing collector.

use data_loader::{District, ManWon, Pyeong, SQUARE_METRES_PER_PYEONG};
use pipeline::{DistrictSelection, RangeConstraint};
use serde::Serialize;

/// Property category collected: stores and offices (상가+사무실).
pub const PROPERTY_TYPE: &str = "SG:SMS";

/// Transaction category collected: monthly rent (월세).
pub const TRANSACTION_TYPE: &str = "B2";

/// What the collector should fetch.
///
/// Only `CollectionRequestBuilder` can create one, so every request has at
/// least one district and no inverted range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionRequest {
    districts: DistrictSelection,
    deposit: RangeConstraint<ManWon>,
    monthly_rent: RangeConstraint<ManWon>,
    area_pyeong: RangeConstraint<Pyeong>,
    property_type: &'static str,
    transaction_type: &'static str,
}

impl CollectionRequest {
    pub(crate) fn new(
        districts: DistrictSelection,
        deposit: RangeConstraint<ManWon>,
        monthly_rent: RangeConstraint<ManWon>,
        area_pyeong: RangeConstraint<Pyeong>,
    ) -> Self {
        Self {
            districts,
            deposit,
            monthly_rent,
            area_pyeong,
            property_type: PROPERTY_TYPE,
            transaction_type: TRANSACTION_TYPE,
        }
    }

    pub fn districts(&self) -> &DistrictSelection {
        &self.districts
    }

    pub fn deposit(&self) -> RangeConstraint<ManWon> {
        self.deposit
    }

    pub fn monthly_rent(&self) -> RangeConstraint<ManWon> {
        self.monthly_rent
    }

    pub fn area_pyeong(&self) -> RangeConstraint<Pyeong> {
        self.area_pyeong
    }

    pub fn property_type(&self) -> &'static str {
        self.property_type
    }

    pub fn transaction_type(&self) -> &'static str {
        self.transaction_type
    }

    /// Search parameters shared by every district.
    ///
    /// Area bounds are sent in square metres, widened to whole numbers so the
    /// collector never narrows the pyeong range. An unbounded maximum area is
    /// left out.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("rletTpCd", self.property_type.to_string()),
            ("tradTpCd", self.transaction_type.to_string()),
            ("wprcMin", self.deposit.min.to_string()),
            ("wprcMax", self.deposit.max.to_string()),
            ("rprcMin", self.monthly_rent.min.to_string()),
            ("rprcMax", self.monthly_rent.max.to_string()),
            ("spcMin", to_square_metres(self.area_pyeong.min).floor().to_string()),
        ];
        let max_sqm = to_square_metres(self.area_pyeong.max);
        if max_sqm.is_finite() {
            params.push(("spcMax", max_sqm.ceil().to_string()));
        }
        params
    }

    /// Per-district parameter sets, in catalogue order.
    ///
    /// Each adds the district's legal-dong code (`cortarNo`) to the shared
    /// parameters.
    pub fn district_queries(&self) -> Vec<(District, Vec<(&'static str, String)>)> {
        let shared = self.query_params();
        self.districts
            .iter()
            .map(|district| {
                let mut params = shared.clone();
                params.push(("cortarNo", format!("{}00000", district.region_code())));
                (district, params)
            })
            .collect()
    }
}

fn to_square_metres(pyeong: Pyeong) -> f64 {
    pyeong * SQUARE_METRES_PER_PYEONG
}
