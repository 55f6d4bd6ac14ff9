//! Immutable filter criteria passed between the filter, stats and collection
//! stages.

use crate::error::{CriteriaError, ValidationErrors};
use crate::range::{Dimension, RangeConstraint};
use data_loader::{District, ManWon, Pyeong};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of acceptable districts.
///
/// As a results filter an empty selection matches nothing. Building a
/// collection request requires at least one district.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictSelection(BTreeSet<District>);

impl DistrictSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every district in the catalogue.
    pub fn all() -> Self {
        District::ALL.iter().copied().collect()
    }

    pub fn contains(&self, district: District) -> bool {
        self.0.contains(&district)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Districts in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = District> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<District> for DistrictSelection {
    fn from_iter<I: IntoIterator<Item = District>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeSet<District>> for DistrictSelection {
    fn from(districts: BTreeSet<District>) -> Self {
        Self(districts)
    }
}

/// Districts plus the three numeric ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub districts: DistrictSelection,
    pub deposit: RangeConstraint<ManWon>,
    pub monthly_rent: RangeConstraint<ManWon>,
    pub area_pyeong: RangeConstraint<Pyeong>,
}

impl FilterCriteria {
    pub fn new(
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
        }
    }

    /// First inverted range, checked in deposit, rent, area order.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        match range_errors(&self.deposit, &self.monthly_rent, &self.area_pyeong)
            .into_iter()
            .next()
        {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every inverted range at once.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::check(range_errors(
            &self.deposit,
            &self.monthly_rent,
            &self.area_pyeong,
        ))
    }
}

/// Run all three range checks without stopping at the first failure.
pub fn range_errors(
    deposit: &RangeConstraint<ManWon>,
    monthly_rent: &RangeConstraint<ManWon>,
    area_pyeong: &RangeConstraint<Pyeong>,
) -> Vec<CriteriaError> {
    [
        deposit.validate(Dimension::Deposit),
        monthly_rent.validate(Dimension::MonthlyRent),
        area_pyeong.validate(Dimension::Area),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(deposit: (u32, u32), rent: (u32, u32), area: (f64, f64)) -> FilterCriteria {
        FilterCriteria::new(
            DistrictSelection::all(),
            RangeConstraint::new(deposit.0, deposit.1),
            RangeConstraint::new(rent.0, rent.1),
            RangeConstraint::new(area.0, area.1),
        )
    }

    #[test]
    fn test_validate_reports_first_inverted_range() {
        let c = criteria((0, 2000), (130, 50), (50.0, 20.0));
        assert_eq!(c.validate().unwrap_err().dimension(), Some(Dimension::MonthlyRent));
    }

    #[test]
    fn test_validate_all_reports_every_range() {
        let c = criteria((2000, 500), (130, 50), (50.0, 20.0));
        let errors = c.validate_all().unwrap_err();
        let dims: Vec<_> = errors.iter().filter_map(|e| e.dimension()).collect();
        assert_eq!(dims, vec![Dimension::Deposit, Dimension::MonthlyRent, Dimension::Area]);
    }

    #[test]
    fn test_valid_criteria() {
        let c = criteria((500, 2000), (50, 130), (20.0, 50.0));
        assert!(c.validate().is_ok());
        assert!(c.validate_all().is_ok());
    }

    #[test]
    fn test_selection_all_and_empty() {
        assert_eq!(DistrictSelection::all().len(), 25);
        assert!(DistrictSelection::new().is_empty());
        let selection: DistrictSelection = [District::Mapo, District::Gangnam].into_iter().collect();
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![District::Gangnam, District::Mapo]
        );
    }
}
