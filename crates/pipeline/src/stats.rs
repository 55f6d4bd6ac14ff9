//! Summary statistics over listing sequences.
//!
//! ## Components
//! - `summarize`: count plus mean/stddev/min/max per numeric field
//! - `district_counts`: listings per district
//! - `compliance_report`: how many listings meet a reference criteria set
//!
//! With no listings there is nothing to summarize: per-field statistics are
//! `None` rather than NaN.

use crate::criteria::FilterCriteria;
use crate::error::CriteriaError;
use crate::filter_pipeline::FilterPipeline;
use data_loader::{District, Listing};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Statistics for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub mean: f64,
    /// Sample standard deviation; 0.0 for a single value
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldSummary {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let stddev = if values.len() > 1 {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / (count - 1.0)).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self { mean, stddev, min, max })
    }
}

/// Count and per-field statistics for a listing sequence.
///
/// Callers should check `count` before reading the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub count: usize,
    pub deposit: Option<FieldSummary>,
    pub monthly_rent: Option<FieldSummary>,
    pub area_pyeong: Option<FieldSummary>,
}

pub fn summarize(listings: &[Listing]) -> ListingSummary {
    let deposits: Vec<f64> = listings.iter().map(|l| f64::from(l.deposit)).collect();
    let rents: Vec<f64> = listings.iter().map(|l| f64::from(l.monthly_rent)).collect();
    let areas: Vec<f64> = listings.iter().map(|l| l.area_pyeong).collect();

    ListingSummary {
        count: listings.len(),
        deposit: FieldSummary::from_values(&deposits),
        monthly_rent: FieldSummary::from_values(&rents),
        area_pyeong: FieldSummary::from_values(&areas),
    }
}

/// Listings per district. Districts with no listings are omitted.
pub fn district_counts(listings: &[Listing]) -> BTreeMap<District, usize> {
    let mut counts = BTreeMap::new();
    for listing in listings {
        *counts.entry(listing.district).or_insert(0) += 1;
    }
    counts
}

/// The two halves of a compliance partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCategory {
    Compliant,
    NonCompliant,
}

impl ComplianceCategory {
    pub fn label(self) -> &'static str {
        match self {
            ComplianceCategory::Compliant => "조건 부합",
            ComplianceCategory::NonCompliant => "조건 미충족",
        }
    }
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many listings meet a reference criteria set.
///
/// `compliant + non_compliant` always equals the number of listings examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub compliant: usize,
    pub non_compliant: usize,
}

impl ComplianceReport {
    pub fn total(&self) -> usize {
        self.compliant + self.non_compliant
    }

    pub fn count(&self, category: ComplianceCategory) -> usize {
        match category {
            ComplianceCategory::Compliant => self.compliant,
            ComplianceCategory::NonCompliant => self.non_compliant,
        }
    }

    /// Category → count, for charting.
    pub fn as_map(&self) -> BTreeMap<ComplianceCategory, usize> {
        BTreeMap::from([
            (ComplianceCategory::Compliant, self.compliant),
            (ComplianceCategory::NonCompliant, self.non_compliant),
        ])
    }

    /// Percentage of compliant listings; `None` when there are none at all.
    pub fn compliance_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.compliant as f64 / total as f64 * 100.0),
        }
    }
}

/// Partition `listings` by whether they pass `reference`.
///
/// Uses the same pipeline as `filter_listings`, so a listing counts as
/// compliant exactly when filtering would keep it.
pub fn compliance_report(
    listings: &[Listing],
    reference: &FilterCriteria,
) -> Result<ComplianceReport, CriteriaError> {
    let pipeline = FilterPipeline::from_criteria(reference)?;

    let compliant = listings
        .par_iter()
        .filter(|listing| pipeline.matches(listing))
        .count();

    let report = ComplianceReport {
        compliant,
        non_compliant: listings.len() - compliant,
    };
    tracing::debug!(
        "Compliance: {} of {} listings meet the reference criteria",
        report.compliant,
        report.total()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::DistrictSelection;
    use crate::range::RangeConstraint;

    fn listings() -> Vec<Listing> {
        vec![
            Listing::new(0, District::Gangnam, 1000, 80, 30.0, "https://l1"),
            Listing::new(1, District::Mapo, 2500, 60, 25.0, "https://l2"),
            Listing::new(2, District::Yongsan, 800, 90, 30.0, "https://l3"),
            Listing::new(3, District::Gangnam, 1500, 120, 45.0, "https://l4"),
        ]
    }

    fn reference() -> FilterCriteria {
        FilterCriteria::new(
            DistrictSelection::all(),
            RangeConstraint::new(0, 2000),
            RangeConstraint::new(0, 130),
            RangeConstraint::new(20.0, f64::INFINITY),
        )
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&listings());
        assert_eq!(summary.count, 4);

        let deposit = summary.deposit.unwrap();
        assert_eq!(deposit.mean, 1450.0);
        assert_eq!(deposit.min, 800.0);
        assert_eq!(deposit.max, 2500.0);
        // sample variance of [1000, 2500, 800, 1500] is 576_666.67
        assert!((deposit.stddev - 759.3857).abs() < 1e-3);

        let area = summary.area_pyeong.unwrap();
        assert_eq!(area.mean, 32.5);
        assert_eq!(area.max, 45.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.deposit.is_none());
        assert!(summary.monthly_rent.is_none());
        assert!(summary.area_pyeong.is_none());
    }

    #[test]
    fn test_summarize_single() {
        let summary = summarize(&listings()[..1]);
        let rent = summary.monthly_rent.unwrap();
        assert_eq!(rent.mean, 80.0);
        assert_eq!(rent.stddev, 0.0);
    }

    #[test]
    fn test_district_counts() {
        let counts = district_counts(&listings());
        assert_eq!(counts.get(&District::Gangnam), Some(&2));
        assert_eq!(counts.get(&District::Mapo), Some(&1));
        assert_eq!(counts.get(&District::Yongsan), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_compliance_report() {
        let report = compliance_report(&listings(), &reference()).unwrap();
        // only the Mapo listing exceeds the deposit limit
        assert_eq!(report.compliant, 3);
        assert_eq!(report.non_compliant, 1);
        assert_eq!(report.total(), 4);
        assert_eq!(report.compliance_rate(), Some(75.0));
        assert_eq!(report.as_map()[&ComplianceCategory::NonCompliant], 1);
    }

    #[test]
    fn test_compliance_report_empty() {
        let report = compliance_report(&[], &reference()).unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(report.compliance_rate(), None);
    }

    #[test]
    fn test_compliance_report_rejects_inverted_reference() {
        let mut bad = reference();
        bad.monthly_rent = RangeConstraint::new(130, 0);
        assert!(compliance_report(&listings(), &bad).is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ComplianceCategory::Compliant.to_string(), "조건 부합");
        assert_eq!(ComplianceCategory::NonCompliant.to_string(), "조건 미충족");
    }
}
