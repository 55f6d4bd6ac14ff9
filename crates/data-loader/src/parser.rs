//! Parser for listing CSV files.
//!
//! The collector writes one row per listing with (at least) these columns:
//!
//! ```text
//! district,deposit,monthly_rent,area_pyeong,naver_link
//! 강남구,1000,80,30.2,https://new.land.naver.com/...
//! ```
//!
//! Extra columns are ignored. Numeric columns written by spreadsheet tools
//! often carry a trailing `.0`, so integer fields accept integral floats.
//! A `sequence_index` column, as written by `export::write_listings`, keeps
//! each listing's registration position. Without it, rows are numbered in
//! file order.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::io::Read;

/// One raw CSV row, before domain checks.
#[derive(Debug, Deserialize)]
struct ListingRecord {
    district: String,
    deposit: f64,
    monthly_rent: f64,
    area_pyeong: f64,
    #[serde(default)]
    naver_link: String,
    #[serde(default)]
    sequence_index: Option<SequenceIndex>,
}

/// Parse listings from any CSV source.
///
/// `file` is only used to label errors.
pub fn parse_listings<R: Read>(reader: R, file: &str) -> Result<Vec<Listing>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut listings = Vec::new();

    for (idx, row) in csv_reader.deserialize::<ListingRecord>().enumerate() {
        // Header is line 1
        let line_no = idx + 2;
        let record = row.map_err(|e| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: e.to_string(),
        })?;

        let listing = into_listing(record, idx as SequenceIndex).map_err(|reason| {
            DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason,
            }
        })?;
        listings.push(listing);
    }

    Ok(listings)
}

fn into_listing(
    record: ListingRecord,
    sequence_index: SequenceIndex,
) -> std::result::Result<Listing, String> {
    let sequence_index = record.sequence_index.unwrap_or(sequence_index);
    let district = record
        .district
        .parse::<District>()
        .map_err(|e| e.to_string())?;

    Ok(Listing {
        district,
        deposit: parse_man_won("deposit", record.deposit)?,
        monthly_rent: parse_man_won("monthly_rent", record.monthly_rent)?,
        area_pyeong: parse_area(record.area_pyeong)?,
        naver_link: record.naver_link,
        sequence_index,
    })
}

/// Money fields must be non-negative whole numbers that fit in `ManWon`.
fn parse_man_won(field: &str, value: f64) -> std::result::Result<ManWon, String> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > ManWon::MAX as f64 {
        return Err(format!("Invalid {}: {}", field, value));
    }
    Ok(value as ManWon)
}

fn parse_area(value: f64) -> std::result::Result<Pyeong, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Invalid area_pyeong: {}", value));
    }
    // -0 becomes 0
    Ok(value + 0.0)
}
