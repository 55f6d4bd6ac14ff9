//! CSV export of listing sequences.
//!
//! Writes listings in the order given, so a filtered and sorted view is
//! exported exactly as displayed.

use crate::error::Result;
use crate::types::Listing;
use std::io::Write;

const HEADERS: [&str; 6] = [
    "sequence_index",
    "district",
    "deposit",
    "monthly_rent",
    "area_pyeong",
    "naver_link",
];

/// Write `listings` as CSV with a header row.
pub fn write_listings<W: Write>(writer: W, listings: &[Listing]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;

    for listing in listings {
        wtr.write_record([
            listing.sequence_index.to_string(),
            listing.district.name().to_string(),
            listing.deposit.to_string(),
            listing.monthly_rent.to_string(),
            listing.area_pyeong.to_string(),
            listing.naver_link.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_listings;
    use crate::types::District;

    #[test]
    fn test_export_keeps_given_order() {
        let listings = vec![
            Listing::new(3, District::Gangnam, 1500, 120, 45.0, "https://l4"),
            Listing::new(0, District::Gangnam, 1000, 80, 30.0, "https://l1"),
        ];

        let mut out = Vec::new();
        write_listings(&mut out, &listings).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("sequence_index,district,deposit,monthly_rent,area_pyeong,naver_link")
        );
        assert_eq!(lines.next(), Some("3,강남구,1500,120,45,https://l4"));
        assert_eq!(lines.next(), Some("0,강남구,1000,80,30,https://l1"));
    }

    #[test]
    fn test_sorted_export_loads_back_with_registration_order() {
        // Rent-descending view: registration order is 3 then 0 in the file
        let listings = vec![
            Listing::new(3, District::Gangnam, 1500, 120, 45.0, "https://l4"),
            Listing::new(0, District::Mapo, 500, 50, 20.5, "https://l1"),
        ];
        let mut out = Vec::new();
        write_listings(&mut out, &listings).unwrap();

        let parsed = parse_listings(out.as_slice(), "export.csv").unwrap();
        assert_eq!(parsed, listings);
        assert_eq!(
            parsed.iter().map(|l| l.sequence_index).collect::<Vec<_>>(),
            vec![3, 0]
        );
    }
}
