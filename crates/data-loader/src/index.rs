//! ListingSet loading and indexing logic.
//!
//! A `ListingSet` owns the listings produced by one collection run, in
//! registration order, plus a per-district index for quick lookups.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// An ordered, in-memory set of listings.
#[derive(Debug, Clone, Default)]
pub struct ListingSet {
    listings: Vec<Listing>,
    /// Positions in `listings` for each district
    district_index: HashMap<District, Vec<usize>>,
    next_sequence: SequenceIndex,
}

impl ListingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from listings that already carry sequence indices.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut set = Self::new();
        set.replace_all(listings);
        set
    }

    /// Load a listing CSV file.
    ///
    /// Steps:
    /// 1. Open and parse the file
    /// 2. Build the district index
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let listings = parser::parse_listings(BufReader::new(file), &label)?;

        tracing::info!("Loaded {} listings from {}", listings.len(), path.display());

        let set = Self::from_listings(listings);
        set.validate()?;
        Ok(set)
    }

    /// Append a newly collected listing, assigning the next sequence index.
    pub fn insert(
        &mut self,
        district: District,
        deposit: ManWon,
        monthly_rent: ManWon,
        area_pyeong: Pyeong,
        naver_link: impl Into<String>,
    ) -> &Listing {
        let listing = Listing::new(
            self.next_sequence,
            district,
            deposit,
            monthly_rent,
            area_pyeong,
            naver_link,
        );
        let position = self.listings.len();
        self.push(listing);
        &self.listings[position]
    }

    /// Replace the entire dataset.
    pub fn replace_all(&mut self, listings: Vec<Listing>) {
        self.listings.clear();
        self.district_index.clear();
        self.next_sequence = 0;
        for listing in listings {
            self.push(listing);
        }
    }

    fn push(&mut self, listing: Listing) {
        self.district_index
            .entry(listing.district)
            .or_insert_with(Vec::new)
            .push(self.listings.len());
        self.next_sequence = self.next_sequence.max(listing.sequence_index.saturating_add(1));
        self.listings.push(listing);
    }

    /// All listings in insertion order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Districts that have at least one listing.
    pub fn districts(&self) -> BTreeSet<District> {
        self.district_index.keys().copied().collect()
    }

    /// Listings in one district, in insertion order.
    pub fn get_by_district(&self, district: District) -> Vec<&Listing> {
        self.district_index
            .get(&district)
            .map(|positions| positions.iter().map(|&i| &self.listings[i]).collect())
            .unwrap_or_default()
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every area is finite and non-negative
    /// - Sequence indices are unique
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .listings
            .par_iter()
            .find_any(|l| !l.area_pyeong.is_finite() || l.area_pyeong < 0.0)
        {
            return Err(DataLoadError::InvalidValue {
                field: "area_pyeong".to_string(),
                value: bad.area_pyeong.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(self.listings.len());
        for listing in &self.listings {
            if !seen.insert(listing.sequence_index) {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate sequence_index {}",
                    listing.sequence_index
                )));
            }
        }
        Ok(())
    }
}
