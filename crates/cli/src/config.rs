//! Configuration for the rent-radar CLI.
//!
//! Loaded from a TOML file (default `rent-radar.toml` in the working
//! directory). Every section and field is optional; missing values fall back
//! to the defaults below. Command-line flags override the file.
//!
//! ```toml
//! data_path = "data/listings.csv"
//!
//! [collection]
//! districts = ["강남구", "마포구"]
//! deposit = { min = 0, max = 2000 }
//! per_district_estimate = 400
//!
//! [reference]
//! area_pyeong = { min = 20.0, max = inf }
//! ```

use anyhow::Context;
use collector::CollectionRequestBuilder;
use data_loader::{District, ManWon, Pyeong};
use pipeline::{DistrictSelection, FilterCriteria, RangeConstraint, SortKey};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rent-radar.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listing CSV used by `results` and `stats`
    pub data_path: PathBuf,
    pub collection: CollectionConfig,
    pub results: ResultsConfig,
    /// Criteria listings are checked against in compliance reports
    pub reference: ReferenceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/listings.csv"),
            collection: CollectionConfig::default(),
            results: ResultsConfig::default(),
            reference: ReferenceConfig::default(),
        }
    }
}

/// Defaults for the `collect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub districts: DistrictSelection,
    pub per_district_estimate: usize,
    pub deposit: RangeConstraint<ManWon>,
    pub monthly_rent: RangeConstraint<ManWon>,
    pub area_pyeong: RangeConstraint<Pyeong>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            districts: [District::Gangnam].into_iter().collect(),
            per_district_estimate: CollectionRequestBuilder::PER_DISTRICT_ESTIMATE,
            deposit: RangeConstraint::new(0, 2000),
            monthly_rent: RangeConstraint::new(0, 130),
            area_pyeong: RangeConstraint::new(20.0, 100.0),
        }
    }
}

/// Defaults for the `results` command.
///
/// There is no district default here: results show every district present in
/// the data unless `--district` narrows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    pub sort: SortKey,
    /// Rows printed; the export file always gets every row
    pub limit: usize,
    pub deposit: RangeConstraint<ManWon>,
    pub monthly_rent: RangeConstraint<ManWon>,
    pub area_pyeong: RangeConstraint<Pyeong>,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::RegistrationOrder,
            limit: 20,
            deposit: RangeConstraint::new(0, 10_000),
            monthly_rent: RangeConstraint::new(0, 1_000),
            area_pyeong: RangeConstraint::new(20.0, 100.0),
        }
    }
}

/// Reference criteria for compliance: deposit ≤ 2000, rent ≤ 130 and at
/// least 20 pyeong, in any district.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub districts: DistrictSelection,
    pub deposit: RangeConstraint<ManWon>,
    pub monthly_rent: RangeConstraint<ManWon>,
    pub area_pyeong: RangeConstraint<Pyeong>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            districts: DistrictSelection::all(),
            deposit: RangeConstraint::new(0, 2000),
            monthly_rent: RangeConstraint::new(0, 130),
            area_pyeong: RangeConstraint::new(20.0, f64::INFINITY),
        }
    }
}

impl ReferenceConfig {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.districts.clone(),
            self.deposit,
            self.monthly_rent,
            self.area_pyeong,
        )
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// An explicitly given path must exist. Without one, `rent-radar.toml`
    /// is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("Config file not found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration, then apply environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `RENT_RADAR_DATA`: listing CSV path
    /// - `RENT_RADAR_PER_DISTRICT_ESTIMATE`: per-district collection estimate
    pub fn load_with_env(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;

        if let Ok(val) = std::env::var("RENT_RADAR_DATA") {
            tracing::debug!("Override data_path from env: {}", val);
            config.data_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("RENT_RADAR_PER_DISTRICT_ESTIMATE") {
            let estimate = val
                .parse()
                .with_context(|| format!("RENT_RADAR_PER_DISTRICT_ESTIMATE is not a number: {val}"))?;
            tracing::debug!("Override per_district_estimate from env: {}", estimate);
            config.collection.per_district_estimate = estimate;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
