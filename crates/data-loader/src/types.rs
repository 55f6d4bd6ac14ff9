//! Core domain types for rental listings.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - Type aliases for the units the listing fields are measured in
//! - The fixed set of districts a listing can belong to
//! - The immutable `Listing` record itself

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================
// These keep the units visible in signatures

/// Money in units of 10,000 KRW (만원). Used for both deposit and monthly rent.
pub type ManWon = u32;

/// Floor area in pyeong (평).
pub type Pyeong = f64;

/// Registration order assigned when a listing enters a listing set.
pub type SequenceIndex = u64;

/// Square metres per pyeong.
pub const SQUARE_METRES_PER_PYEONG: f64 = 3.3058;

// =============================================================================
// District
// =============================================================================

/// The 25 autonomous districts (구) of Seoul.
///
/// Serialized and parsed using the Korean district name, e.g. `"강남구"`.
/// `Ord` follows declaration order, which is the conventional 가나다 ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum District {
    #[serde(rename = "강남구")]
    Gangnam,
    #[serde(rename = "강동구")]
    Gangdong,
    #[serde(rename = "강북구")]
    Gangbuk,
    #[serde(rename = "강서구")]
    Gangseo,
    #[serde(rename = "관악구")]
    Gwanak,
    #[serde(rename = "광진구")]
    Gwangjin,
    #[serde(rename = "구로구")]
    Guro,
    #[serde(rename = "금천구")]
    Geumcheon,
    #[serde(rename = "노원구")]
    Nowon,
    #[serde(rename = "도봉구")]
    Dobong,
    #[serde(rename = "동대문구")]
    Dongdaemun,
    #[serde(rename = "동작구")]
    Dongjak,
    #[serde(rename = "마포구")]
    Mapo,
    #[serde(rename = "서대문구")]
    Seodaemun,
    #[serde(rename = "서초구")]
    Seocho,
    #[serde(rename = "성동구")]
    Seongdong,
    #[serde(rename = "성북구")]
    Seongbuk,
    #[serde(rename = "송파구")]
    Songpa,
    #[serde(rename = "양천구")]
    Yangcheon,
    #[serde(rename = "영등포구")]
    Yeongdeungpo,
    #[serde(rename = "용산구")]
    Yongsan,
    #[serde(rename = "은평구")]
    Eunpyeong,
    #[serde(rename = "종로구")]
    Jongno,
    #[serde(rename = "중구")]
    Jung,
    #[serde(rename = "중랑구")]
    Jungnang,
}

impl District {
    /// Every district, in declaration order.
    pub const ALL: [District; 25] = [
        District::Gangnam,
        District::Gangdong,
        District::Gangbuk,
        District::Gangseo,
        District::Gwanak,
        District::Gwangjin,
        District::Guro,
        District::Geumcheon,
        District::Nowon,
        District::Dobong,
        District::Dongdaemun,
        District::Dongjak,
        District::Mapo,
        District::Seodaemun,
        District::Seocho,
        District::Seongdong,
        District::Seongbuk,
        District::Songpa,
        District::Yangcheon,
        District::Yeongdeungpo,
        District::Yongsan,
        District::Eunpyeong,
        District::Jongno,
        District::Jung,
        District::Jungnang,
    ];

    /// Korean name of the district, as it appears in collected data.
    pub fn name(self) -> &'static str {
        match self {
            District::Gangnam => "강남구",
            District::Gangdong => "강동구",
            District::Gangbuk => "강북구",
            District::Gangseo => "강서구",
            District::Gwanak => "관악구",
            District::Gwangjin => "광진구",
            District::Guro => "구로구",
            District::Geumcheon => "금천구",
            District::Nowon => "노원구",
            District::Dobong => "도봉구",
            District::Dongdaemun => "동대문구",
            District::Dongjak => "동작구",
            District::Mapo => "마포구",
            District::Seodaemun => "서대문구",
            District::Seocho => "서초구",
            District::Seongdong => "성동구",
            District::Seongbuk => "성북구",
            District::Songpa => "송파구",
            District::Yangcheon => "양천구",
            District::Yeongdeungpo => "영등포구",
            District::Yongsan => "용산구",
            District::Eunpyeong => "은평구",
            District::Jongno => "종로구",
            District::Jung => "중구",
            District::Jungnang => "중랑구",
        }
    }

    /// Administrative region code used by public data sources.
    pub fn region_code(self) -> &'static str {
        match self {
            District::Gangnam => "11680",
            District::Gangdong => "11740",
            District::Gangbuk => "11305",
            District::Gangseo => "11500",
            District::Gwanak => "11620",
            District::Gwangjin => "11215",
            District::Guro => "11530",
            District::Geumcheon => "11545",
            District::Nowon => "11350",
            District::Dobong => "11320",
            District::Dongdaemun => "11230",
            District::Dongjak => "11590",
            District::Mapo => "11440",
            District::Seodaemun => "11410",
            District::Seocho => "11650",
            District::Seongdong => "11200",
            District::Seongbuk => "11290",
            District::Songpa => "11710",
            District::Yangcheon => "11470",
            District::Yeongdeungpo => "11560",
            District::Yongsan => "11170",
            District::Eunpyeong => "11380",
            District::Jongno => "11110",
            District::Jung => "11140",
            District::Jungnang => "11260",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name one of the 25 districts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown district: {0}")]
pub struct UnknownDistrict(pub String);

impl FromStr for District {
    type Err = UnknownDistrict;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        District::ALL
            .iter()
            .copied()
            .find(|district| district.name() == trimmed)
            .ok_or_else(|| UnknownDistrict(s.to_string()))
    }
}

// =============================================================================
// Listing
// =============================================================================

/// A single collected rental listing.
///
/// Listings are never mutated after collection. A listing set changes only by
/// replacing it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub district: District,
    /// Refundable deposit (보증금)
    pub deposit: ManWon,
    /// Monthly rent (월세)
    pub monthly_rent: ManWon,
    pub area_pyeong: Pyeong,
    pub naver_link: String,
    /// Position in the collector's output; defines registration order
    pub sequence_index: SequenceIndex,
}

impl Listing {
    pub fn new(
        sequence_index: SequenceIndex,
        district: District,
        deposit: ManWon,
        monthly_rent: ManWon,
        area_pyeong: Pyeong,
        naver_link: impl Into<String>,
    ) -> Self {
        Self {
            district,
            deposit,
            monthly_rent,
            area_pyeong,
            naver_link: naver_link.into(),
            sequence_index,
        }
    }

    /// Floor area converted to square metres.
    pub fn area_sqm(&self) -> f64 {
        self.area_pyeong * SQUARE_METRES_PER_PYEONG
    }
}
