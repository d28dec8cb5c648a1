// src/domain/listing.rs

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Error returned when a form or query value is not one of the canonical tags.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseTagError {}

/// Canonical area tags. The display label doubles as the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Area {
    Lekki,
    #[serde(rename = "Victoria Island")]
    VictoriaIsland,
    Ikoyi,
    Ikeja,
    Yaba,
    Surulere,
}

impl Area {
    pub const ALL: [Area; 6] = [
        Area::Lekki,
        Area::VictoriaIsland,
        Area::Ikoyi,
        Area::Ikeja,
        Area::Yaba,
        Area::Surulere,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Area::Lekki => "Lekki",
            Area::VictoriaIsland => "Victoria Island",
            Area::Ikoyi => "Ikoyi",
            Area::Ikeja => "Ikeja",
            Area::Yaba => "Yaba",
            Area::Surulere => "Surulere",
        }
    }
}

impl FromStr for Area {
    type Err = ParseTagError;

    /// Exact, case-sensitive match on the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::ALL
            .into_iter()
            .find(|area| area.label() == s)
            .ok_or_else(|| ParseTagError {
                kind: "area",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Duplex,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Duplex,
    ];

    /// Lowercase tag, also the text searched by free-text queries.
    pub fn tag(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Studio => "studio",
            PropertyType::Duplex => "duplex",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Studio => "Studio",
            PropertyType::Duplex => "Duplex",
        }
    }
}

impl FromStr for PropertyType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError {
                kind: "property type",
                value: s.to_string(),
            })
    }
}

/// The unit of time a listing's price is quoted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Night,
    Month,
    Year,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 3] =
        [BillingPeriod::Year, BillingPeriod::Month, BillingPeriod::Night];

    /// How many of this period make up a year (365-day year, no calendar precision).
    pub fn periods_per_year(self) -> u64 {
        match self {
            BillingPeriod::Night => 365,
            BillingPeriod::Month => 12,
            BillingPeriod::Year => 1,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            BillingPeriod::Night => "/night",
            BillingPeriod::Month => "/month",
            BillingPeriod::Year => "/year",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            BillingPeriod::Night => "night",
            BillingPeriod::Month => "month",
            BillingPeriod::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingPeriod::Night => "Per Night",
            BillingPeriod::Month => "Per Month",
            BillingPeriod::Year => "Per Year",
        }
    }
}

impl FromStr for BillingPeriod {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BillingPeriod::ALL
            .into_iter()
            .find(|p| p.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError {
                kind: "billing period",
                value: s.to_string(),
            })
    }
}

/// A rental listing as published in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Full address or area description, free text.
    pub location: String,
    pub area: Area,
    /// Whole naira, quoted per `billing_period`.
    pub price: u64,
    pub billing_period: BillingPeriod,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub verified: bool,
    pub agent_id: String,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub available_from: Option<NaiveDate>,

    // Dashboard counters
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub inquiries: u64,
}

impl Listing {
    /// Price converted to a per-year figure so listings billed in different
    /// units can share one price range.
    pub fn annualized_price(&self) -> u64 {
        self.price
            .saturating_mul(self.billing_period.periods_per_year())
    }

    /// Index into `images`, wrapping in both directions.
    pub fn image_index(&self, requested: i64) -> usize {
        if self.images.is_empty() {
            return 0;
        }
        requested.rem_euclid(self.images.len() as i64) as usize
    }
}
