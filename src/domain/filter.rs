// src/domain/filter.rs

use crate::domain::listing::{Area, Listing, ParseTagError, PropertyType};
use std::collections::HashMap;
use std::fmt;

/// Inclusive range over annualized prices. `max = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub const ANY: PriceRange = PriceRange { min: 0, max: None };

    pub fn at_least(min: u64) -> Self {
        Self { min, max: None }
    }

    /// Bounded range; rejects `min > max`.
    pub fn bounded(min: u64, max: u64) -> Result<Self, InvalidFilter> {
        if min > max {
            return Err(InvalidFilter::InvertedRange { min, max });
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::ANY
    }
}

/// Preset ranges offered by the filter panel, quoted per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    Any,
    UnderOneMillion,
    OneToThreeMillion,
    ThreeToFiveMillion,
    AboveFiveMillion,
}

impl PriceBand {
    pub const ALL: [PriceBand; 5] = [
        PriceBand::Any,
        PriceBand::UnderOneMillion,
        PriceBand::OneToThreeMillion,
        PriceBand::ThreeToFiveMillion,
        PriceBand::AboveFiveMillion,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PriceBand::Any => "any",
            PriceBand::UnderOneMillion => "under-1m",
            PriceBand::OneToThreeMillion => "1m-3m",
            PriceBand::ThreeToFiveMillion => "3m-5m",
            PriceBand::AboveFiveMillion => "above-5m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBand::Any => "Any Price",
            PriceBand::UnderOneMillion => "Under ₦1M/yr",
            PriceBand::OneToThreeMillion => "₦1M - ₦3M/yr",
            PriceBand::ThreeToFiveMillion => "₦3M - ₦5M/yr",
            PriceBand::AboveFiveMillion => "Above ₦5M/yr",
        }
    }

    pub fn range(self) -> PriceRange {
        match self {
            PriceBand::Any => PriceRange::ANY,
            PriceBand::UnderOneMillion => PriceRange {
                min: 0,
                max: Some(1_000_000),
            },
            PriceBand::OneToThreeMillion => PriceRange {
                min: 1_000_000,
                max: Some(3_000_000),
            },
            PriceBand::ThreeToFiveMillion => PriceRange {
                min: 3_000_000,
                max: Some(5_000_000),
            },
            PriceBand::AboveFiveMillion => PriceRange::at_least(5_000_000),
        }
    }

    pub fn from_key(key: &str) -> Result<Self, InvalidFilter> {
        PriceBand::ALL
            .into_iter()
            .find(|band| band.key() == key)
            .ok_or_else(|| {
                InvalidFilter::Tag(ParseTagError {
                    kind: "price band",
                    value: key.to_string(),
                })
            })
    }

    /// The preset whose range equals `range`, if any.
    pub fn matching(range: &PriceRange) -> Option<Self> {
        PriceBand::ALL
            .into_iter()
            .find(|band| band.range() == *range)
    }
}

/// Why a set of filter parameters could not become a `FilterSpec`.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidFilter {
    Tag(ParseTagError),
    Number { field: &'static str, value: String },
    InvertedRange { min: u64, max: u64 },
}

impl fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidFilter::Tag(e) => write!(f, "{e}"),
            InvalidFilter::Number { field, value } => {
                write!(f, "{field} must be a whole number, got {value:?}")
            }
            InvalidFilter::InvertedRange { min, max } => {
                write!(f, "minimum price {min} is above maximum price {max}")
            }
        }
    }
}

impl std::error::Error for InvalidFilter {}

impl From<ParseTagError> for InvalidFilter {
    fn from(e: ParseTagError) -> Self {
        InvalidFilter::Tag(e)
    }
}

pub const ALL_AREAS: &str = "All Areas";
pub const ALL_TYPES: &str = "All Types";

/// One listing search. Built fresh per request and never mutated.
///
/// `None` for `area` or `property_type` means that dimension is inactive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub query: String,
    pub area: Option<Area>,
    pub property_type: Option<PropertyType>,
    pub price_range: PriceRange,
    pub verified_only: bool,
}

impl FilterSpec {
    /// Builds a spec from query-string parameters.
    ///
    /// Recognized keys: `q`, `area`, `type`, `price` (band key), `min`, `max`,
    /// `verified`. Explicit `min`/`max` override the band. Unknown area or
    /// type tags are rejected rather than silently matching nothing.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, InvalidFilter> {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let area = match get("area") {
            None | Some(ALL_AREAS) => None,
            Some(tag) => Some(tag.parse::<Area>()?),
        };

        let property_type = match get("type") {
            None | Some(ALL_TYPES) => None,
            Some(tag) => Some(tag.parse::<PropertyType>()?),
        };

        let band = match get("price") {
            Some(key) => PriceBand::from_key(key)?.range(),
            None => PriceRange::ANY,
        };

        let min = match get("min") {
            Some(v) => parse_amount("min", v)?,
            None => band.min,
        };
        let max = match get("max") {
            Some(v) => Some(parse_amount("max", v)?),
            None => band.max,
        };
        let price_range = match max {
            Some(max) => PriceRange::bounded(min, max)?,
            None => PriceRange::at_least(min),
        };

        let verified_only = matches!(get("verified"), Some("true" | "on" | "1"));

        Ok(FilterSpec {
            query: get("q").unwrap_or_default().to_string(),
            area,
            property_type,
            price_range,
            verified_only,
        })
    }

    /// Whether any panel filter differs from the default. The free-text
    /// query lives outside the panel and is not counted.
    ///
    /// Any price floor counts, so "Above ₦5M/yr" is active even though its
    /// maximum stays unbounded.
    pub fn has_active_filters(&self) -> bool {
        self.area.is_some()
            || self.property_type.is_some()
            || !self.price_range.is_unconstrained()
            || self.verified_only
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_query(listing)
            && self.area.map_or(true, |area| area == listing.area)
            && self
                .property_type
                .map_or(true, |t| t == listing.property_type)
            && self.price_range.contains(listing.annualized_price())
            && (!self.verified_only || listing.verified)
    }

    fn matches_query(&self, listing: &Listing) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();

        [
            listing.title.as_str(),
            listing.location.as_str(),
            listing.property_type.tag(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keeps the listings matching every active criterion, in catalog order.
pub fn evaluate<'a, I>(catalog: I, spec: &FilterSpec) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    catalog
        .into_iter()
        .filter(|listing| spec.matches(listing))
        .collect()
}

fn parse_amount(field: &'static str, value: &str) -> Result<u64, InvalidFilter> {
    value
        .replace(',', "")
        .parse::<u64>()
        .map_err(|_| InvalidFilter::Number {
            field,
            value: value.to_string(),
        })
}
