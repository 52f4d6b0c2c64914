use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

pub const PARTY_SIZE_MIN: u8 = 1;
pub const PARTY_SIZE_MAX: u8 = 12;

const ANY_PARTY_SIZE: &str = "any";

// -- Request --

/// Number of travelers the quoted price assumes.
///
/// On the wire this is either a bare integer or the literal string `"any"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartySize {
    #[default]
    Any,
    Count(u8),
}

impl PartySize {
    /// Build a count clamped to `PARTY_SIZE_MIN..=PARTY_SIZE_MAX`.
    pub fn count(n: i64) -> Self {
        let clamped = n.clamp(PARTY_SIZE_MIN as i64, PARTY_SIZE_MAX as i64);
        PartySize::Count(clamped as u8)
    }

    /// Parse a form value: empty or "any" means no constraint, integers are
    /// clamped, anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY_PARTY_SIZE) {
            return Some(PartySize::Any);
        }
        value.parse::<i64>().ok().map(PartySize::count)
    }

    /// Value used for `<option value=...>` in the form.
    pub fn form_value(&self) -> String {
        match self {
            PartySize::Any => ANY_PARTY_SIZE.to_string(),
            PartySize::Count(n) => n.to_string(),
        }
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartySize::Any => write!(f, "Any"),
            PartySize::Count(1) => write!(f, "1 golfer"),
            PartySize::Count(n) => write!(f, "{} golfers", n),
        }
    }
}

impl Serialize for PartySize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PartySize::Any => serializer.serialize_str(ANY_PARTY_SIZE),
            PartySize::Count(n) => serializer.serialize_u8(*n),
        }
    }
}

impl<'de> Deserialize<'de> for PartySize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PartySizeVisitor;

        impl<'de> Visitor<'de> for PartySizeVisitor {
            type Value = PartySize;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a party size integer or \"any\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PartySize, E> {
                Ok(PartySize::count(v.min(i64::MAX as u64) as i64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PartySize, E> {
                Ok(PartySize::count(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<PartySize, E> {
                Ok(PartySize::Any)
            }

            fn visit_none<E: de::Error>(self) -> Result<PartySize, E> {
                Ok(PartySize::Any)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PartySize, E> {
                PartySize::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(PartySizeVisitor)
    }
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub max_price: u32,
    pub party_size: PartySize,
    pub location: String,
}

// -- Response --

/// Per-person price of a package: a flat amount or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Flat(u32),
    Range { min: u32, max: u32 },
}

impl Price {
    /// Sort key. A flat price is its own minimum.
    pub fn min(&self) -> u32 {
        match self {
            Price::Flat(p) => *p,
            Price::Range { min, .. } => *min,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Flat(p) => write!(f, "${} per person", p),
            Price::Range { min, max } if min == max => write!(f, "${} per person", min),
            Price::Range { min, max } => write!(f, "${} - ${} per person", min, max),
        }
    }
}

/// One course included in a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub par: u32,
    /// Length in yards
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub slope: u32,
    #[serde(default)]
    pub holes: u32,
}

/// A bookable golf trip returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolfPackage {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub price: Price,
    #[serde(default)]
    pub party_size: PartySize,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_of_rounds: u32,
    #[serde(default)]
    pub number_of_nights: u32,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
}
