use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

/// Fixed category set a place can be tagged with.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ramen,
    Onsen,
    Hotel,
    Restaurant,
    Cafe,
    Bar,
    Attraction,
    Shop,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Ramen,
        Category::Onsen,
        Category::Hotel,
        Category::Restaurant,
        Category::Cafe,
        Category::Bar,
        Category::Attraction,
        Category::Shop,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Category::Ramen => "ramen",
            Category::Onsen => "onsen",
            Category::Hotel => "hotel",
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Bar => "bar",
            Category::Attraction => "attraction",
            Category::Shop => "shop",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ramen => "Ramen",
            Category::Onsen => "Onsen",
            Category::Hotel => "Hotel",
            Category::Restaurant => "Restaurant",
            Category::Cafe => "Cafe",
            Category::Bar => "Bar",
            Category::Attraction => "Attraction",
            Category::Shop => "Shop",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Ramen => "🍜",
            Category::Onsen => "♨️",
            Category::Hotel => "🏨",
            Category::Restaurant => "🍽️",
            Category::Cafe => "☕",
            Category::Bar => "🍺",
            Category::Attraction => "🎯",
            Category::Shop => "🛍️",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

/// Marker palette. Unknown values in stored or shared data fall back to red.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
}

impl MarkerColor {
    pub const ALL: [MarkerColor; 6] = [
        MarkerColor::Red,
        MarkerColor::Blue,
        MarkerColor::Green,
        MarkerColor::Purple,
        MarkerColor::Orange,
        MarkerColor::Yellow,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Purple => "purple",
            MarkerColor::Orange => "orange",
            MarkerColor::Yellow => "yellow",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            MarkerColor::Red => "#ef4444",
            MarkerColor::Blue => "#3b82f6",
            MarkerColor::Green => "#22c55e",
            MarkerColor::Purple => "#a855f7",
            MarkerColor::Orange => "#f97316",
            MarkerColor::Yellow => "#eab308",
        }
    }

    /// URL-escaped fill for the inline SVG pin icon.
    pub fn svg_fill(&self) -> &'static str {
        match self {
            MarkerColor::Red => "%23ef4444",
            MarkerColor::Blue => "%233b82f6",
            MarkerColor::Green => "%2322c55e",
            MarkerColor::Purple => "%23a855f7",
            MarkerColor::Orange => "%23f97316",
            MarkerColor::Yellow => "%23eab308",
        }
    }

    pub fn from_tag(tag: &str) -> Option<MarkerColor> {
        MarkerColor::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

/// A saved point of interest. Coordinates are always present; a place is
/// never constructed before geocoding succeeds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub long: f64,
    #[serde(default, deserialize_with = "lossy_category")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "lossy_color")]
    pub color: MarkerColor,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Place {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            long: self.long,
        }
    }
}

/// User-entered fields of the add-place form, before geocoding.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDraft {
    pub name: String,
    pub address: String,
    pub category: Option<Category>,
    pub color: MarkerColor,
    pub notes: Option<String>,
}

/// Wire payload of a share link.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SharedCollection {
    pub places: Vec<Place>,
    pub created: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("no results found for that address")]
    NotFound,
    #[error("geocoding request failed: {0}")]
    Network(String),
}

fn lossy_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Category::from_tag))
}

fn lossy_color<'de, D>(deserializer: D) -> Result<MarkerColor, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(MarkerColor::from_tag)
        .unwrap_or_default())
}
