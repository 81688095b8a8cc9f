use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::zone::{Zone, ZoneTable};

/// Transport direction relative to the home market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Export,
    Import,
}

/// Error parsing a direction from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown direction: {0:?} (expected \"export\" or \"import\")")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "export" => Ok(Direction::Export),
            "import" => Ok(Direction::Import),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Export => write!(f, "export"),
            Direction::Import => write!(f, "import"),
        }
    }
}

/// One tabulated weight step of a rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTier {
    /// Inclusive billable ceiling in kg
    pub max_kg: f64,

    /// Price per zone; index 0 is zone 1
    pub prices: Vec<f64>,
}

impl WeightTier {
    /// Price for a zone, if the tier covers it.
    pub fn price(&self, zone: Zone) -> Option<f64> {
        self.prices.get(usize::from(zone).checked_sub(1)?).copied()
    }
}

/// Per-kg rate band for weights above the largest tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverageBand {
    pub from_kg: f64,
    pub to_kg: f64,

    /// Per-kg rate per zone; index 0 is zone 1
    pub per_kg: Vec<f64>,
}

impl OverageBand {
    /// Per-kg rate for a zone, if the band covers it.
    pub fn rate(&self, zone: Zone) -> Option<f64> {
        self.per_kg.get(usize::from(zone).checked_sub(1)?).copied()
    }

    /// True when the weight falls inside the band. Bounds are inclusive on
    /// both ends.
    pub fn covers(&self, weight_kg: f64) -> bool {
        self.from_kg <= weight_kg && weight_kg <= self.to_kg
    }
}

/// Rate table for one transport direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Ascending weight tiers
    pub tiers: Vec<WeightTier>,

    /// Ordered per-kg bands for weights above the largest tier
    #[serde(default)]
    pub overage: Vec<OverageBand>,

    /// Tier ceiling the overage extrapolation is anchored on. The quoted
    /// carrier formula prices any over-table weight as the price of this
    /// tier plus a per-kg rate for every kg above it, regardless of how far
    /// above the table the weight is.
    #[serde(default = "default_overage_base_kg")]
    pub overage_base_kg: f64,
}

fn default_overage_base_kg() -> f64 {
    10.0
}

impl RateTable {
    /// Number of zones this table prices (width of the first tier row).
    pub fn zone_count(&self) -> usize {
        self.tiers.first().map(|t| t.prices.len()).unwrap_or(0)
    }

    /// Largest tabulated weight ceiling.
    pub fn max_tier_kg(&self) -> f64 {
        self.tiers.last().map(|t| t.max_kg).unwrap_or(0.0)
    }

    /// Price for a weight within the tabulated tiers: the smallest ceiling
    /// at or above the weight. Billing always rounds weight up to a tier.
    /// `None` for weights above the last tier (see [`overage_price`]) or
    /// zones the table does not cover.
    ///
    /// [`overage_price`]: RateTable::overage_price
    pub fn base_price(&self, weight_kg: f64, zone: Zone) -> Option<f64> {
        self.tiers
            .iter()
            .find(|t| t.max_kg >= weight_kg)?
            .price(zone)
    }

    /// Price for a weight above the largest tier: the anchor tier price
    /// plus a per-kg rate for every kg above the anchor ceiling.
    pub fn overage_price(&self, weight_kg: f64, zone: Zone) -> Option<f64> {
        let anchor = self.anchor_price(zone)?;
        let rate = self.overage_rate(weight_kg, zone)?;
        Some(anchor + (weight_kg - self.overage_base_kg) * rate)
    }

    /// Per-kg rate applicable to a weight: the first band containing it, or
    /// the last band for weights beyond the table.
    pub fn overage_rate(&self, weight_kg: f64, zone: Zone) -> Option<f64> {
        self.overage
            .iter()
            .find(|b| b.covers(weight_kg))
            .or_else(|| self.overage.last())?
            .rate(zone)
    }

    fn anchor_price(&self, zone: Zone) -> Option<f64> {
        self.tiers
            .iter()
            .find(|t| t.max_kg == self.overage_base_kg)?
            .price(zone)
    }
}

/// Flat per-shipment surcharge for an expedited delivery service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumService {
    pub name: String,
    pub surcharge: f64,
}

/// Per-kg optional service. Catalog data only; not applied during rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialService {
    pub name: String,
    pub per_kg: f64,
}

/// Complete tariff: rate tables, zone maps and service catalogs.
///
/// A tariff is immutable once constructed. Updates build a new `Tariff`
/// and swap the `Arc`, so concurrent readers never observe a partial table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    /// Currency all rates are quoted in
    #[serde(default = "default_currency")]
    pub currency: String,

    pub export: RateTable,
    pub import: RateTable,

    pub export_zones: ZoneTable,
    pub import_zones: ZoneTable,

    #[serde(default)]
    pub premium_services: Vec<PremiumService>,

    #[serde(default)]
    pub special_services: Vec<SpecialService>,
}

fn default_currency() -> String {
    "MAD".to_string()
}

impl Tariff {
    /// Rate table for a direction.
    pub fn rates(&self, direction: Direction) -> &RateTable {
        match direction {
            Direction::Export => &self.export,
            Direction::Import => &self.import,
        }
    }

    /// Zone table for a direction.
    pub fn zones(&self, direction: Direction) -> &ZoneTable {
        match direction {
            Direction::Export => &self.export_zones,
            Direction::Import => &self.import_zones,
        }
    }

    /// Highest zone the direction's rate table prices.
    pub fn max_zone(&self, direction: Direction) -> Zone {
        self.rates(direction).zone_count() as Zone
    }

    /// Surcharge for a premium service, by exact name.
    pub fn premium_surcharge(&self, name: &str) -> Option<f64> {
        self.premium_services
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.surcharge)
    }

    /// Countries known to either zone table, sorted and deduplicated.
    pub fn countries(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for entry in self
            .export_zones
            .entries
            .iter()
            .chain(self.import_zones.entries.iter())
        {
            names.insert(entry.country.as_str());
        }
        names.into_iter().map(str::to_string).collect()
    }
}
