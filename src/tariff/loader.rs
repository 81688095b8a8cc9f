use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::types::{RateTable, Tariff};
use crate::zone::ZoneTable;

impl Tariff {
    /// Load a tariff from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        debug!(path = %path.display(), "loading tariff");

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read tariff file: {}", path.display()))?;

        Self::from_yaml(&contents)
            .with_context(|| format!("failed to parse tariff file: {}", path.display()))
    }

    /// Parse a tariff from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let tariff: Tariff = serde_yaml::from_str(yaml).context("failed to parse YAML tariff")?;

        tariff.validate()?;

        Ok(tariff)
    }

    /// Serialize the tariff to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize tariff")
    }

    /// Validate tariff tables
    pub fn validate(&self) -> Result<()> {
        if self.currency.is_empty() {
            anyhow::bail!("tariff currency must not be empty");
        }

        validate_rates("export", &self.export)?;
        validate_rates("import", &self.import)?;
        validate_zones("export", &self.export_zones, self.export.zone_count())?;
        validate_zones("import", &self.import_zones, self.import.zone_count())?;

        info!("tariff validated successfully");
        Ok(())
    }
}

fn validate_rates(name: &str, table: &RateTable) -> Result<()> {
    // Ensure at least one tier is defined
    if table.tiers.is_empty() {
        anyhow::bail!("{} rate table must have at least one tier", name);
    }

    let width = table.tiers[0].prices.len();
    if width == 0 {
        anyhow::bail!("{} rate table must price at least one zone", name);
    }

    // Tier ceilings must be positive and strictly ascending, rows rectangular
    let mut prev_kg = 0.0;
    for tier in &table.tiers {
        if tier.max_kg <= prev_kg {
            anyhow::bail!(
                "{} tier ceilings must be positive and ascending: {} kg after {} kg",
                name,
                tier.max_kg,
                prev_kg
            );
        }
        prev_kg = tier.max_kg;

        if tier.prices.len() != width {
            anyhow::bail!(
                "{} tier {} kg has {} zone prices, expected {}",
                name,
                tier.max_kg,
                tier.prices.len(),
                width
            );
        }

        if tier.prices.iter().any(|p| *p < 0.0) {
            anyhow::bail!("{} tier {} kg has a negative price", name, tier.max_kg);
        }
    }

    // Overage bands must be well-formed and match the table width
    for band in &table.overage {
        if band.from_kg > band.to_kg {
            anyhow::bail!(
                "{} overage band {}-{} kg is inverted",
                name,
                band.from_kg,
                band.to_kg
            );
        }

        if band.per_kg.len() != width {
            anyhow::bail!(
                "{} overage band {}-{} kg has {} zone rates, expected {}",
                name,
                band.from_kg,
                band.to_kg,
                band.per_kg.len(),
                width
            );
        }

        if band.per_kg.iter().any(|r| *r < 0.0) {
            anyhow::bail!(
                "{} overage band {}-{} kg has a negative rate",
                name,
                band.from_kg,
                band.to_kg
            );
        }
    }

    // Overage pricing extrapolates from the anchor tier, which must exist
    if !table.overage.is_empty() && !table.tiers.iter().any(|t| t.max_kg == table.overage_base_kg)
    {
        anyhow::bail!(
            "{} overage is anchored on a {} kg tier that does not exist",
            name,
            table.overage_base_kg
        );
    }

    Ok(())
}

fn validate_zones(name: &str, zones: &ZoneTable, zone_count: usize) -> Result<()> {
    for entry in &zones.entries {
        let zone = usize::from(entry.zone);
        if zone == 0 || zone > zone_count {
            anyhow::bail!(
                "{} zone map entry '{}' references zone {} outside 1-{}",
                name,
                entry.country,
                entry.zone,
                zone_count
            );
        }
    }

    let fallback = usize::from(zones.fallback_zone);
    if fallback == 0 || fallback > zone_count {
        anyhow::bail!(
            "{} fallback zone {} outside 1-{}",
            name,
            zones.fallback_zone,
            zone_count
        );
    }

    Ok(())
}
