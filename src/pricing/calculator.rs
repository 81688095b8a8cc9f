//! Single-leg rating against a tariff.

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::tariff::{Direction, Tariff};
use crate::zone::Zone;

/// Errors surfaced while rating a shipment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    #[error("invalid weight: {0} kg (must be positive)")]
    InvalidWeight(f64),

    #[error("invalid zone {zone} for {direction} (tariff covers zones 1-{max_zone})")]
    InvalidZone {
        zone: Zone,
        direction: Direction,
        max_zone: Zone,
    },
}

/// Rates shipments against an immutable tariff.
///
/// Cheap to clone; swap the `Arc` to roll out a new tariff.
#[derive(Debug, Clone)]
pub struct Calculator {
    tariff: Arc<Tariff>,
}

impl Calculator {
    pub fn new(tariff: Arc<Tariff>) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Zone a country rates in for a direction.
    pub fn zone_for(&self, country: &str, direction: Direction) -> Zone {
        self.tariff.zones(direction).resolve(country)
    }

    /// Rate a single leg in the tariff currency.
    ///
    /// Weight is billed at the smallest tier ceiling at or above it; above
    /// the tabulated tiers the anchored per-kg overage applies. A premium
    /// service adds its flat surcharge; unknown service names are ignored.
    /// The result carries two decimals.
    pub fn price_leg(
        &self,
        weight_kg: f64,
        country: &str,
        direction: Direction,
        premium_service: Option<&str>,
    ) -> Result<f64, PricingError> {
        if weight_kg <= 0.0 || weight_kg.is_nan() {
            return Err(PricingError::InvalidWeight(weight_kg));
        }

        let zone = self.zone_for(country, direction);
        let rates = self.tariff.rates(direction);
        let max_zone = self.tariff.max_zone(direction);

        if zone == 0 || zone > max_zone {
            return Err(PricingError::InvalidZone {
                zone,
                direction,
                max_zone,
            });
        }

        let base = if weight_kg <= rates.max_tier_kg() {
            rates.base_price(weight_kg, zone)
        } else {
            rates.overage_price(weight_kg, zone)
        }
        .ok_or(PricingError::InvalidZone {
            zone,
            direction,
            max_zone,
        })?;

        let surcharge = premium_service
            .and_then(|name| self.tariff.premium_surcharge(name))
            .unwrap_or(0.0);

        let total = round_to_cents(base + surcharge);

        debug!(
            weight_kg,
            country,
            direction = %direction,
            zone,
            total,
            "leg rated"
        );

        Ok(total)
    }
}

/// Round a monetary amount to two decimals, half away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
