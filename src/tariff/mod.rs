//! Tariff model and built-in rate card.
//!
//! - Tiered rate tables per transport direction
//! - Per-kg overage pricing above the tabulated weights
//! - Country-to-zone maps with ordered substring matching
//! - Premium and special service catalogs
//! - YAML loading and validation

mod data;
mod loader;
mod types;

pub use types::{
    Direction, OverageBand, ParseDirectionError, PremiumService, RateTable, SpecialService,
    Tariff, WeightTier,
};
