//! Shipment rating.
//!
//! - Single-leg pricing against tiered rate tables
//! - Anchored per-kg overage above the tabulated weights
//! - Multi-leg journeys billed at one effective weight
//! - Premium surcharges on the delivery leg

mod calculator;
mod multi_leg;

pub use calculator::{round_to_cents, Calculator, PricingError};
pub use multi_leg::{Leg, LegQuote, RouteQuote};
