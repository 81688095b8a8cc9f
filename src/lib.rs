//! International parcel rating engine.
//!
//! Prices shipments against a tiered rate card: per-zone prices up to
//! 70 kg, anchored per-kg overage above that, volumetric weight,
//! multi-leg journeys and currency conversion.
//!
//! ```
//! use std::sync::Arc;
//! use shiprate::pricing::Calculator;
//! use shiprate::tariff::{Direction, Tariff};
//!
//! let calc = Calculator::new(Arc::new(Tariff::builtin()));
//! let cost = calc.price_leg(5.0, "France", Direction::Export, None).unwrap();
//! assert_eq!(cost, 140.0);
//! ```

pub mod currency;
pub mod pricing;
pub mod record;
pub mod route;
pub mod tariff;
pub mod telemetry;
pub mod weight;
pub mod zone;
