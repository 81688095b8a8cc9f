//! Currency conversion for quoted amounts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::pricing::round_to_cents;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CurrencyError {
    #[error("unsupported currency: {0}")]
    Unsupported(String),
}

/// Exchange rates quoted as base-currency units per target unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

fn default_base() -> String {
    "MAD".to_string()
}

impl Default for ExchangeRates {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert("MAD".to_string(), 1.0);
        rates.insert("EUR".to_string(), 10.85);
        rates.insert("USD".to_string(), 10.50);

        Self {
            base: default_base(),
            rates,
        }
    }
}

impl ExchangeRates {
    /// Convert an amount in the base currency to the target, rounded to
    /// two decimals. Base-to-base conversion returns the amount untouched.
    pub fn convert(&self, amount: f64, target: &str) -> Result<f64, CurrencyError> {
        if target == self.base {
            return Ok(amount);
        }

        let rate = self
            .rates
            .get(target)
            .copied()
            .filter(|r| *r != 0.0)
            .ok_or_else(|| CurrencyError::Unsupported(target.to_string()))?;

        Ok(round_to_cents(amount / rate))
    }

    /// Rate for a currency, 1.0 for the base.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        if currency == self.base {
            return Some(1.0);
        }
        self.rates.get(currency).copied()
    }
}
