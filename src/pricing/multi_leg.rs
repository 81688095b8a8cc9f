//! Multi-leg journeys rated at a single effective weight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calculator::{round_to_cents, Calculator};
use crate::tariff::Direction;
use crate::weight::{effective_weight, Dimensions};
use crate::zone::Zone;

/// One transport leg of a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub origin_country: String,
    pub destination_country: String,
    pub direction: Direction,
}

impl Leg {
    pub fn new(origin: &str, destination: &str, direction: Direction) -> Self {
        Self {
            origin_country: origin.to_string(),
            destination_country: destination.to_string(),
            direction,
        }
    }

    /// Country whose zone the leg rates against: the destination when
    /// exporting, the origin when importing.
    pub fn rated_country(&self) -> &str {
        match self.direction {
            Direction::Export => &self.destination_country,
            Direction::Import => &self.origin_country,
        }
    }
}

/// Outcome of rating one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegQuote {
    /// 1-based position in the journey
    pub leg: usize,
    pub origin_country: String,
    pub destination_country: String,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    pub cost: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LegQuote {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Rated journey across one or more legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuote {
    pub total_cost: f64,
    pub currency: String,
    pub effective_weight_kg: f64,
    pub legs: Vec<LegQuote>,
}

impl Calculator {
    /// Rate a journey leg by leg.
    ///
    /// The billable weight is fixed once for the whole journey, as the
    /// greater of actual and volumetric weight. A premium service applies
    /// to the final leg only. A leg that fails to rate contributes zero
    /// and carries its error; the remaining legs still rate.
    pub fn price_route(
        &self,
        legs: &[Leg],
        weight_kg: f64,
        dimensions: Option<Dimensions>,
        premium_service: Option<&str>,
    ) -> RouteQuote {
        let effective_kg = match dimensions {
            Some(dims) => effective_weight(weight_kg, dims),
            None => weight_kg,
        };

        let currency = self.tariff().currency.clone();
        let mut quotes = Vec::with_capacity(legs.len());
        let mut total = 0.0;

        for (i, leg) in legs.iter().enumerate() {
            let premium = if i + 1 == legs.len() {
                premium_service
            } else {
                None
            };
            let country = leg.rated_country();

            let quote = match self.price_leg(effective_kg, country, leg.direction, premium) {
                Ok(cost) => {
                    total += cost;
                    LegQuote {
                        leg: i + 1,
                        origin_country: leg.origin_country.clone(),
                        destination_country: leg.destination_country.clone(),
                        direction: leg.direction,
                        zone: Some(self.zone_for(country, leg.direction)),
                        cost,
                        currency: currency.clone(),
                        error: None,
                    }
                }
                Err(e) => LegQuote {
                    leg: i + 1,
                    origin_country: leg.origin_country.clone(),
                    destination_country: leg.destination_country.clone(),
                    direction: leg.direction,
                    zone: None,
                    cost: 0.0,
                    currency: currency.clone(),
                    error: Some(e.to_string()),
                },
            };
            quotes.push(quote);
        }

        let total_cost = round_to_cents(total);

        debug!(
            legs = legs.len(),
            effective_kg, total_cost, "route rated"
        );

        RouteQuote {
            total_cost,
            currency,
            effective_weight_kg: effective_kg,
            legs: quotes,
        }
    }
}
