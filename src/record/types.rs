//! Rating record type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tariff::Direction;
use crate::zone::Zone;

/// One rated shipment, as persisted to the quote log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Timestamp when the record was created (RFC3339 string)
    pub timestamp: String,

    /// Declared weight in kg
    pub weight_kg: f64,

    /// Billable weight in kg (actual or volumetric, whichever is greater)
    pub effective_weight_kg: f64,

    /// Parcel dimensions as given, e.g. "50x45x40"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Country the shipment was rated against
    pub destination_country: String,

    /// Transport direction
    pub direction: Direction,

    /// Premium service applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_service: Option<String>,

    /// Zone the country resolved to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,

    /// Quoted cost in `currency`
    pub cost: f64,

    /// Quoted cost in the tariff's base currency
    pub cost_in_base_currency: f64,

    /// Currency code of `cost`
    pub currency: String,
}

impl RatingRecord {
    /// Create a record for a quote in the tariff's base currency.
    pub fn new(
        weight_kg: f64,
        destination_country: &str,
        direction: Direction,
        cost: f64,
        base_currency: &str,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            weight_kg,
            effective_weight_kg: weight_kg,
            dimensions: None,
            destination_country: destination_country.to_string(),
            direction,
            premium_service: None,
            zone: None,
            cost,
            cost_in_base_currency: cost,
            currency: base_currency.to_string(),
        }
    }

    /// Set the converted quote.
    pub fn with_converted_cost(mut self, cost: f64, currency: &str) -> Self {
        self.cost = cost;
        self.currency = currency.to_string();
        self
    }

    /// Set the billable weight.
    pub fn with_effective_weight(mut self, weight_kg: f64) -> Self {
        self.effective_weight_kg = weight_kg;
        self
    }

    /// Set the resolved zone.
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Set the parcel dimensions.
    pub fn with_dimensions(mut self, dimensions: &str) -> Self {
        self.dimensions = Some(dimensions.to_string());
        self
    }

    /// Set the premium service.
    pub fn with_premium_service(mut self, name: &str) -> Self {
        self.premium_service = Some(name.to_string());
        self
    }

    /// Convert to CSV line.
    pub fn to_csv_line(&self) -> String {
        let fields = vec![
            self.timestamp.clone(),
            self.weight_kg.to_string(),
            self.effective_weight_kg.to_string(),
            self.dimensions.clone().unwrap_or_default(),
            self.destination_country.clone(),
            self.direction.to_string(),
            self.premium_service.clone().unwrap_or_default(),
            self.zone.map(|z| z.to_string()).unwrap_or_default(),
            self.cost.to_string(),
            self.cost_in_base_currency.to_string(),
            self.currency.clone(),
        ];

        // Escape commas and quotes
        fields
            .into_iter()
            .map(|f| {
                if f.contains(',') || f.contains('"') || f.contains('\n') {
                    format!("\"{}\"", f.replace('"', "\"\""))
                } else {
                    f
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// CSV header.
    pub fn csv_header() -> &'static str {
        "timestamp,weight_kg,effective_weight_kg,dimensions,destination_country,direction,premium_service,zone,cost,cost_in_base_currency,currency"
    }

    /// Get timestamp as DateTime.
    pub fn timestamp_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = RatingRecord::new(5.0, "France", Direction::Export, 140.0, "MAD")
            .with_zone(1)
            .with_premium_service("Premium 12:00");

        assert_eq!(record.weight_kg, 5.0);
        assert_eq!(record.effective_weight_kg, 5.0);
        assert_eq!(record.cost, 140.0);
        assert_eq!(record.cost_in_base_currency, 140.0);
        assert_eq!(record.currency, "MAD");
        assert_eq!(record.zone, Some(1));
        assert!(record.timestamp_datetime().is_some());
    }

    #[test]
    fn test_converted_cost_keeps_base() {
        let record = RatingRecord::new(5.0, "France", Direction::Export, 140.0, "MAD")
            .with_converted_cost(13.33, "USD");

        assert_eq!(record.cost, 13.33);
        assert_eq!(record.currency, "USD");
        assert_eq!(record.cost_in_base_currency, 140.0);
    }

    #[test]
    fn test_csv_output() {
        let record = RatingRecord::new(5.0, "France", Direction::Export, 140.0, "MAD")
            .with_dimensions("50x45x40")
            .with_effective_weight(18.0);

        let csv = record.to_csv_line();
        assert!(csv.contains("France"));
        assert!(csv.contains("export"));
        assert!(csv.contains("50x45x40"));
        assert_eq!(csv.split(',').count(), RatingRecord::csv_header().split(',').count());
    }

    #[test]
    fn test_csv_escaping() {
        let record = RatingRecord::new(1.0, "Bonaire, Saba", Direction::Export, 49.0, "MAD");
        let csv = record.to_csv_line();
        assert!(csv.contains("\"Bonaire, Saba\""));
    }

    #[test]
    fn test_json_serialization() {
        let record = RatingRecord::new(1.0, "France", Direction::Import, 27.0, "MAD");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"destination_country\":\"France\""));
        assert!(json.contains("\"direction\":\"import\""));
        // Unset optional fields stay out of the payload.
        assert!(!json.contains("premium_service"));
    }
}
