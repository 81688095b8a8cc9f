//! Billable weight normalization.
//!
//! Express shipments are billed on the greater of actual and volumetric
//! weight. Volumetric weight uses the standard courier divisor for
//! dimensions in centimeters: L x W x H / 5000.

use serde::{Deserialize, Serialize};

/// Divisor applied to the volume in cubic centimeters.
const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Parcel dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    /// Parse a dimensions string in "LxWxH" form, e.g. `"30x20x15"`.
    ///
    /// The separator is case-insensitive and embedded spaces are ignored.
    /// Anything malformed yields `None` rather than an error; dimension
    /// inputs are untrusted and a bad value simply means no volumetric
    /// weight is applied.
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        let cleaned = s.replace(' ', "").replace('X', "x");
        let mut parts = cleaned.split('x');

        let length_cm = parts.next()?.parse().ok()?;
        let width_cm = parts.next()?.parse().ok()?;
        let height_cm = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            length_cm,
            width_cm,
            height_cm,
        })
    }

    /// Volumetric weight in kg.
    pub fn volumetric_weight(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm / VOLUMETRIC_DIVISOR
    }
}

/// Billable weight: the greater of the actual and volumetric weight.
pub fn effective_weight(actual_kg: f64, dimensions: Dimensions) -> f64 {
    actual_kg.max(dimensions.volumetric_weight())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumetric_weight() {
        assert_eq!(Dimensions::new(50.0, 45.0, 40.0).volumetric_weight(), 18.0);
        assert_eq!(Dimensions::new(30.0, 20.0, 15.0).volumetric_weight(), 1.8);
    }

    #[test]
    fn test_effective_weight_volumetric_dominates() {
        let dims = Dimensions::new(50.0, 45.0, 40.0);
        assert_eq!(effective_weight(10.0, dims), 18.0);
    }

    #[test]
    fn test_effective_weight_actual_dominates() {
        let dims = Dimensions::new(50.0, 45.0, 40.0);
        assert_eq!(effective_weight(25.0, dims), 25.0);
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(
            Dimensions::parse("30x20x15"),
            Some(Dimensions::new(30.0, 20.0, 15.0))
        );
    }

    #[test]
    fn test_parse_uppercase_separator() {
        assert_eq!(
            Dimensions::parse("30X20X15"),
            Some(Dimensions::new(30.0, 20.0, 15.0))
        );
    }

    #[test]
    fn test_parse_embedded_spaces() {
        assert_eq!(
            Dimensions::parse(" 30 x 20 X 15 "),
            Some(Dimensions::new(30.0, 20.0, 15.0))
        );
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(
            Dimensions::parse("30.5x20x15"),
            Some(Dimensions::new(30.5, 20.0, 15.0))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Dimensions::parse(""), None);
        assert_eq!(Dimensions::parse("bad"), None);
        assert_eq!(Dimensions::parse("30x20"), None);
        assert_eq!(Dimensions::parse("30x20x15x5"), None);
        assert_eq!(Dimensions::parse("30xZx15"), None);
    }
}
