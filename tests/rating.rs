//! End-to-end rating tests against the built-in rate card.
//!
//! Run with: cargo test --test rating

use std::sync::Arc;

use shiprate::currency::ExchangeRates;
use shiprate::pricing::{Calculator, Leg};
use shiprate::route::parse_route;
use shiprate::tariff::{Direction, RateTable, Tariff, WeightTier};
use shiprate::weight::Dimensions;
use shiprate::zone::{ZoneEntry, ZoneTable};

fn calculator() -> Calculator {
    Calculator::new(Arc::new(Tariff::builtin()))
}

#[test]
fn test_export_tier_prices() {
    let calc = calculator();
    let price = |kg| calc.price_leg(kg, "France", Direction::Export, None).unwrap();

    assert_eq!(price(0.5), 26.0);
    // 0.6 kg bills at the 1 kg tier.
    assert_eq!(price(0.6), 50.0);
    assert_eq!(price(5.0), 140.0);
    // 35 kg bills at the 40 kg tier.
    assert_eq!(price(35.0), 1845.0);
    assert_eq!(price(70.0), 3165.0);
}

#[test]
fn test_import_tier_prices() {
    let calc = calculator();

    assert_eq!(
        calc.price_leg(0.5, "France", Direction::Import, None).unwrap(),
        15.0
    );
    assert_eq!(
        calc.price_leg(5.0, "France", Direction::Import, None).unwrap(),
        141.0
    );
    assert_eq!(
        calc.price_leg(5.0, "UK", Direction::Import, None).unwrap(),
        209.0
    );
}

#[test]
fn test_export_overage() {
    let calc = calculator();
    let price = |kg| calc.price_leg(kg, "France", Direction::Export, None).unwrap();

    // Above 70 kg: 10 kg tier price plus per-kg for every kg above 10.
    assert_eq!(price(70.5), 3247.0);
    assert_eq!(price(100.0), 4545.0);
}

#[test]
fn test_unknown_country_rates_fallback_zone() {
    let calc = calculator();

    assert_eq!(calc.zone_for("Atlantis", Direction::Export), 7);
    assert_eq!(
        calc.price_leg(200.0, "Atlantis", Direction::Export, None).unwrap(),
        17799.0
    );
}

#[test]
fn test_uk_to_morocco_to_turkey() {
    let calc = calculator();
    let rates = ExchangeRates::default();

    let legs = parse_route("UK->Maroc->Turkey").unwrap();
    assert_eq!(legs[0].direction, Direction::Import);
    assert_eq!(legs[1].direction, Direction::Export);

    let quote = calc.price_route(&legs, 200.0, None, None);
    assert_eq!(quote.legs[0].cost, 17709.0);
    assert_eq!(quote.legs[0].zone, Some(4));
    assert_eq!(quote.legs[1].cost, 14550.0);
    assert_eq!(quote.legs[1].zone, Some(3));
    assert_eq!(quote.total_cost, 32259.0);

    assert_eq!(rates.convert(quote.total_cost, "USD").unwrap(), 3072.29);
    assert_eq!(rates.convert(quote.total_cost, "EUR").unwrap(), 2973.18);
}

#[test]
fn test_premium_applies_to_delivery_leg() {
    let calc = calculator();

    let legs = parse_route("UK -> Maroc -> Turquie").unwrap();
    let quote = calc.price_route(&legs, 5.0, None, Some("Premium 9:00"));

    assert_eq!(quote.legs[0].cost, 209.0);
    assert_eq!(quote.legs[1].cost, 554.5);
    assert_eq!(quote.total_cost, 763.5);
}

#[test]
fn test_volumetric_weight_end_to_end() {
    let calc = calculator();

    let dims = Dimensions::parse("50 X 45 X 40").unwrap();
    let legs = vec![Leg::new("Maroc", "France", Direction::Export)];
    let quote = calc.price_route(&legs, 2.0, Some(dims), None);

    // 50x45x40 / 5000 = 18 kg volumetric, billed at the 18 kg tier.
    assert_eq!(quote.effective_weight_kg, 18.0);
    assert_eq!(quote.total_cost, 865.0);
}

#[test]
fn test_zone_resolution_quirks() {
    let calc = calculator();
    let export = |c| calc.zone_for(c, Direction::Export);
    let import = |c| calc.zone_for(c, Direction::Import);

    // "Ukraine" contains "UK" and sits ahead of the alias block.
    assert_eq!(export("UK"), 4);
    assert_eq!(import("UK"), 4);
    assert_eq!(export("United Kingdom"), 3);
    assert_eq!(export("Allemagne"), 10);
    assert_eq!(import("Allemagne"), 1);
    assert_eq!(export("Istanbul"), 3);
    assert_eq!(export("Maroc"), 1);

    // Substring matching keeps the first hit: "Niger" shadows "Nigeria"
    // outbound, "Nigeria" shadows "Niger" inbound.
    assert_eq!(export("Nigeria"), 9);
    assert_eq!(import("Nigeria"), 7);
    assert_eq!(import("Niger"), 7);

    // "Congo" wins over the explicit "Congo RD" entry.
    assert_eq!(export("Congo RD"), 7);

    // "Samoa Américaines" sits earlier than "Samoa" in the import map.
    assert_eq!(export("Samoa"), 8);
    assert_eq!(import("Samoa"), 5);

    // Case-insensitive; unknown names fall back to zone 7.
    assert_eq!(export("FRANCE"), export("france"));
    assert_eq!(export("Atlantis"), 7);

    // An empty query matches the first entry.
    assert_eq!(export(""), 1);
}

#[test]
fn test_quotes_carry_two_decimals() {
    let calc = calculator();

    for weight in [0.5, 3.3, 17.0, 71.3, 123.45] {
        for country in ["France", "UK", "Etats-Unis", "Australie", "Atlantis"] {
            for direction in [Direction::Export, Direction::Import] {
                let cost = calc.price_leg(weight, country, direction, None).unwrap();
                let scaled = cost * 100.0;
                assert!(
                    (scaled - scaled.round()).abs() < 1e-9,
                    "{} kg to {} {}: {} not on a cent boundary",
                    weight,
                    country,
                    direction,
                    cost
                );
            }
        }
    }
}

#[test]
fn test_rating_is_deterministic() {
    let calc = calculator();

    let first = calc.price_leg(42.0, "Japon", Direction::Export, None).unwrap();
    let second = calc.price_leg(42.0, "Japon", Direction::Export, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_partial_route_failure() {
    // A one-zone tariff leaves the default fallback zone 7 unpriceable.
    let rates = RateTable {
        tiers: vec![WeightTier {
            max_kg: 10.0,
            prices: vec![100.0],
        }],
        overage: vec![],
        overage_base_kg: 10.0,
    };
    let tariff = Tariff {
        currency: "MAD".to_string(),
        export: rates.clone(),
        import: rates,
        export_zones: ZoneTable::new(vec![ZoneEntry::new("Xanadu", 1)]),
        import_zones: ZoneTable::new(vec![ZoneEntry::new("Xanadu", 1)]),
        premium_services: vec![],
        special_services: vec![],
    };
    let calc = Calculator::new(Arc::new(tariff));

    let legs = vec![
        Leg::new("Maroc", "Xanadu", Direction::Export),
        Leg::new("Maroc", "Narnia", Direction::Export),
    ];
    let quote = calc.price_route(&legs, 5.0, None, None);

    assert!(quote.legs[0].is_ok());
    assert_eq!(quote.legs[0].cost, 100.0);

    assert!(!quote.legs[1].is_ok());
    assert_eq!(quote.legs[1].cost, 0.0);
    assert_eq!(quote.legs[1].zone, None);
    assert!(quote.legs[1]
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("invalid zone"));

    assert_eq!(quote.total_cost, 100.0);
}

#[test]
fn test_load_tariff_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tariff.yaml");

    std::fs::write(&path, Tariff::builtin().to_yaml().unwrap()).unwrap();

    let tariff = Tariff::load(&path).unwrap();
    let calc = Calculator::new(Arc::new(tariff));
    assert_eq!(
        calc.price_leg(5.0, "France", Direction::Export, None).unwrap(),
        140.0
    );
}

#[test]
fn test_service_catalog() {
    let tariff = Tariff::builtin();

    assert_eq!(tariff.premium_surcharge("Premium 9:00"), Some(374.5));
    assert_eq!(tariff.premium_surcharge("Premium 10:30"), Some(107.0));
    assert_eq!(tariff.premium_surcharge("Premium 12:00"), Some(53.5));

    assert_eq!(tariff.special_services[0].name, "GoGreen Plus - Carbon Reduced");
    assert_eq!(tariff.special_services[0].per_kg, 5.89);
}

#[test]
fn test_country_catalog() {
    let tariff = Tariff::builtin();
    let countries = tariff.countries();

    assert!(countries.iter().any(|c| c == "France"));
    assert!(countries.iter().any(|c| c == "Maroc"));
    assert!(countries.iter().any(|c| c == "United Kingdom"));

    let mut sorted = countries.clone();
    sorted.sort();
    assert_eq!(countries, sorted);
}
