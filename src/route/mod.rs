//! Route expressions and direction inference.
//!
//! - Chained journeys: "UK -> Maroc -> Turkey" or "UK | Maroc | Turkey"
//! - Explicit pairs: "UK:Maroc, Maroc:Turkey"
//! - Comma chains: "UK, Maroc, Turkey"
//! - Legs touching the home market rate as import or export accordingly

use thiserror::Error;

use crate::pricing::Leg;
use crate::tariff::Direction;

/// Spellings the home market answers to, matched exactly after trimming
/// and lowercasing.
const BASE_COUNTRIES: &[&str] = &[
    "maroc",
    "morocco",
    "ma",
    "mar",
    "royaume du maroc",
    "kingdom of morocco",
];

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteParseError {
    #[error("route is empty")]
    Empty,

    #[error("unrecognized route: {0:?}")]
    InvalidRoute(String),
}

/// True when the name is one of the home market spellings.
pub fn is_base_country(country: &str) -> bool {
    let needle = country.trim().to_lowercase();
    BASE_COUNTRIES.iter().any(|c| *c == needle)
}

/// Direction of a leg relative to the home market. Legs touching the home
/// market on neither or both ends rate as exports.
pub fn determine_direction(origin: &str, destination: &str) -> Direction {
    if !is_base_country(origin) && is_base_country(destination) {
        Direction::Import
    } else {
        Direction::Export
    }
}

/// Parse a route expression into legs with inferred directions.
///
/// Separators are tried in order: "->" chains, "|" chains, "origin:dest"
/// pairs split on commas, then a plain comma chain. Pair lists skip parts
/// without a colon. Stop names are trimmed.
pub fn parse_route(route: &str) -> Result<Vec<Leg>, RouteParseError> {
    let route = route.trim();
    if route.is_empty() {
        return Err(RouteParseError::Empty);
    }

    let legs = if route.contains("->") {
        chain_legs(route.split("->"))
    } else if route.contains('|') {
        chain_legs(route.split('|'))
    } else if route.contains(':') {
        route
            .split(',')
            .filter_map(|part| part.trim().split_once(':'))
            .map(|(origin, destination)| make_leg(origin, destination))
            .collect()
    } else {
        chain_legs(route.split(','))
    };

    if legs.is_empty() {
        return Err(RouteParseError::InvalidRoute(route.to_string()));
    }

    Ok(legs)
}

fn chain_legs<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<Leg> {
    let stops: Vec<&str> = parts.map(str::trim).collect();
    stops
        .windows(2)
        .map(|pair| make_leg(pair[0], pair[1]))
        .collect()
}

fn make_leg(origin: &str, destination: &str) -> Leg {
    let origin = origin.trim();
    let destination = destination.trim();
    Leg::new(origin, destination, determine_direction(origin, destination))
}
