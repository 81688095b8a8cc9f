use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use shiprate::currency::ExchangeRates;
use shiprate::pricing::Calculator;
use shiprate::record::{FileRecordWriter, RatingRecord, RecordFormat, RecordWriter};
use shiprate::route::parse_route;
use shiprate::tariff::{Direction, Tariff};
use shiprate::telemetry::{init_tracing, TracingConfig};
use shiprate::weight::{effective_weight, Dimensions};

#[derive(Parser, Debug)]
#[command(name = "shiprate")]
#[command(author, version, about = "International parcel rating engine")]
struct Cli {
    /// Path to a tariff YAML file (defaults to the built-in rate card)
    #[arg(short, long, value_name = "FILE", global = true)]
    tariff: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate a single shipment
    Quote(QuoteArgs),
    /// Rate a multi-leg route expression
    Route(RouteArgs),
    /// Show the zones a country rates in
    Zones {
        /// Country name
        country: String,
    },
    /// List every country the tariff knows
    Countries,
    /// List premium and special services
    Services,
    /// Dump the active tariff as YAML
    DumpTariff,
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Weight in kg
    weight: f64,

    /// Country the shipment rates against
    country: String,

    /// Transport direction
    #[arg(short, long, default_value = "export")]
    direction: Direction,

    /// Parcel dimensions as "LxWxH" in cm
    #[arg(long)]
    dimensions: Option<String>,

    /// Premium service name, e.g. "Premium 9:00"
    #[arg(long)]
    premium: Option<String>,

    /// Currency to quote in
    #[arg(short, long, default_value = "MAD")]
    currency: String,

    /// Append the quote to a record file (.csv for CSV, else JSON lines)
    #[arg(long, value_name = "FILE")]
    record: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Weight in kg
    weight: f64,

    /// Route expression, e.g. "UK -> Maroc -> Turkey"
    route: String,

    /// Parcel dimensions as "LxWxH" in cm
    #[arg(long)]
    dimensions: Option<String>,

    /// Premium service for the delivery leg
    #[arg(long)]
    premium: Option<String>,

    /// Currency to quote in
    #[arg(short, long, default_value = "MAD")]
    currency: String,

    /// Append the quote to a record file (.csv for CSV, else JSON lines)
    #[arg(long, value_name = "FILE")]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    init_tracing(&TracingConfig {
        log_level: log_level.to_string(),
        ..TracingConfig::default()
    })?;

    let tariff = match &cli.tariff {
        Some(path) => Tariff::load(path)?,
        None => Tariff::builtin(),
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        currency = %tariff.currency,
        countries = tariff.countries().len(),
        "tariff loaded"
    );

    let calc = Calculator::new(Arc::new(tariff));
    let rates = ExchangeRates::default();

    match cli.command {
        Command::Quote(args) => quote(&calc, &rates, &args, cli.json),
        Command::Route(args) => route(&calc, &rates, &args, cli.json),
        Command::Zones { country } => zones(&calc, &country, cli.json),
        Command::Countries => countries(&calc, cli.json),
        Command::Services => services(&calc, cli.json),
        Command::DumpTariff => dump_tariff(&calc),
    }
}

fn quote(calc: &Calculator, rates: &ExchangeRates, args: &QuoteArgs, json: bool) -> Result<()> {
    let dimensions = parse_dimensions(args.dimensions.as_deref());
    let effective_kg = match dimensions {
        Some(dims) => effective_weight(args.weight, dims),
        None => args.weight,
    };

    let base_cost = calc.price_leg(
        effective_kg,
        &args.country,
        args.direction,
        args.premium.as_deref(),
    )?;
    let cost = rates.convert(base_cost, &args.currency)?;
    let zone = calc.zone_for(&args.country, args.direction);
    let base_currency = calc.tariff().currency.clone();

    if json {
        let payload = serde_json::json!({
            "weight_kg": args.weight,
            "effective_weight_kg": effective_kg,
            "country": args.country,
            "direction": args.direction,
            "zone": zone,
            "cost": cost,
            "currency": args.currency,
            "cost_in_base_currency": base_cost,
            "base_currency": base_currency,
            "exchange_rate": rates.rate(&args.currency).unwrap_or(1.0),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{} ({}) -> zone {}", args.country, args.direction, zone);
        println!("billable weight: {:.2} kg", effective_kg);
        println!("cost: {:.2} {}", cost, args.currency);
    }

    if let Some(path) = &args.record {
        let mut record = RatingRecord::new(
            args.weight,
            &args.country,
            args.direction,
            base_cost,
            &base_currency,
        )
        .with_effective_weight(effective_kg)
        .with_zone(zone)
        .with_converted_cost(cost, &args.currency);

        if let Some(dims) = &args.dimensions {
            record = record.with_dimensions(dims);
        }
        if let Some(premium) = &args.premium {
            record = record.with_premium_service(premium);
        }

        write_record(path, &record)?;
    }

    Ok(())
}

fn route(calc: &Calculator, rates: &ExchangeRates, args: &RouteArgs, json: bool) -> Result<()> {
    let legs = parse_route(&args.route)?;
    let dimensions = parse_dimensions(args.dimensions.as_deref());
    let quote = calc.price_route(&legs, args.weight, dimensions, args.premium.as_deref());

    let total = rates.convert(quote.total_cost, &args.currency)?;
    let base_currency = quote.currency.clone();

    if json {
        let payload = serde_json::json!({
            "route": args.route,
            "weight_kg": args.weight,
            "effective_weight_kg": quote.effective_weight_kg,
            "legs": &quote.legs,
            "total_cost": total,
            "currency": args.currency,
            "total_in_base_currency": quote.total_cost,
            "base_currency": base_currency,
            "exchange_rate": rates.rate(&args.currency).unwrap_or(1.0),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for leg in &quote.legs {
            match &leg.error {
                Some(err) => println!(
                    "leg {}: {} -> {} failed: {}",
                    leg.leg, leg.origin_country, leg.destination_country, err
                ),
                None => println!(
                    "leg {}: {} -> {} ({}, zone {}) {:.2} {}",
                    leg.leg,
                    leg.origin_country,
                    leg.destination_country,
                    leg.direction,
                    leg.zone.unwrap_or_default(),
                    leg.cost,
                    leg.currency
                ),
            }
        }
        println!("billable weight: {:.2} kg", quote.effective_weight_kg);
        println!("total: {:.2} {}", total, args.currency);
    }

    if let Some(path) = &args.record {
        if let Some(last) = legs.last() {
            let mut record = RatingRecord::new(
                args.weight,
                &last.destination_country,
                last.direction,
                quote.total_cost,
                &base_currency,
            )
            .with_effective_weight(quote.effective_weight_kg)
            .with_converted_cost(total, &args.currency);

            if let Some(dims) = &args.dimensions {
                record = record.with_dimensions(dims);
            }
            if let Some(premium) = &args.premium {
                record = record.with_premium_service(premium);
            }

            write_record(path, &record)?;
        }
    }

    Ok(())
}

fn zones(calc: &Calculator, country: &str, json: bool) -> Result<()> {
    let export_zone = calc.zone_for(country, Direction::Export);
    let import_zone = calc.zone_for(country, Direction::Import);

    if json {
        let payload = serde_json::json!({
            "country": country,
            "export_zone": export_zone,
            "import_zone": import_zone,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{}: export zone {}, import zone {}",
            country, export_zone, import_zone
        );
    }

    Ok(())
}

fn countries(calc: &Calculator, json: bool) -> Result<()> {
    let countries = calc.tariff().countries();

    if json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
    } else {
        for country in &countries {
            println!("{}", country);
        }
    }

    Ok(())
}

fn services(calc: &Calculator, json: bool) -> Result<()> {
    let tariff = calc.tariff();

    if json {
        let payload = serde_json::json!({
            "currency": tariff.currency,
            "premium_services": &tariff.premium_services,
            "special_services": &tariff.special_services,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for service in &tariff.premium_services {
            println!(
                "{}: {:.2} {} per shipment",
                service.name, service.surcharge, tariff.currency
            );
        }
        for service in &tariff.special_services {
            println!(
                "{}: {:.2} {} per kg",
                service.name, service.per_kg, tariff.currency
            );
        }
    }

    Ok(())
}

fn dump_tariff(calc: &Calculator) -> Result<()> {
    print!("{}", calc.tariff().to_yaml()?);
    Ok(())
}

fn parse_dimensions(input: Option<&str>) -> Option<Dimensions> {
    let input = input?;
    match Dimensions::parse(input) {
        Some(dims) => Some(dims),
        None => {
            warn!(dimensions = input, "ignoring malformed dimensions");
            None
        }
    }
}

fn write_record(path: &Path, record: &RatingRecord) -> Result<()> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => RecordFormat::Csv,
        _ => RecordFormat::Json,
    };

    let writer = FileRecordWriter::new("quotes", path.to_path_buf(), format);
    writer
        .write(record)
        .with_context(|| format!("failed to write record to {}", path.display()))?;
    writer.flush().context("failed to flush record file")?;

    Ok(())
}
