use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::analyzers::{GeoFilter, HealthClassifier, SeverityClusterer, TrendForecaster};
use crate::cli::args::{Cli, Commands};
use crate::client::WaqiClient;
use crate::error::{MonitorError, Result};
use crate::models::StationReading;
use crate::settings::Settings;
use crate::utils::FetchSpinner;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = Settings::load()?;
    if let Some(token) = cli.token {
        settings.token = token;
    }

    let client = WaqiClient::new(&settings)?;

    match cli.command {
        Commands::Search { keyword } => {
            let spinner = FetchSpinner::new("Searching stations...", false);
            let results = client.search(&keyword);
            spinner.finish_and_clear();
            let results = results?;

            if results.is_empty() {
                println!("No stations found for '{}'.", keyword.trim());
                return Ok(());
            }

            println!("{} station(s) for '{}':\n", results.len(), keyword.trim());
            for station in &results {
                let aqi = station
                    .aqi
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let coords = match (station.lat, station.lon) {
                    (Some(lat), Some(lon)) => format!("({:.4}, {:.4})", lat, lon),
                    _ => "(no coordinates)".to_string(),
                };
                println!(
                    "  uid {:<8} AQI {:<5} {} {}",
                    station.uid, aqi, station.name, coords
                );
            }
        }

        Commands::Assess {
            station,
            age,
            no_forecast,
        } => {
            let spinner = FetchSpinner::new("Fetching station feed...", false);
            let reading = client.feed_by_station(station);
            spinner.finish_and_clear();

            let reading = reading.map_err(|e| match e {
                MonitorError::Api { payload } => MonitorError::InvalidInput(format!(
                    "lookup failed for station {}: {}",
                    station, payload
                )),
                other => other,
            })?;

            print_assessment(&reading, age, !no_forecast);
        }

        Commands::Nearest { lat, lon, age } => {
            let spinner = FetchSpinner::new("Fetching nearest station...", false);
            let reading = client.feed_by_geo(lat, lon);
            spinner.finish_and_clear();

            print_assessment(&reading?, age, true);
        }

        Commands::Area {
            lat,
            lon,
            delta,
            clusters,
        } => {
            let delta = delta.unwrap_or(settings.map_delta);

            let spinner = FetchSpinner::new("Fetching area stations...", false);
            let stations = client.stations_in_bounds(lat, lon, delta);
            spinner.finish_and_clear();
            let stations = stations?;

            let samples = GeoFilter::new().extract_valid(&stations);
            if samples.is_empty() {
                println!(
                    "No usable readings within {:.2} degrees of ({}, {}).",
                    delta, lat, lon
                );
                return Ok(());
            }

            println!(
                "{} of {} stations carry usable AQI readings.",
                samples.len(),
                stations.len()
            );

            let centers = SeverityClusterer::new().cluster(&samples.aqis_as_f64(), clusters)?;
            let classifier = HealthClassifier::new();

            println!("Severity levels:");
            for center in centers {
                let assessment = classifier.classify_epa(Some(center.round() as i64));
                println!(
                    "  AQI {:>6.1}  {:?} ({})",
                    center, assessment.category, assessment.color
                );
            }
        }
    }

    Ok(())
}

fn print_assessment(reading: &StationReading, age: Option<u32>, with_forecast: bool) {
    let classifier = HealthClassifier::new();

    let city = reading.city.as_deref().unwrap_or("Unknown station");
    println!("Station {} - {}", reading.uid, city);
    if let Some(observed) = reading.observed_at() {
        println!("Observed at {}", observed);
    }

    let epa = classifier.classify_epa(reading.aqi);
    let aqi = reading
        .aqi
        .map(|a| a.to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    println!("\nAQI {} - {:?} ({})", aqi, epa.category, epa.color);
    println!("{}", epa.description);
    for action in &epa.recommended_actions {
        println!("  - {}", action);
    }

    let who = classifier.classify_who_pm25(reading.pm25);
    match reading.pm25 {
        Some(pm25) => println!(
            "\nPM2.5 {:.1} ug/m3 - {} ({}): {}",
            pm25,
            who.category.label(),
            who.color,
            who.description
        ),
        None => println!("\nPM2.5 unavailable"),
    }

    if let Some(pollutant) = &reading.dominant_pollutant {
        println!("Dominant pollutant: {}", pollutant);
    }

    if let Some(age) = age {
        let advice = classifier.advise(age, reading.aqi);
        println!("\nAdvice for age {} ({}):", age, advice.band);
        println!("{}", advice.message);
        for task in &advice.tasks {
            println!("  - {}", task);
        }
    }

    if with_forecast {
        if let Some(aqi) = reading.aqi {
            let series = TrendForecaster::new().forecast(aqi);
            let rendered: Vec<String> = series.iter().map(|v| v.to_string()).collect();
            println!("\nNext 6 hours (simulated trend): {}", rendered.join(" -> "));
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aeroguard={}", default_level)));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
