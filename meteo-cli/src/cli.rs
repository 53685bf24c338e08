use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use meteo_core::provider::ObservationSource;
use meteo_core::{Config, Location, OpenMeteo, map_fields};
use tracing::info;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Current weather reports from Open-Meteo")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current observations and print the report.
    Report {
        /// Latitude in decimal degrees.
        #[arg(long, requires = "longitude", allow_negative_numbers = true)]
        latitude: Option<f64>,

        /// Longitude in decimal degrees.
        #[arg(long, requires = "latitude", allow_negative_numbers = true)]
        longitude: Option<f64>,

        /// Name shown in the report header.
        #[arg(long)]
        label: Option<String>,
    },

    /// Save a default location for `meteo report`.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Report { latitude, longitude, label } => {
                run_report(latitude, longitude, label).await
            }
            Command::Configure => run_configure(),
        }
    }
}

async fn run_report(
    latitude: Option<f64>,
    longitude: Option<f64>,
    label: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let location = resolve_location(latitude, longitude, label, &config)?;

    let source = OpenMeteo::new();
    let doc = source
        .fetch_current(&location)
        .await
        .context("Failed to fetch current observations from Open-Meteo")?;

    let report = map_fields(doc.as_str());
    print!("{}", render::render_report(&location, &report, doc.fetched_at()));

    Ok(())
}

fn run_configure() -> Result<()> {
    let mut config = Config::load()?;

    let latitude = CustomType::<f64>::new("Default latitude:")
        .with_help_message("Decimal degrees, -90 to 90")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Default longitude:")
        .with_help_message("Decimal degrees, -180 to 180")
        .prompt()?;
    let label = Text::new("Location label:").with_placeholder("New York City").prompt()?;

    let location = validated(Location::new(latitude, longitude, label))?;
    config.set_default_location(location);
    config.save()?;

    println!("Saved default location to {}", Config::config_file_path()?.display());

    Ok(())
}

/// Pick the location to report on: explicit flags win, then the saved
/// default, then the built-in fallback city.
fn resolve_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    label: Option<String>,
    config: &Config,
) -> Result<Location> {
    let mut location = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Location::new(lat, lon, format!("{lat:.4}, {lon:.4}")),
        _ => config.default_location.clone().unwrap_or_else(|| {
            info!("no coordinates given and none configured, using the built-in default");
            Location::default_city()
        }),
    };

    if let Some(label) = label {
        location.label = label;
    }

    validated(location)
}

fn validated(location: Location) -> Result<Location> {
    ensure!(
        (-90.0..=90.0).contains(&location.latitude),
        "Latitude {} is outside -90..=90",
        location.latitude
    );
    ensure!(
        (-180.0..=180.0).contains(&location.longitude),
        "Longitude {} is outside -180..=180",
        location.longitude
    );

    Ok(location)
}
