use clap::{Parser, Subcommand};
use skywatch_core::{Config, Coordinate, WeatherService};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Weather lookup via Open-Meteo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a city.
    City {
        /// City name, e.g. "London".
        name: String,
    },

    /// Show weather for a latitude/longitude pair.
    Coords {
        /// Latitude in degrees, -90 to 90.
        latitude: f64,

        /// Longitude in degrees, -180 to 180.
        longitude: f64,

        /// Also list the synthetic nearby sampling points.
        #[arg(long)]
        stations: bool,
    },

    /// Interactively edit the station-ring settings.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::City { name } => {
                let service = WeatherService::new(Config::load()?);
                let weather = service.by_city(&name).await?;
                output::print_weather(&weather);
            }

            Command::Coords {
                latitude,
                longitude,
                stations,
            } => {
                validate_coordinate(latitude, longitude)?;

                let service = WeatherService::new(Config::load()?);
                let coord = Coordinate::new(latitude, longitude);
                let weather = service.by_coordinate(coord).await?;
                output::print_weather(&weather);

                if stations {
                    // Supplementary output, printed only after the weather
                    // result has already been shown.
                    output::print_stations(&service.nearby_stations(coord));
                }
            }

            Command::Configure => configure()?,
        }

        Ok(())
    }
}

/// The core pipeline trusts its coordinate input; range checks live here.
fn validate_coordinate(latitude: f64, longitude: f64) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        anyhow::bail!("Latitude {latitude} is out of range: expected -90 to 90.");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        anyhow::bail!("Longitude {longitude} is out of range: expected -180 to 180.");
    }
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.stations.count = inquire::CustomType::<usize>::new("Stations on the ring:")
        .with_default(config.stations.count)
        .prompt()?;

    config.stations.radius_deg = inquire::CustomType::<f64>::new("Ring radius in degrees:")
        .with_default(config.stations.radius_deg)
        .prompt()?;

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_coordinates() {
        assert!(validate_coordinate(40.7128, -74.0060).is_ok());
        assert!(validate_coordinate(-90.0, 180.0).is_ok());
        assert!(validate_coordinate(90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = validate_coordinate(90.5, 0.0).unwrap_err();
        assert!(err.to_string().contains("Latitude"));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let err = validate_coordinate(0.0, -181.0).unwrap_err();
        assert!(err.to_string().contains("Longitude"));
    }
}
