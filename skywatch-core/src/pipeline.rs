//! Orchestration: resolve a search to concurrent upstream fetches and a
//! normalized view model.

use chrono::Local;

use crate::client::OpenMeteoClient;
use crate::config::Config;
use crate::error::WeatherError;
use crate::model::{Coordinate, Station, WeatherViewModel};
use crate::normalize::normalize;
use crate::stations;

/// Entry point used by presentation. One instance per process is plenty;
/// the underlying HTTP client pools connections.
#[derive(Debug, Clone, Default)]
pub struct WeatherService {
    client: OpenMeteoClient,
    config: Config,
}

impl WeatherService {
    pub fn new(config: Config) -> Self {
        Self {
            client: OpenMeteoClient::new(),
            config,
        }
    }

    pub fn with_client(client: OpenMeteoClient, config: Config) -> Self {
        Self { client, config }
    }

    /// City search: geocode + fetch current and forecast concurrently, fail
    /// if either leg fails. The label is the city name verbatim.
    pub async fn by_city(&self, city: &str) -> Result<WeatherViewModel, WeatherError> {
        tracing::info!(city, "weather lookup by city");

        let (current, forecast) = tokio::try_join!(
            self.client.current_by_city(city),
            self.client.forecast_by_city(city),
        )?;

        normalize(city, &current, &forecast, Local::now().naive_local())
    }

    /// Coordinate search: both fetches concurrently, coordinate label.
    pub async fn by_coordinate(&self, coord: Coordinate) -> Result<WeatherViewModel, WeatherError> {
        tracing::info!(
            latitude = coord.latitude,
            longitude = coord.longitude,
            "weather lookup by coordinate"
        );

        let (current, forecast) = tokio::try_join!(
            self.client.current_by_coordinate(coord),
            self.client.forecast_by_coordinate(coord),
        )?;

        normalize(
            &coord.display_label(),
            &current,
            &forecast,
            Local::now().naive_local(),
        )
    }

    /// Synthesize the explorable station ring around a coordinate. Purely
    /// local and infallible; independent of any in-flight weather fetch, so
    /// the caller can always treat it as supplementary.
    pub fn nearby_stations(&self, coord: Coordinate) -> Vec<Station> {
        stations::synthesize(coord, self.config.stations)
    }
}
