//! HTTP client for the Open-Meteo forecast and geocoding APIs.
//!
//! Both APIs are free and key-less. Every operation is a single round trip;
//! failures surface as [`WeatherError`] with no retry or backoff.

use reqwest::Client;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::model::Coordinate;

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code,apparent_temperature";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const HOURLY_FIELDS: &str =
    "temperature_2m,wind_speed_10m,weather_code,precipitation_probability";

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedPlace {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodedPlace {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    // Absent entirely when there are no matches.
    #[serde(default)]
    results: Vec<GeocodedPlace>,
}

/// Raw current-conditions payload. Metric units as served upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub current: CurrentReading,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentReading {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub weather_code: i32,
    pub apparent_temperature: f64,
}

/// Raw daily + hourly forecast payload. All series within one block are
/// parallel and index-aligned when well-formed; the normalizer verifies.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailySeries,
    pub hourly: HourlySeries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
    pub weather_code: Vec<i32>,
    // Some locations omit this series.
    #[serde(default)]
    pub precipitation_probability: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    forecast_base: String,
    geocoding_base: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_base_urls(FORECAST_BASE_URL.to_owned(), GEOCODING_BASE_URL.to_owned())
    }

    /// Point the client at alternative base URLs (mock servers in tests).
    pub fn with_base_urls(forecast_base: String, geocoding_base: String) -> Self {
        Self {
            http: Client::new(),
            forecast_base,
            geocoding_base,
        }
    }

    /// Resolve a city name to its best geocoding match.
    pub async fn geocode(&self, city: &str) -> Result<GeocodedPlace, WeatherError> {
        tracing::debug!(city, "geocoding city name");

        let url = format!("{}/v1/search", self.geocoding_base);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                endpoint: "geocoding",
                status,
            });
        }

        let parsed: GeocodingResponse = res.json().await?;
        parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_owned()))
    }

    /// Fetch current conditions for a coordinate.
    pub async fn current_by_coordinate(
        &self,
        coord: Coordinate,
    ) -> Result<CurrentResponse, WeatherError> {
        tracing::debug!(
            latitude = coord.latitude,
            longitude = coord.longitude,
            "fetching current conditions"
        );

        let url = format!("{}/v1/forecast", self.forecast_base);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coord.latitude.to_string()),
                ("longitude", coord.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_owned()),
                ("timezone", "auto".to_owned()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                endpoint: "current conditions",
                status,
            });
        }

        Ok(res.json().await?)
    }

    /// Fetch the daily + hourly forecast for a coordinate in one call.
    pub async fn forecast_by_coordinate(
        &self,
        coord: Coordinate,
    ) -> Result<ForecastResponse, WeatherError> {
        tracing::debug!(
            latitude = coord.latitude,
            longitude = coord.longitude,
            "fetching forecast"
        );

        let url = format!("{}/v1/forecast", self.forecast_base);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coord.latitude.to_string()),
                ("longitude", coord.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_owned()),
                ("hourly", HOURLY_FIELDS.to_owned()),
                ("timezone", "auto".to_owned()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                endpoint: "forecast",
                status,
            });
        }

        Ok(res.json().await?)
    }

    /// Geocode `city`, then fetch its current conditions. Each city
    /// convenience call geocodes on its own; a concurrent current + forecast
    /// pair therefore geocodes twice. Accepted cost for stateless calls.
    pub async fn current_by_city(&self, city: &str) -> Result<CurrentResponse, WeatherError> {
        let place = self.geocode(city).await?;
        self.current_by_coordinate(place.coordinate()).await
    }

    /// Geocode `city`, then fetch its forecast.
    pub async fn forecast_by_city(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let place = self.geocode(city).await?;
        self.forecast_by_coordinate(place.coordinate()).await
    }
}
