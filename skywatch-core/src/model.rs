use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. Range checking (lat in [-90, 90], lon in
/// [-180, 180]) is the caller's job; the pipeline trusts its input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Presentation label for a coordinate search, e.g. `📍 40.7128, -74.0060`.
    pub fn display_label(&self) -> String {
        format!("📍 {:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Normalized current conditions. Temperatures are whole-degree Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub condition: String,
    pub icon: String,
    pub humidity: u8,
    pub wind_speed: i32,
}

/// One of the three forecast days following the request day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub icon: String,
}

/// One hour inside the 24-hour outlook window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: String,
    pub temperature: i32,
    pub wind_speed: i32,
    pub condition: String,
    pub icon: String,
    pub precipitation_probability: u8,
}

/// The sole output of the pipeline and the sole input to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherViewModel {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub hourly: Vec<HourlyEntry>,
}

/// A synthetic sampling point near a searched coordinate. Regenerated on
/// every request; `id` is positional, not stable across origins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub elevation_meters: i32,
}
