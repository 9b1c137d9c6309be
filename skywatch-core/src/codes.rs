//! WMO weather-interpretation code catalog.
//!
//! Open-Meteo reports conditions as integer WMO codes; this maps each known
//! code to the emoji glyph and label the presentation layer shows.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Icon glyph and human-readable label for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub icon: &'static str,
    pub condition: &'static str,
}

/// Fallback for codes outside the documented WMO set.
pub const UNKNOWN: WeatherInfo = WeatherInfo {
    icon: "🌤️",
    condition: "Unknown",
};

/// Look up the icon/label pair for a WMO code. Total: unknown codes map to
/// [`UNKNOWN`], never an error.
pub fn lookup(code: i32) -> WeatherInfo {
    let (icon, condition) = match code {
        0 => ("☀️", "Clear Sky"),
        1 => ("🌤️", "Mainly Clear"),
        2 => ("⛅", "Partly Cloudy"),
        3 => ("☁️", "Overcast"),
        45 => ("🌫️", "Foggy"),
        48 => ("🌫️", "Depositing Rime Fog"),
        51 => ("🌦️", "Light Drizzle"),
        53 => ("🌦️", "Moderate Drizzle"),
        55 => ("🌧️", "Dense Drizzle"),
        56 => ("🌧️", "Light Freezing Drizzle"),
        57 => ("🌧️", "Dense Freezing Drizzle"),
        61 => ("🌧️", "Slight Rain"),
        63 => ("🌧️", "Moderate Rain"),
        65 => ("🌧️", "Heavy Rain"),
        66 => ("🌧️", "Light Freezing Rain"),
        67 => ("🌧️", "Heavy Freezing Rain"),
        71 => ("❄️", "Slight Snow"),
        73 => ("❄️", "Moderate Snow"),
        75 => ("❄️", "Heavy Snow"),
        77 => ("❄️", "Snow Grains"),
        80 => ("🌦️", "Slight Rain Showers"),
        81 => ("🌧️", "Moderate Rain Showers"),
        82 => ("🌧️", "Violent Rain Showers"),
        85 => ("❄️", "Slight Snow Showers"),
        86 => ("❄️", "Heavy Snow Showers"),
        95 => ("⛈️", "Thunderstorm"),
        96 => ("⛈️", "Thunderstorm with Slight Hail"),
        99 => ("⛈️", "Thunderstorm with Heavy Hail"),
        _ => return UNKNOWN,
    };

    WeatherInfo { icon, condition }
}
