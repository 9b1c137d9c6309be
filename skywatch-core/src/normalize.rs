//! Transforms raw Open-Meteo payloads into the presentation view model:
//! Fahrenheit temperatures, icon/label pairs, a 3-day forecast, and a
//! bounded next-24-hour series.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::client::{CurrentResponse, ForecastResponse};
use crate::codes;
use crate::error::WeatherError;
use crate::model::{CurrentConditions, ForecastDay, HourlyEntry, WeatherViewModel};
use crate::units::celsius_to_fahrenheit;

/// Day labels indexed by forecast position, not by actual weekday. Position
/// 0 (the day after the request day) always reads "Today". Odd, but it is
/// the observable behavior of the app this pipeline feeds; don't "fix" it.
const DAY_NAMES: [&str; 7] = [
    "Today",
    "Tomorrow",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Maximum number of hourly entries exposed to presentation.
const HOURLY_WINDOW: usize = 24;

// Open-Meteo serves location-local timestamps without an offset when asked
// for timezone=auto.
const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DAILY_TIME_FORMAT: &str = "%Y-%m-%d";

/// Build the view model for one completed current + forecast fetch.
///
/// `now` is injected so the 24-hour windowing is testable; the orchestration
/// layer passes the local wall clock. Deterministic for fixed inputs.
pub fn normalize(
    location_label: &str,
    current: &CurrentResponse,
    forecast: &ForecastResponse,
    now: NaiveDateTime,
) -> Result<WeatherViewModel, WeatherError> {
    validate_series(forecast)?;

    let info = codes::lookup(current.current.weather_code);
    let conditions = CurrentConditions {
        temperature: celsius_to_fahrenheit(current.current.temperature_2m).round() as i32,
        condition: info.condition.to_owned(),
        icon: info.icon.to_owned(),
        humidity: current.current.relative_humidity_2m.round() as u8,
        wind_speed: current.current.wind_speed_10m.round() as i32,
    };

    Ok(WeatherViewModel {
        location: location_label.to_owned(),
        current: conditions,
        forecast: forecast_days(forecast)?,
        hourly: hourly_window(forecast, now)?,
    })
}

/// The three days after the request day (daily index 0 is always skipped).
fn forecast_days(forecast: &ForecastResponse) -> Result<Vec<ForecastDay>, WeatherError> {
    let daily = &forecast.daily;

    (1..=3)
        .map(|idx| {
            let info = codes::lookup(daily.weather_code[idx]);
            Ok(ForecastDay {
                day: day_label(idx - 1, &daily.time[idx])?,
                high: celsius_to_fahrenheit(daily.temperature_2m_max[idx]).round() as i32,
                low: celsius_to_fahrenheit(daily.temperature_2m_min[idx]).round() as i32,
                condition: info.condition.to_owned(),
                icon: info.icon.to_owned(),
            })
        })
        .collect()
}

fn day_label(position: usize, date_str: &str) -> Result<String, WeatherError> {
    if let Some(name) = DAY_NAMES.get(position) {
        return Ok((*name).to_owned());
    }

    // Unreachable for the fixed 3-day window; kept for parity should the
    // window ever widen past the table.
    let date = NaiveDate::parse_from_str(date_str, DAILY_TIME_FORMAT).map_err(|e| {
        WeatherError::MalformedPayload(format!("unparseable daily timestamp {date_str:?}: {e}"))
    })?;
    Ok(date.format("%A").to_string())
}

/// Hourly entries with `now < t <= now + 24h`, at most 24, ascending.
fn hourly_window(
    forecast: &ForecastResponse,
    now: NaiveDateTime,
) -> Result<Vec<HourlyEntry>, WeatherError> {
    let hourly = &forecast.hourly;
    let window_end = now + Duration::hours(24);

    let mut entries = Vec::new();
    for (idx, time_str) in hourly.time.iter().enumerate() {
        if entries.len() == HOURLY_WINDOW {
            break;
        }

        let time = NaiveDateTime::parse_from_str(time_str, HOURLY_TIME_FORMAT).map_err(|e| {
            WeatherError::MalformedPayload(format!(
                "unparseable hourly timestamp {time_str:?}: {e}"
            ))
        })?;

        // Lower bound exclusive, upper bound inclusive.
        if time <= now || time > window_end {
            continue;
        }

        let info = codes::lookup(hourly.weather_code[idx]);
        entries.push(HourlyEntry {
            time: time.format("%-I %p").to_string(),
            temperature: celsius_to_fahrenheit(hourly.temperature_2m[idx]).round() as i32,
            wind_speed: hourly.wind_speed_10m[idx].round() as i32,
            condition: info.condition.to_owned(),
            icon: info.icon.to_owned(),
            precipitation_probability: hourly
                .precipitation_probability
                .get(idx)
                .copied()
                .unwrap_or(0.0)
                .round() as u8,
        });
    }

    Ok(entries)
}

/// Reject payloads the index arithmetic above cannot safely consume.
fn validate_series(forecast: &ForecastResponse) -> Result<(), WeatherError> {
    let daily = &forecast.daily;
    let days = daily.time.len();
    if days < 4 {
        return Err(WeatherError::MalformedPayload(format!(
            "daily series has {days} entries, need at least 4"
        )));
    }
    if daily.temperature_2m_max.len() != days
        || daily.temperature_2m_min.len() != days
        || daily.weather_code.len() != days
    {
        return Err(WeatherError::MalformedPayload(
            "daily series lengths are misaligned".to_owned(),
        ));
    }

    let hourly = &forecast.hourly;
    let hours = hourly.time.len();
    if hourly.temperature_2m.len() != hours
        || hourly.wind_speed_10m.len() != hours
        || hourly.weather_code.len() != hours
    {
        return Err(WeatherError::MalformedPayload(
            "hourly series lengths are misaligned".to_owned(),
        ));
    }

    // precipitation_probability may be absent or short; missing indices
    // default to 0 during mapping.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CurrentReading, DailySeries, HourlySeries};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn current_fixture() -> CurrentResponse {
        CurrentResponse {
            current: CurrentReading {
                temperature_2m: 15.0,
                relative_humidity_2m: 80.0,
                wind_speed_10m: 10.0,
                weather_code: 3,
                apparent_temperature: 13.0,
            },
        }
    }

    /// 48 hourly entries starting at local midnight of the request day.
    fn forecast_fixture() -> ForecastResponse {
        let start = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let hours: Vec<NaiveDateTime> = (0..48).map(|h| start + Duration::hours(h)).collect();

        ForecastResponse {
            daily: DailySeries {
                time: (0..5)
                    .map(|d| (start + Duration::days(d)).format("%Y-%m-%d").to_string())
                    .collect(),
                temperature_2m_max: vec![10.0, 20.0, 30.0, 25.0, 15.0],
                temperature_2m_min: vec![0.0, 5.0, 10.0, 5.0, 0.0],
                weather_code: vec![0, 61, 71, 95, 3],
            },
            hourly: HourlySeries {
                time: hours
                    .iter()
                    .map(|t| t.format("%Y-%m-%dT%H:%M").to_string())
                    .collect(),
                temperature_2m: (0..48).map(|h| 10.0 + h as f64 * 0.1).collect(),
                wind_speed_10m: vec![5.0; 48],
                weather_code: vec![2; 48],
                precipitation_probability: (0..48).map(|h| h as f64).collect(),
            },
        }
    }

    #[test]
    fn current_conditions_london_scenario() {
        let vm = normalize("London", &current_fixture(), &forecast_fixture(), fixed_now())
            .expect("must normalize");

        assert_eq!(vm.location, "London");
        assert_eq!(vm.current.temperature, 59);
        assert_eq!(vm.current.condition, "Overcast");
        assert_eq!(vm.current.icon, "☁️");
        assert_eq!(vm.current.humidity, 80);
        assert_eq!(vm.current.wind_speed, 10);
    }

    #[test]
    fn forecast_skips_today_and_has_three_entries() {
        let vm = normalize("London", &current_fixture(), &forecast_fixture(), fixed_now())
            .expect("must normalize");

        assert_eq!(vm.forecast.len(), 3);
        // Daily index 1 feeds the first entry.
        assert_eq!(vm.forecast[0].high, 68); // 20 C
        assert_eq!(vm.forecast[0].low, 41); // 5 C
        assert_eq!(vm.forecast[0].condition, "Slight Rain");
        assert_eq!(vm.forecast[2].condition, "Thunderstorm");
    }

    #[test]
    fn day_labels_are_position_indexed() {
        let vm = normalize("London", &current_fixture(), &forecast_fixture(), fixed_now())
            .expect("must normalize");

        let labels: Vec<&str> = vm.forecast.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(labels, ["Today", "Tomorrow", "Wednesday"]);
    }

    #[test]
    fn hourly_window_is_exclusive_below_inclusive_above() {
        let vm = normalize("London", &current_fixture(), &forecast_fixture(), fixed_now())
            .expect("must normalize");

        // 12:00 (exactly now) is excluded; 13:00 through next-day 12:00
        // (exactly now + 24h) survive: 24 entries.
        assert_eq!(vm.hourly.len(), 24);
        assert_eq!(vm.hourly[0].time, "1 PM");
        assert_eq!(vm.hourly[23].time, "12 PM");
        // Hour index 13 carries temperature 11.3 C = 52.34 F.
        assert_eq!(vm.hourly[0].temperature, 52);
        assert_eq!(vm.hourly[0].precipitation_probability, 13);
    }

    #[test]
    fn hourly_truncates_past_24_matches() {
        // Half-hour sampling puts 48 entries inside the window; only the
        // first 24 survive, in ascending order.
        let start = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut forecast = forecast_fixture();
        forecast.hourly.time = (1..=48)
            .map(|i| (start + Duration::minutes(30 * i)).format("%Y-%m-%dT%H:%M").to_string())
            .collect();
        forecast.hourly.precipitation_probability.clear();

        let vm = normalize("London", &current_fixture(), &forecast, start)
            .expect("must normalize");
        assert_eq!(vm.hourly.len(), 24);
        // The 24th match sits 12 hours in, well short of the window end.
        assert_eq!(vm.hourly[23].time, "12 PM");
        // Absent precipitation series defaults to 0.
        assert!(vm.hourly.iter().all(|h| h.precipitation_probability == 0));
    }

    #[test]
    fn hour_labels_use_twelve_hour_clock() {
        let midnight = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let vm = normalize("London", &current_fixture(), &forecast_fixture(), midnight)
            .expect("must normalize");

        assert_eq!(vm.hourly[0].time, "1 AM");
        assert_eq!(vm.hourly[11].time, "12 PM");
        assert_eq!(vm.hourly[23].time, "12 AM");
    }

    #[test]
    fn deterministic_for_fixed_now() {
        let a = normalize("London", &current_fixture(), &forecast_fixture(), fixed_now())
            .expect("must normalize");
        let b = normalize("London", &current_fixture(), &forecast_fixture(), fixed_now())
            .expect("must normalize");
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_current_code_maps_to_fallback() {
        let mut current = current_fixture();
        current.current.weather_code = 200;
        let vm = normalize("London", &current, &forecast_fixture(), fixed_now())
            .expect("must normalize");
        assert_eq!(vm.current.condition, "Unknown");
        assert_eq!(vm.current.icon, "🌤️");
    }

    #[test]
    fn short_daily_series_is_malformed() {
        let mut forecast = forecast_fixture();
        forecast.daily.time.truncate(3);
        forecast.daily.temperature_2m_max.truncate(3);
        forecast.daily.temperature_2m_min.truncate(3);
        forecast.daily.weather_code.truncate(3);

        let err = normalize("London", &current_fixture(), &forecast, fixed_now()).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedPayload(_)));
        assert!(err.to_string().contains("at least 4"));
    }

    #[test]
    fn misaligned_hourly_series_is_malformed() {
        let mut forecast = forecast_fixture();
        forecast.hourly.temperature_2m.pop();

        let err = normalize("London", &current_fixture(), &forecast, fixed_now()).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedPayload(_)));
    }

    #[test]
    fn unparseable_hourly_timestamp_is_malformed() {
        let mut forecast = forecast_fixture();
        forecast.hourly.time[0] = "not-a-time".to_owned();

        let err = normalize("London", &current_fixture(), &forecast, fixed_now()).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedPayload(_)));
    }
}
