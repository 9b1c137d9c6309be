//! Human-friendly rendering of view models to stdout.

use skywatch_core::{Station, WeatherViewModel};

pub fn print_weather(weather: &WeatherViewModel) {
    let current = &weather.current;

    println!("{}", weather.location);
    println!(
        "{} {}  {}°F  (humidity {}%, wind {} km/h)",
        current.icon, current.condition, current.temperature, current.humidity, current.wind_speed
    );

    println!();
    println!("3-day forecast:");
    for day in &weather.forecast {
        println!(
            "  {:<9} {} {:<28} {}° / {}°",
            day.day, day.icon, day.condition, day.high, day.low
        );
    }

    if !weather.hourly.is_empty() {
        println!();
        println!("Next 24 hours:");
        for hour in &weather.hourly {
            println!(
                "  {:>5}  {} {:>3}°F  wind {:>2} km/h  rain {:>3}%",
                hour.time, hour.icon, hour.temperature, hour.wind_speed,
                hour.precipitation_probability
            );
        }
    }
}

pub fn print_stations(stations: &[Station]) {
    println!();
    println!("Nearby sampling points (synthetic):");
    for station in stations {
        println!(
            "  {:<16} {:>8.4}, {:>9.4}  {:>4.1} km  elev {:>4} m",
            station.name, station.latitude, station.longitude, station.distance_km,
            station.elevation_meters
        );
    }
}
