//! Synthetic station ring.
//!
//! Open-Meteo serves a model grid rather than physical stations, so nearby
//! "stations" are fabricated: a ring of sampling points around the searched
//! coordinate that the user can re-query.

use rand::{Rng, RngExt};

use crate::config::StationRing;
use crate::geo::haversine_km;
use crate::model::{Coordinate, Station};

/// Generate the station ring around `origin`, sorted by ascending distance.
///
/// Elevations are drawn fresh on every call; two calls with the same origin
/// agree on positions but not on elevations.
pub fn synthesize(origin: Coordinate, ring: StationRing) -> Vec<Station> {
    synthesize_with(origin, ring, &mut rand::rng())
}

/// Same as [`synthesize`], with the elevation source supplied by the caller
/// so tests can pass a seeded generator.
pub fn synthesize_with<R: Rng + ?Sized>(
    origin: Coordinate,
    ring: StationRing,
    rng: &mut R,
) -> Vec<Station> {
    let mut stations: Vec<Station> = (0..ring.count)
        .map(|i| {
            // Plane approximation; fine at a ~0.1 degree radius.
            let angle = i as f64 * std::f64::consts::TAU / ring.count as f64;
            let latitude = origin.latitude + ring.radius_deg * angle.cos();
            let longitude = origin.longitude + ring.radius_deg * angle.sin();

            let distance = haversine_km(origin, Coordinate::new(latitude, longitude));

            Station {
                id: format!("station_{i}"),
                name: format!("Weather Point {}", i + 1),
                latitude,
                longitude,
                distance_km: (distance * 10.0).round() / 10.0,
                // Simulated elevation, not a physical measurement.
                elevation_meters: rng.random_range(100..1100),
            }
        })
        .collect();

    stations.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    stations
}
