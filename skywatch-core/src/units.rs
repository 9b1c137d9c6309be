/// Exact Celsius to Fahrenheit conversion.
///
/// No rounding here; callers round to whole degrees where the presentation
/// format requires it, so intermediate precision stays available.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
