use reqwest::StatusCode;

/// Failures the pipeline can surface to a caller.
///
/// Coordinate range validation is a caller concern and deliberately has no
/// variant here; the core never checks it.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Geocoding returned zero matches for the given city name.
    #[error("City \"{0}\" not found")]
    CityNotFound(String),

    /// An upstream endpoint answered with a non-success HTTP status.
    /// The body is not parsed in this case.
    #[error("{endpoint} request failed with status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    /// Network-level failure (DNS, timeout, refusal) or a body that could
    /// not be decoded as the expected JSON shape.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream parallel arrays were shorter or differently sized than the
    /// normalization logic requires.
    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),
}
