use serde::{Deserialize, Serialize};

/// Query parameters for the current-conditions endpoint
///
/// Parameters stay string-typed here; parsing and range checks happen in
/// `core::validate` so that partial or malformed input maps to the right
/// error kind instead of a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Query parameters for the forecast endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub days: Option<String>,
}
