//! Weather Gateway - HTTP facade over the Open-Meteo forecast API
//!
//! This library validates coordinate query parameters, forwards them to
//! Open-Meteo and reshapes the upstream payload into a uniform envelope.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::validate::{resolve_coordinates, resolve_forecast_window, ValidationError};
pub use crate::models::{Coordinates, ForecastWindow, CurrentWeatherQuery, ForecastQuery, WeatherResponse, ErrorResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let coordinates = resolve_coordinates(None, None).unwrap();
        assert_eq!(coordinates, Coordinates::DEFAULT);
    }
}
