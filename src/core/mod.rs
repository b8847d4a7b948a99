// Core validation exports
pub mod validate;

pub use validate::{resolve_coordinates, resolve_forecast_window, ValidationError};
