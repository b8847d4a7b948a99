// Service exports
pub mod open_meteo;

pub use open_meteo::{OpenMeteoClient, OpenMeteoError, WeatherBlock};
