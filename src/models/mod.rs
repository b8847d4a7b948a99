// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, ForecastWindow};
pub use requests::{CurrentWeatherQuery, ForecastQuery};
pub use responses::{WeatherResponse, ErrorResponse};
