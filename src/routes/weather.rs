use actix_web::{web, HttpResponse, Responder};
use crate::core::validate::{resolve_coordinates, resolve_forecast_window, ValidationError};
use crate::models::{CurrentWeatherQuery, ForecastQuery, ErrorResponse, WeatherResponse};
use crate::services::OpenMeteoClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub open_meteo: Arc<OpenMeteoClient>,
}

/// Configure the weather routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/current", web::get().to(current_weather))
        .route("/forecast", web::get().to(forecast));
}

fn validation_rejection(error: ValidationError) -> HttpResponse {
    tracing::info!("Request validation failed: {}", error);
    HttpResponse::BadRequest().json(ErrorResponse::new(error.kind(), &error.to_string()))
}

fn upstream_rejection() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "Internal server error",
        "Failed to fetch weather data",
    ))
}

/// Current conditions endpoint
///
/// GET /api/weather/current?latitude={lat}&longitude={lon}
///
/// Both coordinates are optional as a pair; omitting both falls back to the
/// default location.
async fn current_weather(
    state: web::Data<AppState>,
    query: web::Query<CurrentWeatherQuery>,
) -> impl Responder {
    let coordinates =
        match resolve_coordinates(query.latitude.as_deref(), query.longitude.as_deref()) {
            Ok(coordinates) => coordinates,
            Err(e) => return validation_rejection(e),
        };

    tracing::debug!(
        "Fetching current weather for ({}, {})",
        coordinates.latitude,
        coordinates.longitude
    );

    match state.open_meteo.fetch_current(coordinates).await {
        Ok(block) => HttpResponse::Ok().json(WeatherResponse::new(block.data, block.units)),
        Err(e) => {
            tracing::error!(
                "Failed to fetch current weather for ({}, {}): {}",
                coordinates.latitude,
                coordinates.longitude,
                e
            );
            upstream_rejection()
        }
    }
}

/// Multi-day forecast endpoint
///
/// GET /api/weather/forecast?latitude={lat}&longitude={lon}&days={days}
async fn forecast(
    state: web::Data<AppState>,
    query: web::Query<ForecastQuery>,
) -> impl Responder {
    let coordinates =
        match resolve_coordinates(query.latitude.as_deref(), query.longitude.as_deref()) {
            Ok(coordinates) => coordinates,
            Err(e) => return validation_rejection(e),
        };

    let window = match resolve_forecast_window(query.days.as_deref()) {
        Ok(window) => window,
        Err(e) => return validation_rejection(e),
    };

    tracing::debug!(
        "Fetching {}-day forecast for ({}, {})",
        window.days,
        coordinates.latitude,
        coordinates.longitude
    );

    match state.open_meteo.fetch_forecast(coordinates, window).await {
        Ok(block) => HttpResponse::Ok().json(WeatherResponse::new(block.data, block.units)),
        Err(e) => {
            tracing::error!(
                "Failed to fetch forecast for ({}, {}): {}",
                coordinates.latitude,
                coordinates.longitude,
                e
            );
            upstream_rejection()
        }
    }
}

/// Fallback for any route not defined above
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "Not Found",
        "The requested resource does not exist",
    ))
}
