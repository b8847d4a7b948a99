use crate::models::{Coordinates, ForecastWindow};
use thiserror::Error;

/// Rejection reasons for coordinate and forecast-window parameters
///
/// The `Display` text is the human-readable message sent to the client;
/// [`ValidationError::kind`] gives the short machine-facing kind. Parse
/// failures and out-of-range values deliberately share one variant per axis,
/// matching the service's observed wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Both latitude and longitude must be provided if specifying location")]
    MissingParameters,

    #[error("Latitude must be between -90 and 90")]
    InvalidLatitude,

    #[error("Longitude must be between -180 and 180")]
    InvalidLongitude,

    #[error("Days must be between 1 and 16")]
    InvalidDays,
}

impl ValidationError {
    /// Short kind used in the error envelope
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingParameters => "Missing parameters",
            ValidationError::InvalidLatitude => "Invalid latitude",
            ValidationError::InvalidLongitude => "Invalid longitude",
            ValidationError::InvalidDays => "Invalid days parameter",
        }
    }
}

/// Treat empty strings the same as absent parameters
fn supplied(param: Option<&str>) -> Option<&str> {
    param.filter(|value| !value.is_empty())
}

/// Resolve raw `latitude`/`longitude` query parameters into validated
/// coordinates
///
/// When neither parameter is supplied the fixed default location is used.
/// Supplying only one of the pair is always an error; a location is either
/// fully specified or not at all. Latitude is checked before longitude.
pub fn resolve_coordinates(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<Coordinates, ValidationError> {
    let (latitude, longitude) = match (supplied(latitude), supplied(longitude)) {
        (None, None) => return Ok(Coordinates::DEFAULT),
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ValidationError::MissingParameters),
    };

    let latitude: f64 = latitude
        .parse()
        .map_err(|_| ValidationError::InvalidLatitude)?;
    // range checks also reject NaN
    if !(Coordinates::MIN_LATITUDE..=Coordinates::MAX_LATITUDE).contains(&latitude) {
        return Err(ValidationError::InvalidLatitude);
    }

    let longitude: f64 = longitude
        .parse()
        .map_err(|_| ValidationError::InvalidLongitude)?;
    if !(Coordinates::MIN_LONGITUDE..=Coordinates::MAX_LONGITUDE).contains(&longitude) {
        return Err(ValidationError::InvalidLongitude);
    }

    Ok(Coordinates {
        latitude,
        longitude,
    })
}

/// Resolve the raw `days` query parameter into a forecast window
///
/// Absent or non-numeric input falls back to the default window; a numeric
/// value outside the supported range is rejected rather than clamped.
pub fn resolve_forecast_window(days: Option<&str>) -> Result<ForecastWindow, ValidationError> {
    let days = match supplied(days) {
        None => return Ok(ForecastWindow::DEFAULT),
        Some(raw) => raw
            .parse::<i64>()
            .unwrap_or(i64::from(ForecastWindow::DEFAULT.days)),
    };

    if !(i64::from(ForecastWindow::MIN_DAYS)..=i64::from(ForecastWindow::MAX_DAYS)).contains(&days)
    {
        return Err(ValidationError::InvalidDays);
    }

    Ok(ForecastWindow { days: days as u8 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_both_absent() {
        let coordinates = resolve_coordinates(None, None).unwrap();
        assert_eq!(coordinates, Coordinates::DEFAULT);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let coordinates = resolve_coordinates(Some(""), Some("")).unwrap();
        assert_eq!(coordinates, Coordinates::DEFAULT);
    }

    #[test]
    fn test_partial_pair_rejected() {
        assert_eq!(
            resolve_coordinates(Some("-27.4705"), None),
            Err(ValidationError::MissingParameters)
        );
        assert_eq!(
            resolve_coordinates(None, Some("153.0260")),
            Err(ValidationError::MissingParameters)
        );
        // empty counterpart behaves like an absent one
        assert_eq!(
            resolve_coordinates(Some("-27.4705"), Some("")),
            Err(ValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_valid_pair_parsed() {
        let coordinates = resolve_coordinates(Some("-27.4705"), Some("153.0260")).unwrap();
        assert_eq!(coordinates.latitude, -27.4705);
        assert_eq!(coordinates.longitude, 153.0260);
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert_eq!(
            resolve_coordinates(Some("95"), Some("0")),
            Err(ValidationError::InvalidLatitude)
        );
        assert_eq!(
            resolve_coordinates(Some("-91"), Some("0")),
            Err(ValidationError::InvalidLatitude)
        );
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert_eq!(
            resolve_coordinates(Some("0"), Some("200")),
            Err(ValidationError::InvalidLongitude)
        );
        assert_eq!(
            resolve_coordinates(Some("0"), Some("-181")),
            Err(ValidationError::InvalidLongitude)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(resolve_coordinates(Some("90"), Some("180")).is_ok());
        assert!(resolve_coordinates(Some("-90"), Some("-180")).is_ok());
    }

    #[test]
    fn test_non_numeric_conflated_with_range_error() {
        assert_eq!(
            resolve_coordinates(Some("abc"), Some("0")),
            Err(ValidationError::InvalidLatitude)
        );
        assert_eq!(
            resolve_coordinates(Some("0"), Some("east")),
            Err(ValidationError::InvalidLongitude)
        );
    }

    #[test]
    fn test_nan_rejected() {
        assert_eq!(
            resolve_coordinates(Some("NaN"), Some("0")),
            Err(ValidationError::InvalidLatitude)
        );
    }

    #[test]
    fn test_latitude_checked_before_longitude() {
        // both axes bad reports the latitude error
        assert_eq!(
            resolve_coordinates(Some("95"), Some("200")),
            Err(ValidationError::InvalidLatitude)
        );
    }

    #[test]
    fn test_days_default() {
        assert_eq!(resolve_forecast_window(None), Ok(ForecastWindow::DEFAULT));
        assert_eq!(
            resolve_forecast_window(Some("")),
            Ok(ForecastWindow::DEFAULT)
        );
    }

    #[test]
    fn test_days_non_numeric_defaults() {
        assert_eq!(
            resolve_forecast_window(Some("week")),
            Ok(ForecastWindow::DEFAULT)
        );
    }

    #[test]
    fn test_days_out_of_range() {
        assert_eq!(
            resolve_forecast_window(Some("0")),
            Err(ValidationError::InvalidDays)
        );
        assert_eq!(
            resolve_forecast_window(Some("17")),
            Err(ValidationError::InvalidDays)
        );
        assert_eq!(
            resolve_forecast_window(Some("-3")),
            Err(ValidationError::InvalidDays)
        );
    }

    #[test]
    fn test_days_in_range() {
        assert_eq!(
            resolve_forecast_window(Some("1")),
            Ok(ForecastWindow { days: 1 })
        );
        assert_eq!(
            resolve_forecast_window(Some("16")),
            Ok(ForecastWindow { days: 16 })
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ValidationError::MissingParameters.kind(), "Missing parameters");
        assert_eq!(ValidationError::InvalidLatitude.kind(), "Invalid latitude");
        assert_eq!(ValidationError::InvalidLongitude.kind(), "Invalid longitude");
        assert_eq!(ValidationError::InvalidDays.kind(), "Invalid days parameter");
    }
}
