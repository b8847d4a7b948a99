use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope for both weather endpoints
///
/// `data` and `units` carry the upstream block and its unit map exactly as
/// Open-Meteo reported them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub data: Value,
    pub units: Value,
}

impl WeatherResponse {
    pub fn new(data: Value, units: Value) -> Self {
        Self {
            success: true,
            data,
            units,
        }
    }
}

/// Error envelope used for all failure responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weather_response_shape() {
        let response = WeatherResponse::new(
            json!({"temperature_2m": 21.4}),
            json!({"temperature_2m": "°C"}),
        );

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["temperature_2m"], json!(21.4));
        assert_eq!(body["units"]["temperature_2m"], json!("°C"));
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::new("Not Found", "The requested resource does not exist");

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Not Found",
                "message": "The requested resource does not exist",
            })
        );
    }
}
