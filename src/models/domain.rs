use serde::{Deserialize, Serialize};

/// A validated geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Fallback location (Brisbane) used when a request names no position
    pub const DEFAULT: Coordinates = Coordinates {
        latitude: -27.4705,
        longitude: 153.0260,
    };

    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;
}

/// Number of days covered by a forecast request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub days: u8,
}

impl ForecastWindow {
    /// Window applied when the request omits `days`
    pub const DEFAULT: ForecastWindow = ForecastWindow { days: 7 };

    pub const MIN_DAYS: u8 = 1;
    pub const MAX_DAYS: u8 = 16;
}
