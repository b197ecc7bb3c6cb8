//! Race-day weather forecast.
//!
//! The forecast is a fixed record; it reaches the calculation only through
//! the `RaceConditions` it builds.

use crate::{Brand, RaceConditions};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub date: &'static str,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind: &'static str,
    pub conditions: &'static str,
    pub uv_index: u8,
    pub sunrise: &'static str,
    pub sunset: &'static str,
}

/// Copenhagen Marathon, Sunday May 11, 2025.
pub const COPENHAGEN_RACE_DAY: Forecast = Forecast {
    date: "Sunday, May 11, 2025",
    temperature_c: 14.0,
    humidity_percent: 59.0,
    wind: "ESE 8 mph (13 km/h)",
    conditions: "Partly cloudy",
    uv_index: 4,
    sunrise: "5:05 am",
    sunset: "9:07 pm",
};

impl Forecast {
    /// Combine this forecast with the runner's own inputs.
    pub fn conditions(&self, finish_time_minutes: u32, body_weight_kg: f64, brand: Brand) -> RaceConditions {
        RaceConditions {
            finish_time_minutes,
            body_weight_kg,
            temperature_c: self.temperature_c,
            humidity_percent: self.humidity_percent.clamp(0.0, 100.0),
            brand,
        }
    }

    /// WHO UV index band.
    pub fn uv_label(&self) -> &'static str {
        match self.uv_index {
            0..=2 => "Low",
            3..=5 => "Moderate",
            6..=7 => "High",
            8..=10 => "Very High",
            _ => "Extreme",
        }
    }
}
