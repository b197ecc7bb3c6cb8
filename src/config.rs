//! Application-level configuration constants.

// UI Behavior
pub const CRUNCH_DELAY_MS: u32 = 900;

// Default values for input fields
pub const DEFAULT_TARGET_TIME: &str = "04:00";
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_WEEKLY_MILEAGE_KM: f64 = 50.0;
pub const DEFAULT_PEAK_MILEAGE_KM: f64 = 80.0;
pub const DEFAULT_COFFEE_LOVE: u8 = 3;
pub const DEFAULT_PARTY_LOVE: u8 = 1;

// Min/Max limits for input fields
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 150.0;
pub const MIN_MILEAGE_KM: f64 = 0.0;
pub const MAX_WEEKLY_MILEAGE_KM: f64 = 300.0;
pub const MAX_PEAK_MILEAGE_KM: f64 = 400.0;
pub const MIN_LOVE: u8 = 1;
pub const MAX_LOVE: u8 = 5;
