use log::{debug, info, warn};
use utils::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod content;
pub mod forecast;
pub mod utils;

/// Fixed coefficients of the fueling model.
pub mod defaults {
    pub const BASE_UNITS_PER_HOUR: f64 = 2.0;
    pub const MIN_TOTAL_UNITS: u32 = 2;
    pub const FIRST_UNIT_MINUTE: u32 = 30;

    pub const HEAT_THRESHOLD_C: f64 = 20.0;
    pub const HUMIDITY_THRESHOLD_PCT: f64 = 60.0;
    pub const GEL_HEAT_FACTOR: f64 = 0.05;
    pub const GEL_HUMIDITY_FACTOR: f64 = 0.005;

    pub const HYDRATION_ML_PER_KG: f64 = 4.0;
    pub const HYDRATION_HEAT_FACTOR: f64 = 0.05;
    pub const HYDRATION_HUMIDITY_FACTOR: f64 = 0.01;

    pub const DAILY_CARBS_PER_KG: f64 = 8.0;
    pub const BREAKFAST_CARBS_PER_KG: f64 = 2.0;
    pub const KCAL_PER_GRAM_CARB: u32 = 4;

    // Accepted ranges for conditions arriving from outside the form
    pub const MAX_FINISH_TIME_MINUTES: u32 = 24 * 60;
    pub const MIN_BODY_WEIGHT_KG: f64 = 1.0;
    pub const MAX_BODY_WEIGHT_KG: f64 = 500.0;
    pub const MIN_TEMPERATURE_C: f64 = -50.0;
    pub const MAX_TEMPERATURE_C: f64 = 60.0;
}

/// Gel brand. Only changes product names, never quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    Maurten,
    Powerbar,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Maurten, Brand::Powerbar];

    pub fn regular_product(self) -> &'static str {
        match self {
            Brand::Maurten => "GEL 100",
            Brand::Powerbar => "PowerGel Original",
        }
    }

    pub fn caffeinated_product(self) -> &'static str {
        match self {
            Brand::Maurten => "CAF 100",
            Brand::Powerbar => "PowerGel Hydro Caffeine",
        }
    }

    /// Parse the value of the brand `<select>`.
    pub fn from_name(name: &str) -> Option<Brand> {
        Brand::ALL
            .into_iter()
            .find(|b| b.to_string().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Maurten => write!(f, "Maurten"),
            Brand::Powerbar => write!(f, "Powerbar"),
        }
    }
}

/// Everything the calculation needs, already parsed and validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceConditions {
    pub finish_time_minutes: u32,
    pub body_weight_kg: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub brand: Brand,
}

impl RaceConditions {
    pub fn total_hours(&self) -> f64 {
        self.finish_time_minutes as f64 / 60.0
    }

    /// Reject conditions outside the ranges the model is meant for.
    /// Non-finite values fail every range.
    pub fn check(&self) -> Result<(), InputError> {
        use defaults::*;

        check_range(
            self.finish_time_minutes as f64,
            1.0,
            MAX_FINISH_TIME_MINUTES as f64,
            "finish time (minutes)",
        )?;
        check_range(self.body_weight_kg, MIN_BODY_WEIGHT_KG, MAX_BODY_WEIGHT_KG, "weight")?;
        check_range(self.temperature_c, MIN_TEMPERATURE_C, MAX_TEMPERATURE_C, "temperature")?;
        check_range(self.humidity_percent, 0.0, 100.0, "humidity")
    }
}

fn check_range(value: f64, min: f64, max: f64, field: &'static str) -> Result<(), InputError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange { field, min, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub offset_minutes: u32,
    pub caffeinated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbLoading {
    pub daily_carbs_grams: u32,
    pub daily_calories_from_carbs: u32,
    pub breakfast_carbs_grams: u32,
    pub breakfast_calories_from_carbs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingPlan {
    pub total_units: u32,
    pub regular_units: u32,
    pub caffeinated_units: u32,
    pub timeline: Vec<TimelineEntry>,
    pub hydration_ml_per_hour: u32,
    pub carb_loading: CarbLoading,
    pub brand: Brand,
}

impl FuelingPlan {
    /// One-line summary shown above the timeline.
    pub fn summary(&self) -> String {
        format!(
            "You will need {} gels in total ({} regular {} {} and {} {} {})",
            self.total_units,
            self.regular_units,
            self.brand,
            self.brand.regular_product(),
            self.caffeinated_units,
            self.brand,
            self.brand.caffeinated_product()
        )
    }

    /// Timeline rendered as `H:MM - Take <brand> <product>` lines.
    pub fn timeline_lines(&self) -> Vec<String> {
        self.timeline
            .iter()
            .map(|entry| {
                let product = if entry.caffeinated {
                    self.brand.caffeinated_product()
                } else {
                    self.brand.regular_product()
                };
                format!(
                    "{} - Take {} {}",
                    format_offset(entry.offset_minutes),
                    self.brand,
                    product
                )
            })
            .collect()
    }
}

/// Format a race offset in minutes as `H:MM`.
pub fn format_offset(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Additive heat and humidity scaling applied to the gel count.
pub fn gel_multiplier(temperature_c: f64, humidity_percent: f64) -> f64 {
    use defaults::*;

    let mut multiplier = 1.0;
    if temperature_c > HEAT_THRESHOLD_C {
        multiplier += (temperature_c - HEAT_THRESHOLD_C) * GEL_HEAT_FACTOR;
    }
    if humidity_percent > HUMIDITY_THRESHOLD_PCT {
        multiplier += (humidity_percent - HUMIDITY_THRESHOLD_PCT) * GEL_HUMIDITY_FACTOR;
    }
    multiplier
}

/// Fluid target in ml per hour, before rounding.
pub fn hydration_per_hour(body_weight_kg: f64, temperature_c: f64, humidity_percent: f64) -> f64 {
    use defaults::*;

    let heat = (temperature_c - HEAT_THRESHOLD_C).max(0.0);
    let humidity = (humidity_percent - HUMIDITY_THRESHOLD_PCT).max(0.0);

    let mut hydration = body_weight_kg * HYDRATION_ML_PER_KG;
    hydration *= 1.0 + heat * HYDRATION_HEAT_FACTOR;
    hydration *= 1.0 + humidity * HYDRATION_HUMIDITY_FACTOR;
    hydration
}

pub fn carb_loading(body_weight_kg: f64) -> CarbLoading {
    use defaults::*;

    let daily = (body_weight_kg * DAILY_CARBS_PER_KG).round().max(0.0) as u32;
    let breakfast = (body_weight_kg * BREAKFAST_CARBS_PER_KG).round().max(0.0) as u32;
    CarbLoading {
        daily_carbs_grams: daily,
        daily_calories_from_carbs: daily * KCAL_PER_GRAM_CARB,
        breakfast_carbs_grams: breakfast,
        breakfast_calories_from_carbs: breakfast * KCAL_PER_GRAM_CARB,
    }
}

/// Evenly spaced intake schedule starting at minute 30. The caffeinated
/// units always occupy the tail of the schedule.
pub fn build_timeline(finish_time_minutes: u32, total_units: u32, regular_units: u32) -> Vec<TimelineEntry> {
    if total_units == 0 {
        return Vec::new();
    }
    let interval = finish_time_minutes / total_units;
    (0..total_units)
        .map(|i| TimelineEntry {
            offset_minutes: defaults::FIRST_UNIT_MINUTE.saturating_add(i.saturating_mul(interval)),
            caffeinated: i >= regular_units,
        })
        .collect()
}

/// Compute the complete fueling plan for one submission.
///
/// Pure and total: the same conditions always produce the same plan.
/// The caffeinated count is clamped at zero for targets under an hour,
/// where `floor(hours - 1)` is negative.
pub fn compute(conditions: &RaceConditions) -> FuelingPlan {
    let total_hours = conditions.total_hours();
    let multiplier = gel_multiplier(conditions.temperature_c, conditions.humidity_percent);

    let raw_units = (total_hours * defaults::BASE_UNITS_PER_HOUR * multiplier).ceil();
    let total_units = (raw_units.max(0.0) as u32).max(defaults::MIN_TOTAL_UNITS);

    let caffeine_cap_by_time = (total_hours - 1.0).floor();
    let caffeine_cap_by_count = (total_units / 3) as f64;
    let caffeinated_units = caffeine_cap_by_time.min(caffeine_cap_by_count).max(0.0) as u32;
    let regular_units = total_units - caffeinated_units;

    debug!(
        "{} min at {}°C/{}%: multiplier {:.3}, {} units ({} caffeinated)",
        conditions.finish_time_minutes,
        conditions.temperature_c,
        conditions.humidity_percent,
        multiplier,
        total_units,
        caffeinated_units
    );

    let hydration = hydration_per_hour(
        conditions.body_weight_kg,
        conditions.temperature_c,
        conditions.humidity_percent,
    );

    let plan = FuelingPlan {
        total_units,
        regular_units,
        caffeinated_units,
        timeline: build_timeline(conditions.finish_time_minutes, total_units, regular_units),
        hydration_ml_per_hour: hydration.round().max(0.0) as u32,
        carb_loading: carb_loading(conditions.body_weight_kg),
        brand: conditions.brand,
    };

    info!(
        "Fueling plan ready: {} gels, {} ml/h",
        plan.total_units, plan.hydration_ml_per_hour
    );
    plan
}

/// JS entry point: takes a serialized `RaceConditions`, returns a serialized
/// `FuelingPlan`, or an error string when the input cannot be read or is
/// out of range.
#[wasm_bindgen]
pub fn compute_fueling_plan(conditions_js: JsValue) -> JsValue {
    let conditions: RaceConditions = match serde_wasm_bindgen::from_value(conditions_js) {
        Ok(c) => c,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize conditions: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    if let Err(e) = conditions.check() {
        warn!("Rejected conditions: {}", e);
        return serde_wasm_bindgen::to_value(&format!("Invalid conditions: {}", e))
            .unwrap_or(JsValue::NULL);
    }

    serde_wasm_bindgen::to_value(&compute(&conditions)).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(minutes: u32, weight: f64, temp: f64, humidity: f64) -> RaceConditions {
        RaceConditions {
            finish_time_minutes: minutes,
            body_weight_kg: weight,
            temperature_c: temp,
            humidity_percent: humidity,
            brand: Brand::Maurten,
        }
    }

    #[test]
    fn test_four_hour_copenhagen_plan() {
        let plan = compute(&conditions(240, 70.0, 14.0, 59.0));
        assert_eq!(plan.total_units, 8);
        assert_eq!(plan.caffeinated_units, 2);
        assert_eq!(plan.regular_units, 6);
        assert_eq!(plan.hydration_ml_per_hour, 280);
        assert_eq!(
            plan.carb_loading,
            CarbLoading {
                daily_carbs_grams: 560,
                daily_calories_from_carbs: 2240,
                breakfast_carbs_grams: 140,
                breakfast_calories_from_carbs: 560,
            }
        );
    }

    #[test]
    fn test_hot_humid_five_hour_plan() {
        let c = conditions(300, 80.0, 25.0, 70.0);
        assert!((gel_multiplier(c.temperature_c, c.humidity_percent) - 1.30).abs() < 1e-9);

        let plan = compute(&c);
        assert_eq!(plan.total_units, 13);
        assert_eq!(plan.caffeinated_units, 4);
        assert_eq!(plan.regular_units, 9);
        // 320 * 1.25 * 1.10
        assert_eq!(plan.hydration_ml_per_hour, 440);
    }

    #[test]
    fn test_race_duration_caps_caffeine() {
        // 2.5 h at 40°C doubles the gels, but only one hour past the first
        // counts toward caffeine
        let plan = compute(&conditions(150, 70.0, 40.0, 59.0));
        assert_eq!(plan.total_units, 10);
        assert_eq!(plan.caffeinated_units, 1);
        assert_eq!(plan.regular_units, 9);
        assert!(plan.timeline[..9].iter().all(|e| !e.caffeinated));
        assert!(plan.timeline[9].caffeinated);
    }

    #[test]
    fn test_check_accepts_realistic_conditions() {
        assert_eq!(conditions(240, 70.0, 14.0, 59.0).check(), Ok(()));
        assert_eq!(conditions(1440, 500.0, 60.0, 100.0).check(), Ok(()));
        assert_eq!(conditions(1, 1.0, -50.0, 0.0).check(), Ok(()));
    }

    #[test]
    fn test_check_rejects_extreme_conditions() {
        let extreme = [
            conditions(240, 70.0, 1.0e12, 59.0),
            conditions(240, 70.0, f64::NAN, 59.0),
            conditions(240, 70.0, 14.0, 120.0),
            conditions(240, 70.0, 14.0, -1.0),
            conditions(240, 0.0, 14.0, 59.0),
            conditions(240, f64::INFINITY, 14.0, 59.0),
            conditions(0, 70.0, 14.0, 59.0),
            conditions(u32::MAX, 70.0, 14.0, 59.0),
        ];
        for c in extreme {
            assert!(
                matches!(c.check(), Err(InputError::OutOfRange { .. })),
                "accepted {:?}",
                c
            );
        }
        assert_eq!(
            conditions(240, 70.0, 1.0e12, 59.0).check(),
            Err(InputError::OutOfRange {
                field: "temperature",
                min: -50.0,
                max: 60.0
            })
        );
    }

    #[test]
    fn test_timeline_with_huge_finish_time() {
        // u32::MAX / 3 = 1_431_655_765 minute spacing
        let timeline = build_timeline(u32::MAX, 3, 2);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].offset_minutes, 30);
        assert_eq!(timeline[2].offset_minutes, 2_863_311_560);
        assert!(timeline.windows(2).all(|w| w[0].offset_minutes <= w[1].offset_minutes));
        assert!(timeline[2].caffeinated);
    }

    #[test]
    fn test_multiplier_thresholds_are_exclusive() {
        assert_eq!(gel_multiplier(20.0, 60.0), 1.0);
        assert!((gel_multiplier(22.0, 0.0) - 1.1).abs() < 1e-9);
        assert!((gel_multiplier(0.0, 80.0) - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_shape() {
        let plan = compute(&conditions(240, 70.0, 14.0, 59.0));
        assert_eq!(plan.timeline.len(), plan.total_units as usize);
        assert_eq!(plan.timeline[0].offset_minutes, 30);
        // 240 / 8 = 30 minute spacing
        let offsets: Vec<u32> = plan.timeline.iter().map(|e| e.offset_minutes).collect();
        assert_eq!(offsets, vec![30, 60, 90, 120, 150, 180, 210, 240]);
        assert!(plan.timeline.windows(2).all(|w| w[0].offset_minutes <= w[1].offset_minutes));
    }

    #[test]
    fn test_caffeinated_units_are_at_the_end() {
        let plan = compute(&conditions(300, 80.0, 25.0, 70.0));
        let flags: Vec<bool> = plan.timeline.iter().map(|e| e.caffeinated).collect();
        let regular = plan.regular_units as usize;
        assert!(flags[..regular].iter().all(|&c| !c));
        assert!(flags[regular..].iter().all(|&c| c));
    }

    #[test]
    fn test_short_target_clamps_caffeine_to_zero() {
        let plan = compute(&conditions(50, 60.0, 14.0, 59.0));
        assert_eq!(plan.total_units, 2);
        assert_eq!(plan.caffeinated_units, 0);
        assert_eq!(plan.regular_units, 2);
        // 50 / 2 = 25 minute spacing
        assert_eq!(plan.timeline[1].offset_minutes, 55);
    }

    #[test]
    fn test_one_minute_target_still_gets_two_units() {
        let plan = compute(&conditions(1, 60.0, 14.0, 59.0));
        assert_eq!(plan.total_units, 2);
        assert_eq!(plan.caffeinated_units, 0);
        // interval floors to 0, so both units land on minute 30
        assert!(plan.timeline.iter().all(|e| e.offset_minutes == 30));
    }

    #[test]
    fn test_units_always_add_up() {
        for minutes in (1..=480).step_by(7) {
            for temp in [5.0, 14.0, 21.0, 30.0] {
                for humidity in [40.0, 59.0, 75.0, 100.0] {
                    let plan = compute(&conditions(minutes, 70.0, temp, humidity));
                    assert!(plan.total_units >= 2);
                    assert_eq!(plan.regular_units + plan.caffeinated_units, plan.total_units);
                    assert!(plan.caffeinated_units <= plan.total_units / 3);
                    let time_cap = (minutes as f64 / 60.0 - 1.0).floor().max(0.0);
                    assert!(plan.caffeinated_units as f64 <= time_cap);
                    assert_eq!(plan.timeline.len(), plan.total_units as usize);
                    assert_eq!(plan.timeline[0].offset_minutes, 30);
                }
            }
        }
    }

    #[test]
    fn test_heat_never_reduces_units_or_hydration() {
        let mut previous = compute(&conditions(230, 65.0, 20.0, 59.0));
        for step in 1..=30 {
            let temp = 20.0 + step as f64 * 0.5;
            let plan = compute(&conditions(230, 65.0, temp, 59.0));
            assert!(plan.total_units >= previous.total_units);
            assert!(plan.hydration_ml_per_hour >= previous.hydration_ml_per_hour);
            previous = plan;
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let c = conditions(217, 72.5, 23.0, 66.0);
        assert_eq!(compute(&c), compute(&c));
    }

    #[test]
    fn test_brand_changes_names_not_quantities() {
        let mut c = conditions(240, 70.0, 14.0, 59.0);
        let maurten = compute(&c);
        c.brand = Brand::Powerbar;
        let powerbar = compute(&c);
        assert_eq!(maurten.total_units, powerbar.total_units);
        assert_eq!(maurten.timeline, powerbar.timeline);

        assert_eq!(maurten.timeline_lines()[0], "0:30 - Take Maurten GEL 100");
        assert_eq!(maurten.timeline_lines()[7], "4:00 - Take Maurten CAF 100");
        assert_eq!(
            powerbar.timeline_lines()[7],
            "4:00 - Take Powerbar PowerGel Hydro Caffeine"
        );
        assert_eq!(
            powerbar.summary(),
            "You will need 8 gels in total (6 regular Powerbar PowerGel Original and 2 Powerbar PowerGel Hydro Caffeine)"
        );
    }

    #[test]
    fn test_brand_from_name() {
        assert_eq!(Brand::from_name("Maurten"), Some(Brand::Maurten));
        assert_eq!(Brand::from_name(" powerbar "), Some(Brand::Powerbar));
        assert_eq!(Brand::from_name("SiS"), None);
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(30), "0:30");
        assert_eq!(format_offset(65), "1:05");
        assert_eq!(format_offset(240), "4:00");
    }

    #[test]
    fn test_plan_serializes_with_snake_case_fields() {
        let plan = compute(&conditions(240, 70.0, 14.0, 59.0));
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["total_units"], 8);
        assert_eq!(json["brand"], "Maurten");
        assert_eq!(json["timeline"][7]["caffeinated"], true);
        assert_eq!(json["carb_loading"]["daily_carbs_grams"], 560);
    }
}
