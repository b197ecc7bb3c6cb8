use crate::config::*;
use crate::forecast::Forecast;
use crate::{Brand, RaceConditions};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// Target marathon time, hours:minutes
static TIME_HOURS_MINUTES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// Input validation error types surfaced next to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    MissingField(&'static str),
    MalformedTime,
    MalformedNumber(&'static str),
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::MissingField(field) => write!(f, "Please fill in {}", field),
            InputError::MalformedTime => {
                write!(f, "Please enter time in HH:MM format (e.g., 04:00)")
            }
            InputError::MalformedNumber(field) => {
                write!(f, "Please enter a valid number for {}", field)
            }
            InputError::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a target finish time in `H:MM` or `HH:MM` format to total minutes.
///
/// # Examples
/// ```
/// use raceweek_calculator::utils::parse_target_time;
/// assert_eq!(parse_target_time("04:00"), Ok(240));
/// assert_eq!(parse_target_time("3:45"), Ok(225));
/// ```
pub fn parse_target_time(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField("target time"));
    }

    let captures = TIME_HOURS_MINUTES_REGEX
        .captures(trimmed)
        .ok_or(InputError::MalformedTime)?;
    let hours: u32 = captures[1].parse().map_err(|_| InputError::MalformedTime)?;
    let minutes: u32 = captures[2].parse().map_err(|_| InputError::MalformedTime)?;

    if minutes > 59 {
        return Err(InputError::MalformedTime);
    }
    let total = hours * 60 + minutes;
    if total == 0 {
        return Err(InputError::MalformedTime);
    }
    Ok(total)
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &'static str,
) -> Result<T, InputError>
where
    T: std::str::FromStr + Into<f64> + PartialOrd + Copy,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField(field_name));
    }

    let val: T = trimmed
        .parse()
        .map_err(|_| InputError::MalformedNumber(field_name))?;
    let out_of_range = || InputError::OutOfRange {
        field: field_name,
        min: min.map(Into::<f64>::into).unwrap_or(f64::MIN),
        max: max.map(Into::<f64>::into).unwrap_or(f64::MAX),
    };

    if let Some(min_val) = min {
        if val < min_val {
            return Err(out_of_range());
        }
    }
    if let Some(max_val) = max {
        if val > max_val {
            return Err(out_of_range());
        }
    }
    Ok(val)
}

/// Validate body weight input (kg)
pub fn validate_weight(input: &str) -> Result<f64, InputError> {
    let weight = validate_numeric_input(input, Some(MIN_WEIGHT_KG), Some(MAX_WEIGHT_KG), "weight")?;
    // "NaN" parses as f64 and slips past both comparisons
    if weight.is_nan() {
        return Err(InputError::MalformedNumber("weight"));
    }
    Ok(weight)
}

/// Validate weekly average mileage input (km)
pub fn validate_weekly_mileage(input: &str) -> Result<f64, InputError> {
    validate_mileage(input, MAX_WEEKLY_MILEAGE_KM, "weekly mileage")
}

/// Validate peak week mileage input (km)
pub fn validate_peak_mileage(input: &str) -> Result<f64, InputError> {
    validate_mileage(input, MAX_PEAK_MILEAGE_KM, "peak mileage")
}

fn validate_mileage(input: &str, max: f64, field: &'static str) -> Result<f64, InputError> {
    let km = validate_numeric_input(input, Some(MIN_MILEAGE_KM), Some(max), field)?;
    if km.is_nan() {
        return Err(InputError::MalformedNumber(field));
    }
    Ok(km)
}

/// Raw form state, exactly as typed by the runner.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceForm {
    pub target_time: String,
    pub weight: String,
    pub weekly_mileage: String,
    pub peak_mileage: String,
    pub home_city: String,
    pub favorite_artist: String,
    pub coffee_love: u8,
    pub party_love: u8,
    pub brand: Brand,
}

impl Default for RaceForm {
    fn default() -> Self {
        RaceForm {
            target_time: String::new(),
            weight: String::new(),
            weekly_mileage: String::new(),
            peak_mileage: String::new(),
            home_city: String::new(),
            favorite_artist: String::new(),
            coffee_love: DEFAULT_COFFEE_LOVE,
            party_love: DEFAULT_PARTY_LOVE,
            brand: Brand::default(),
        }
    }
}

/// A form that passed validation, ready for the calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub conditions: RaceConditions,
    pub weekly_mileage_km: f64,
    pub peak_mileage_km: f64,
    pub home_city: String,
    pub favorite_artist: Option<String>,
    pub coffee_love: u8,
    pub party_love: u8,
}

impl RaceForm {
    /// Parse and validate every field. Time and weight are checked first.
    pub fn validate(&self, forecast: &Forecast) -> Result<ValidatedForm, InputError> {
        let finish_time_minutes = parse_target_time(&self.target_time)?;
        let body_weight_kg = validate_weight(&self.weight)?;
        let weekly_mileage_km = validate_weekly_mileage(&self.weekly_mileage)?;
        let peak_mileage_km = validate_peak_mileage(&self.peak_mileage)?;

        let home_city = self.home_city.trim();
        if home_city.is_empty() {
            return Err(InputError::MissingField("home city"));
        }

        let artist = self.favorite_artist.trim();
        let favorite_artist = (!artist.is_empty()).then(|| artist.to_string());

        debug!(
            "Validated form: {} min, {} kg, {}",
            finish_time_minutes, body_weight_kg, home_city
        );

        Ok(ValidatedForm {
            conditions: forecast.conditions(finish_time_minutes, body_weight_kg, self.brand),
            weekly_mileage_km,
            peak_mileage_km,
            home_city: home_city.to_string(),
            favorite_artist,
            coffee_love: self.coffee_love.clamp(MIN_LOVE, MAX_LOVE),
            party_love: self.party_love.clamp(MIN_LOVE, MAX_LOVE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::COPENHAGEN_RACE_DAY;

    fn filled_form() -> RaceForm {
        RaceForm {
            target_time: "04:00".to_string(),
            weight: "70".to_string(),
            weekly_mileage: "50".to_string(),
            peak_mileage: "80".to_string(),
            home_city: " London ".to_string(),
            ..RaceForm::default()
        }
    }

    #[test]
    fn test_parse_target_time() {
        assert_eq!(parse_target_time("04:00"), Ok(240));
        assert_eq!(parse_target_time("3:29"), Ok(209));
        assert_eq!(parse_target_time(" 05:15 "), Ok(315));
    }

    #[test]
    fn test_parse_target_time_errors() {
        assert_eq!(parse_target_time(""), Err(InputError::MissingField("target time")));
        assert_eq!(parse_target_time("   "), Err(InputError::MissingField("target time")));
        assert_eq!(parse_target_time("four hours"), Err(InputError::MalformedTime));
        assert_eq!(parse_target_time("4h"), Err(InputError::MalformedTime));
        assert_eq!(parse_target_time("03:75"), Err(InputError::MalformedTime));
        assert_eq!(parse_target_time("00:00"), Err(InputError::MalformedTime));
    }

    #[test]
    fn test_validate_weight() {
        assert_eq!(validate_weight("70"), Ok(70.0));
        assert_eq!(validate_weight("62.5"), Ok(62.5));
        assert_eq!(validate_weight(""), Err(InputError::MissingField("weight")));
        assert_eq!(validate_weight("seventy"), Err(InputError::MalformedNumber("weight")));
        assert_eq!(validate_weight("NaN"), Err(InputError::MalformedNumber("weight")));
        assert!(matches!(
            validate_weight("12"),
            Err(InputError::OutOfRange { field: "weight", .. })
        ));
        assert!(matches!(
            validate_weight("200"),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_mileage() {
        assert_eq!(validate_weekly_mileage("0"), Ok(0.0));
        assert_eq!(validate_peak_mileage("400"), Ok(400.0));
        assert!(validate_weekly_mileage("301").is_err());
        assert!(validate_peak_mileage("-5").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::MalformedTime.to_string(),
            "Please enter time in HH:MM format (e.g., 04:00)"
        );
        assert_eq!(
            InputError::MalformedNumber("weight").to_string(),
            "Please enter a valid number for weight"
        );
        assert_eq!(
            InputError::OutOfRange { field: "weight", min: 30.0, max: 150.0 }.to_string(),
            "weight must be between 30 and 150"
        );
    }

    #[test]
    fn test_form_validates_into_conditions() {
        let validated = filled_form().validate(&COPENHAGEN_RACE_DAY).unwrap();
        assert_eq!(validated.conditions.finish_time_minutes, 240);
        assert_eq!(validated.conditions.body_weight_kg, 70.0);
        assert_eq!(validated.conditions.temperature_c, 14.0);
        assert_eq!(validated.home_city, "London");
        assert_eq!(validated.favorite_artist, None);
        assert_eq!(validated.coffee_love, DEFAULT_COFFEE_LOVE);
    }

    #[test]
    fn test_form_checks_time_before_weight() {
        let form = RaceForm {
            target_time: String::new(),
            weight: "abc".to_string(),
            ..filled_form()
        };
        assert_eq!(
            form.validate(&COPENHAGEN_RACE_DAY),
            Err(InputError::MissingField("target time"))
        );
    }

    #[test]
    fn test_form_requires_home_city() {
        let form = RaceForm {
            home_city: "  ".to_string(),
            ..filled_form()
        };
        assert_eq!(
            form.validate(&COPENHAGEN_RACE_DAY),
            Err(InputError::MissingField("home city"))
        );
    }

    #[test]
    fn test_form_clamps_sliders_and_keeps_artist() {
        let form = RaceForm {
            coffee_love: 9,
            party_love: 0,
            favorite_artist: " Robyn ".to_string(),
            ..filled_form()
        };
        let validated = form.validate(&COPENHAGEN_RACE_DAY).unwrap();
        assert_eq!(validated.coffee_love, MAX_LOVE);
        assert_eq!(validated.party_love, MIN_LOVE);
        assert_eq!(validated.favorite_artist.as_deref(), Some("Robyn"));
    }
}
