//! Static race-week content: venues, city comparisons, the day-by-day
//! overview and the Easter-egg table.
//!
//! Tabular content lives in embedded CSV files under `src/data/` and is
//! parsed once on first use.

use crate::CarbLoading;
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

static COFFEE_SHOPS: Lazy<Vec<String>> = Lazy::new(|| {
    read_names_from_csv_string(include_str!("data/coffee_shops.csv")).unwrap_or_default()
});
static BARS: Lazy<Vec<String>> =
    Lazy::new(|| read_names_from_csv_string(include_str!("data/bars.csv")).unwrap_or_default());
static CITY_COMPARISONS: Lazy<HashMap<String, CityComparison>> = Lazy::new(|| {
    read_cities_from_csv_string(include_str!("data/cities.csv"))
        .unwrap_or_default()
        .into_iter()
        .map(|c| (normalize(&c.city), c))
        .collect()
});

const DENMARK_KEYWORDS: [&str; 2] = ["copenhagen", "denmark"];
const LONG_HAUL_KEYWORDS: [&str; 6] = ["new york", "usa", "america", "canada", "australia", "asia"];

#[derive(Debug, Deserialize)]
struct NameRecord {
    name: String,
}

/// How Copenhagen compares with a runner's home city.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityComparison {
    pub city: String,
    pub elevation: String,
    pub humidity: String,
    pub temp: String,
    pub timezone: String,
    pub country: String,
}

/// Read a single `name` column. Rows that fail to parse are skipped.
pub fn read_names_from_csv_string(csv_content: &str) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::Reader::from_reader(csv_content.as_bytes());
    let mut names = Vec::new();
    for (i, record) in reader.deserialize::<NameRecord>().enumerate() {
        match record {
            Ok(r) if !r.name.trim().is_empty() => names.push(r.name.trim().to_string()),
            Ok(_) => debug!("Warning: empty name on row {}", i + 1),
            Err(e) => debug!("Warning: {} on row {}", e, i + 1),
        }
    }
    info!("Loaded {} names from CSV content", names.len());
    Ok(names)
}

pub fn read_cities_from_csv_string(csv_content: &str) -> Result<Vec<CityComparison>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());
    let mut cities = Vec::new();
    for (i, record) in reader.deserialize::<CityComparison>().enumerate() {
        match record {
            Ok(city) => cities.push(city),
            Err(e) => debug!("Warning: {} on row {}", e, i + 1),
        }
    }
    Ok(cities)
}

/// Trim, lowercase and collapse inner whitespace.
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn coffee_shops() -> &'static [String] {
    &COFFEE_SHOPS
}

pub fn bars() -> &'static [String] {
    &BARS
}

/// The first `coffee_love` coffee shops.
pub fn coffee_recommendations(coffee_love: u8) -> &'static [String] {
    let n = (coffee_love as usize).min(COFFEE_SHOPS.len());
    &COFFEE_SHOPS[..n]
}

/// The first `party_love` bars.
pub fn bar_recommendations(party_love: u8) -> &'static [String] {
    let n = (party_love as usize).min(BARS.len());
    &BARS[..n]
}

pub fn city_comparison(city: &str) -> Option<&'static CityComparison> {
    if city.trim().is_empty() {
        return None;
    }
    CITY_COMPARISONS.get(&normalize(city))
}

pub fn is_denmark(city: &str) -> bool {
    let key = normalize(city);
    DENMARK_KEYWORDS.iter().any(|k| key.contains(k))
}

pub fn needs_jetlag_advice(city: &str) -> bool {
    let key = normalize(city);
    LONG_HAUL_KEYWORDS.iter().any(|k| key.contains(k))
}

pub const JETLAG_TIP: &str = "Try to arrive a few days early, get sunlight in the morning, and avoid caffeine late in the day.";

pub struct Link {
    pub label: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

pub const GETTING_AROUND: [Link; 2] = [
    Link { label: "Metro", text: "m.dk", url: "https://m.dk/" },
    Link { label: "Donkey Republic bikes", text: "donkey.bike", url: "https://www.donkey.bike/" },
];

pub struct Afterparty {
    pub name: &'static str,
    pub time: &'static str,
    pub place: &'static str,
    pub url: &'static str,
}

pub const AFTERPARTY: Afterparty = Afterparty {
    name: "NBRO Unofficial Official Afterparty",
    time: "Sunday 7:00 PM",
    place: "Søpavillonen",
    url: "https://nbro.run/",
};

pub fn show_afterparty(party_love: u8) -> bool {
    party_love > 1
}

pub const CARB_SOURCES: [&str; 9] = [
    "White rice",
    "Pasta",
    "White bread",
    "Potatoes",
    "Bananas",
    "Low-fiber cereals (e.g., Frosties)",
    "Sports drinks (e.g., Maurten Drink Mix)",
    "Fruit juice",
    "Jam/honey",
];

pub const FOODS_TO_AVOID: [&str; 5] = [
    "High-fiber foods (brown bread, beans, lentils)",
    "Fatty foods (fried, creamy sauces)",
    "Spicy foods",
    "Alcohol",
    "Large amounts of raw vegetables",
];

pub const BREAKFAST_OPTIONS: [&str; 4] = [
    "Frosties with milk (28g carbs per 30g serving)",
    "White bread with honey/jam (15g carbs per slice)",
    "Banana (23g carbs)",
    "Sports drink (15g carbs per 250ml)",
];

pub const BREAKFAST_TIMING: &str = "Eat breakfast 3–4 hours before the race. Sip Maurten Drink Mix or sports drink up to 30 minutes before the start.";

pub struct ExpoNote {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbTarget {
    /// Carb loading, spread over the day.
    Daily,
    /// Race-morning breakfast, 3–4 hours before the start.
    Breakfast,
}

pub struct RaceWeekDay {
    pub label: &'static str,
    pub expo: &'static [ExpoNote],
    pub carb_target: CarbTarget,
    pub brand_tip: &'static str,
    pub shakeout: &'static str,
    pub sleep: &'static str,
}

impl RaceWeekDay {
    pub fn carb_line(&self, carbs: &CarbLoading) -> String {
        match self.carb_target {
            CarbTarget::Daily => format!(
                "{}g ({} kcal) throughout the day",
                carbs.daily_carbs_grams, carbs.daily_calories_from_carbs
            ),
            CarbTarget::Breakfast => format!(
                "{}g ({} kcal) 3–4 hours before start",
                carbs.breakfast_carbs_grams, carbs.breakfast_calories_from_carbs
            ),
        }
    }

    pub fn carb_sources(&self) -> String {
        match self.carb_target {
            CarbTarget::Daily => CARB_SOURCES.join(", "),
            CarbTarget::Breakfast => "White bread with jam/honey, Frosties with milk, bananas, Maurten Drink Mix, sports drink".to_string(),
        }
    }

    pub fn foods_to_avoid(&self) -> String {
        match self.carb_target {
            CarbTarget::Daily => FOODS_TO_AVOID.join(", "),
            CarbTarget::Breakfast => "High-fiber, fatty, or spicy foods; dairy if sensitive".to_string(),
        }
    }
}

pub const RACE_WEEK: [RaceWeekDay; 4] = [
    RaceWeekDay {
        label: "Thursday (4 days out)",
        expo: &[ExpoNote {
            title: "LØBEREN EXPO OPENS: 14:00 – 19:00",
            body: "Kick off the Expo! Be the first to see the world's biggest brands, their newest products, and meet running experts. Get the official race newspaper and limited-edition merchandise.",
        }],
        carb_target: CarbTarget::Daily,
        brand_tip: "Start sipping Maurten Drink Mix 160/320 with meals and snacks",
        shakeout: "Easy 20–40 min run in the morning or midday",
        sleep: "Aim for 8+ hours, keep a regular bedtime",
    },
    RaceWeekDay {
        label: "Friday (3 days out)",
        expo: &[
            ExpoNote {
                title: "LØBEREN EXPO OPENS: 12:00 – 19:00",
                body: "Experience the huge running universe. Merch. Newspaper. The biggest and best brands. The party continues.",
            },
            ExpoNote {
                title: "SHAKEOUT RUN & CPH MARATHON: 17:00–18:00",
                body: "Everyone is welcome! Get a unique insight into the course, the thoughts behind it, and cool spots along the route. Different pace groups, organized with Sparta. After the run: alcohol-free beer from Erdinger, sausage rolls, and Red Bull. Free, but requires sign up in the Facebook event.",
            },
        ],
        carb_target: CarbTarget::Daily,
        brand_tip: "Use Maurten Drink Mix with snacks, and consider a Maurten GEL 100 after your shakeout run",
        shakeout: "Easy 15–30 min run, ideally in the morning or join the Expo shakeout at 17:00",
        sleep: "Prioritize 8+ hours, wind down early",
    },
    RaceWeekDay {
        label: "Saturday (2 days out)",
        expo: &[
            ExpoNote {
                title: "LØBEREN EXPO OPENS: 10:00 – 19:00",
                body: "Come and experience the huge running universe!",
            },
            ExpoNote {
                title: "FINAL BIB PICK-UP: 17:00 – 19:00",
                body: "The Expo closes at 19:00. If you haven't picked up your race bib, make sure to do so!",
            },
        ],
        carb_target: CarbTarget::Daily,
        brand_tip: "Use Maurten Drink Mix and snacks, keep fueling up",
        shakeout: "Optional 10–20 min jog, keep it easy",
        sleep: "Prioritize 8+ hours, get to bed early",
    },
    RaceWeekDay {
        label: "Sunday (Race Day)",
        expo: &[],
        carb_target: CarbTarget::Breakfast,
        brand_tip: "Maurten Drink Mix or GEL 100 as part of breakfast and pre-race hydration",
        shakeout: "Optional 5–10 min jog and drills 2–3 hours before start",
        sleep: "Don't stress if you sleep less, but try to rest and stay off your feet",
    },
];

/// Coffee tip for race-week day `day_index`, shown while `coffee_love`
/// exceeds the index.
pub fn coffee_tip(day_index: usize, coffee_love: u8) -> Option<&'static str> {
    day_tip(coffee_recommendations(coffee_love), day_index, coffee_love)
}

/// Bar tip for race-week day `day_index`, shown while `party_love`
/// exceeds the index.
pub fn bar_tip(day_index: usize, party_love: u8) -> Option<&'static str> {
    day_tip(bar_recommendations(party_love), day_index, party_love)
}

fn day_tip(recs: &'static [String], day_index: usize, love: u8) -> Option<&'static str> {
    if (love as usize) <= day_index || recs.is_empty() {
        return None;
    }
    Some(recs[day_index % recs.len()].as_str())
}

/// Novelty responses, keyed by what the runner typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasterEgg {
    LocalLegend,
    DancingOnMyOwn,
    DontStopMeNow,
    EyeOfTheTiger,
    HarderBetterFasterStronger,
}

/// Placeholder entries, not taken from any published list.
const EASTER_EGGS: [(&str, EasterEgg); 8] = [
    ("copenhagen", EasterEgg::LocalLegend),
    ("københavn", EasterEgg::LocalLegend),
    ("robyn", EasterEgg::DancingOnMyOwn),
    ("queen", EasterEgg::DontStopMeNow),
    ("freddie mercury", EasterEgg::DontStopMeNow),
    ("survivor", EasterEgg::EyeOfTheTiger),
    ("daft punk", EasterEgg::HarderBetterFasterStronger),
    ("kanye west", EasterEgg::HarderBetterFasterStronger),
];

pub fn easter_egg(input: &str) -> Option<EasterEgg> {
    let key = normalize(input);
    EASTER_EGGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, egg)| egg)
}

impl EasterEgg {
    pub fn message(self) -> &'static str {
        match self {
            EasterEgg::LocalLegend => "Home crowd! You already know every cobblestone on the course.",
            EasterEgg::DancingOnMyOwn => "Save the dancing for the finish line. Or don't.",
            EasterEgg::DontStopMeNow => "You're having such a good time. Keep the gels coming.",
            EasterEgg::EyeOfTheTiger => "Rising up to the challenge of your rival: kilometer 35.",
            EasterEgg::HarderBetterFasterStronger => "Work it, make it, do it. Then take your CAF.",
        }
    }

    /// Song to queue for the last 10k.
    pub fn track(self) -> &'static str {
        match self {
            EasterEgg::LocalLegend => "Alphabeat - Fascination",
            EasterEgg::DancingOnMyOwn => "Robyn - Dancing On My Own",
            EasterEgg::DontStopMeNow => "Queen - Don't Stop Me Now",
            EasterEgg::EyeOfTheTiger => "Survivor - Eye of the Tiger",
            EasterEgg::HarderBetterFasterStronger => "Daft Punk - Harder, Better, Faster, Stronger",
        }
    }
}
