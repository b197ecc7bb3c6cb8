//! Pure Yew view components for the Raceweek Calculator UI.
//!
//! This module contains stateless components that render based on props.

use raceweek_calculator::content::{
    self, bar_tip, city_comparison, coffee_tip, is_denmark, needs_jetlag_advice, EasterEgg,
    AFTERPARTY, BREAKFAST_OPTIONS, BREAKFAST_TIMING, GETTING_AROUND, JETLAG_TIP, RACE_WEEK,
};
use raceweek_calculator::forecast::Forecast;
use raceweek_calculator::{CarbLoading, FuelingPlan};
use yew::prelude::*;

/// Blue highlight box for coffee, party and travel tips.
#[derive(Properties, PartialEq)]
pub struct TipBoxProps {
    pub children: Html,
}

#[function_component(TipBox)]
pub fn tip_box(props: &TipBoxProps) -> Html {
    html! {
        <div class="tip-box">{ props.children.clone() }</div>
    }
}

/// Getting-around links for runners travelling in, plus a jetlag tip for
/// long-haul home cities.
pub fn render_travel_info(city: &str) -> Html {
    if is_denmark(city) {
        return html! {};
    }
    html! {
        <TipBox>
            <p class="tip-title">{ "Getting around in Copenhagen" }</p>
            { GETTING_AROUND.iter().map(|link| html! {
                <p>
                    { "• " }<b>{ format!("{}:", link.label) }</b>{ " " }
                    <a href={link.url} target="_blank" rel="noopener noreferrer">{ link.text }</a>
                </p>
            }).collect::<Html>() }
            if needs_jetlag_advice(city) {
                <p class="jetlag-tip"><b>{ "Jetlag tip:" }</b>{ " " }{ JETLAG_TIP }</p>
            }
        </TipBox>
    }
}

pub fn render_city_comparison(city: &str) -> Html {
    let Some(comp) = city_comparison(city) else {
        return html! {};
    };
    html! {
        <TipBox>
            <p class="tip-title">{ format!("How will Copenhagen feel compared to {}?", city) }</p>
            <p>{ "• " }<b>{ "Elevation:" }</b>{ format!(" {}", comp.elevation) }</p>
            <p>{ "• " }<b>{ "Humidity:" }</b>{ format!(" {}", comp.humidity) }</p>
            <p>{ "• " }<b>{ "Temperature:" }</b>{ format!(" {}", comp.temp) }</p>
        </TipBox>
    }
}

#[derive(Properties, PartialEq)]
pub struct ForecastProps {
    pub forecast: Forecast,
}

/// Race-day weather card.
#[function_component(WeatherForecast)]
pub fn weather_forecast(props: &ForecastProps) -> Html {
    let f = &props.forecast;
    html! {
        <div class="forecast-card">
            <p class="tip-title">{ "Weather Forecast for Race Day" }</p>
            <p><b>{ "Date: " }</b>{ f.date }</p>
            <p><b>{ "Conditions: " }</b>{ f.conditions }</p>
            <p><b>{ "Temperature: " }</b>{ format!("{}°C", f.temperature_c) }</p>
            <p><b>{ "Humidity: " }</b>{ format!("{}%", f.humidity_percent) }</p>
            <p><b>{ "Wind: " }</b>{ f.wind }</p>
            <p><b>{ "UV Index: " }</b>{ format!("{} ({})", f.uv_index, f.uv_label()) }</p>
            <p><b>{ "Sunrise: " }</b>{ f.sunrise }{ " " }<b>{ "Sunset: " }</b>{ f.sunset }</p>
        </div>
    }
}

#[function_component(WeatherExplanation)]
pub fn weather_explanation() -> Html {
    html! {
        <div class="weather-explanation">
            <p class="tip-title">{ "How weather is used in the calculation" }</p>
            <p>{ "The calculator uses the race-day forecast for Copenhagen (temperature and humidity) to adjust your gel and hydration needs. Higher temperature and humidity increase your recommended intake." }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RaceWeekProps {
    pub carb_loading: CarbLoading,
    pub coffee_love: u8,
    pub party_love: u8,
}

/// Thursday-to-Sunday overview: expo schedule, carb targets and tips.
#[function_component(RaceWeekOverview)]
pub fn race_week_overview(props: &RaceWeekProps) -> Html {
    html! {
        <div class="race-week">
            <h2>{ "3-Day Race Week Overview" }</h2>
            { RACE_WEEK.iter().enumerate().map(|(i, day)| html! {
                <div class="race-week-day">
                    <h3>{ day.label }</h3>
                    { day.expo.iter().map(|note| html! {
                        <div class="expo-box">
                            <p class="tip-title">{ note.title }</p>
                            <p>{ note.body }</p>
                        </div>
                    }).collect::<Html>() }
                    if let Some(shop) = coffee_tip(i, props.coffee_love) {
                        <TipBox>
                            <p class="tip-title">{ "Coffee tip:" }</p>
                            <p>{ shop }</p>
                        </TipBox>
                    }
                    <p>{ "• " }<b>{ "Carb target:" }</b>{ format!(" {}", day.carb_line(&props.carb_loading)) }</p>
                    <p>{ "• " }<b>{ "Good carb sources:" }</b>{ format!(" {}", day.carb_sources()) }</p>
                    <p>{ "• " }<b>{ "Include Maurten:" }</b>{ format!(" {}", day.brand_tip) }</p>
                    <p>{ "• " }<b>{ "Foods to avoid:" }</b>{ format!(" {}", day.foods_to_avoid()) }</p>
                    <p>{ "• " }<b>{ "Shakeout run:" }</b>{ format!(" {}", day.shakeout) }</p>
                    <p>{ "• " }<b>{ "Sleep:" }</b>{ format!(" {}", day.sleep) }</p>
                    if let Some(bar) = bar_tip(i, props.party_love) {
                        <TipBox>
                            <p class="tip-title">{ "Bar tip:" }</p>
                            <p>{ bar }</p>
                        </TipBox>
                    }
                </div>
            }).collect::<Html>() }
            if content::show_afterparty(props.party_love) {
                <TipBox>
                    <p class="tip-title">{ "Afterparty:" }</p>
                    <p>
                        { format!("{} at {}, {} (", AFTERPARTY.name, AFTERPARTY.place, AFTERPARTY.time) }
                        <a href={AFTERPARTY.url} target="_blank" rel="noopener noreferrer">{ "details" }</a>
                        { ")" }
                    </p>
                </TipBox>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BreakfastProps {
    pub carb_loading: CarbLoading,
    pub home_city: AttrValue,
}

#[function_component(RaceDayBreakfast)]
pub fn race_day_breakfast(props: &BreakfastProps) -> Html {
    let carbs = &props.carb_loading;
    html! {
        <div class="breakfast">
            <h2>{ "Race Day Breakfast: What to Eat & When" }</h2>
            <table class="breakfast-table">
                <thead>
                    <tr><th>{ "Breakfast Target" }</th><th>{ "Amount" }</th></tr>
                </thead>
                <tbody>
                    <tr><td>{ "Carbohydrates" }</td><td>{ format!("{}g", carbs.breakfast_carbs_grams) }</td></tr>
                    <tr><td>{ "Calories from Carbs" }</td><td>{ format!("{} kcal", carbs.breakfast_calories_from_carbs) }</td></tr>
                </tbody>
            </table>
            <p>{ "Suggested Breakfast Options:" }</p>
            <ul class="check-list">
                { BREAKFAST_OPTIONS.iter().map(|o| html! { <li>{ *o }</li> }).collect::<Html>() }
            </ul>
            <p>{ BREAKFAST_TIMING }</p>
            if needs_jetlag_advice(&props.home_city) {
                <TipBox>
                    <p class="tip-title">{ "Jetlag Tip:" }</p>
                    <p>{ "Arriving from far away? " }{ JETLAG_TIP }{ " Consider adjusting your sleep schedule a few days before travel." }</p>
                </TipBox>
            }
        </div>
    }
}

/// Gel count, hydration and the intake timeline.
pub fn render_plan(plan: &FuelingPlan) -> Html {
    html! {
        <div class="plan">
            <div class="plan-summary">{ plan.summary() }</div>
            <p>{ format!("Recommended hydration: {}ml per hour", plan.hydration_ml_per_hour) }</p>
            <hr />
            <p class="tip-title">{ "Gel Timeline:" }</p>
            <ol class="timeline">
                { plan.timeline_lines().into_iter().zip(plan.timeline.iter()).map(|(line, entry)| {
                    html! {
                        <li class={classes!(entry.caffeinated.then_some("caffeinated"))}>{ line }</li>
                    }
                }).collect::<Html>() }
            </ol>
        </div>
    }
}

pub fn render_coffee_list(coffee_love: u8) -> Html {
    html! {
        <div class="coffee-list">
            <hr />
            <h2>{ "Coffee Recommendations in Copenhagen" }</h2>
            <ul class="check-list">
                { content::coffee_recommendations(coffee_love).iter().map(|shop| html! {
                    <li key={shop.clone()}>{ shop }</li>
                }).collect::<Html>() }
            </ul>
        </div>
    }
}

pub fn render_easter_egg(egg: Option<EasterEgg>) -> Html {
    match egg {
        Some(egg) => html! {
            <TipBox>
                <p>{ egg.message() }</p>
                <p>{ "Queue this for the last 10k: " }<i>{ egg.track() }</i></p>
            </TipBox>
        },
        None => html! {},
    }
}

/// Slider component for the 1–5 coffee/party preferences.
#[derive(Properties, PartialEq)]
pub struct LoveSliderProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: u8,
    pub min: u8,
    pub max: u8,
    pub oninput: Callback<InputEvent>,
}

#[function_component(LoveSlider)]
pub fn love_slider(props: &LoveSliderProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={props.id.clone()}
                    min={props.min.to_string()}
                    max={props.max.to_string()}
                    step="1"
                    value={props.value.to_string()}
                    oninput={props.oninput.clone()}
                />
                <span class="slider-value">{ props.value }</span>
            </div>
        </div>
    }
}

/// Shown while the numbers are "crunching".
#[function_component(CrunchingAnimation)]
pub fn crunching_animation() -> Html {
    html! {
        <div class="crunching">
            <div class="crunching-icon">{ "💻" }</div>
            <div class="math-symbols">
                <span class="float-1">{ "∑" }</span>
                <span class="float-2">{ "π" }</span>
                <span class="float-3">{ "√" }</span>
                <span class="float-4">{ "∞" }</span>
            </div>
            <p>{ "Crunching the numbers..." }</p>
            <div class="spinner"></div>
        </div>
    }
}
