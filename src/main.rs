//! Main module for the Raceweek Calculator application using Yew.
//! Wires UI components, form state hooks and the submit flow.

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use raceweek_calculator::{
    compute,
    config::*,
    content::easter_egg,
    forecast::COPENHAGEN_RACE_DAY,
    utils::{InputError, RaceForm, ValidatedForm},
    Brand, FuelingPlan,
};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{
    render_city_comparison, render_coffee_list, render_easter_egg, render_plan,
    render_travel_info, CrunchingAnimation, LoveSlider, RaceDayBreakfast, RaceWeekOverview,
    WeatherExplanation, WeatherForecast,
};
use hooks::{use_form_field, use_love_slider};

/// A successful submission: the validated form and the plan computed from it.
struct Outcome {
    form: ValidatedForm,
    plan: FuelingPlan,
}

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Validate the raw form against the race-day forecast and compute the plan.
fn calculate(form: &RaceForm) -> Result<Outcome, InputError> {
    let start_time = js_sys::Date::now();
    let validated = form.validate(&COPENHAGEN_RACE_DAY)?;
    let plan = compute(&validated.conditions);
    debug!("Plan computed in {:.2} ms", js_sys::Date::now() - start_time);
    Ok(Outcome {
        form: validated,
        plan,
    })
}

fn scroll_to_top() {
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let target_time = use_form_field("");
    let weight = use_form_field("");
    let weekly_mileage = use_form_field("");
    let peak_mileage = use_form_field("");
    let home_city = use_form_field("");
    let favorite_artist = use_form_field("");
    let coffee_love = use_love_slider(DEFAULT_COFFEE_LOVE, MIN_LOVE, MAX_LOVE);
    let party_love = use_love_slider(DEFAULT_PARTY_LOVE, MIN_LOVE, MAX_LOVE);
    let brand = use_state(Brand::default);

    let outcome = use_state(|| None::<Rc<Outcome>>);
    let is_calculating = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    // Keeps the pending "crunching" timer alive until it fires
    let crunch_timer = use_state(|| None::<Timeout>);

    let brand_onchange = {
        let brand = brand.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(b) = Brand::from_name(&select.value()) {
                brand.set(b);
            }
        })
    };

    let onsubmit = {
        let form = RaceForm {
            target_time: target_time.text.clone(),
            weight: weight.text.clone(),
            weekly_mileage: weekly_mileage.text.clone(),
            peak_mileage: peak_mileage.text.clone(),
            home_city: home_city.text.clone(),
            favorite_artist: favorite_artist.text.clone(),
            coffee_love: coffee_love.value,
            party_love: party_love.value,
            brand: *brand,
        };
        let set_target_text = target_time.set_text.clone();
        let outcome = outcome.clone();
        let is_calculating = is_calculating.clone();
        let error_message = error_message.clone();
        let crunch_timer = crunch_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_calculating.set(true);
            error_message.set(None);

            let form = form.clone();
            let set_target_text = set_target_text.clone();
            let outcome = outcome.clone();
            let is_calculating = is_calculating.clone();
            let error_message = error_message.clone();
            let handle = Timeout::new(CRUNCH_DELAY_MS, move || {
                match calculate(&form) {
                    Ok(result) => {
                        let minutes = result.form.conditions.finish_time_minutes;
                        set_target_text.emit(format!("{:02}:{:02}", minutes / 60, minutes % 60));
                        info!("Showing plan for {}", result.form.home_city);
                        outcome.set(Some(Rc::new(result)));
                        scroll_to_top();
                    }
                    Err(err) => {
                        warn!("Form rejected: {}", err);
                        error_message.set(Some(err.to_string()));
                    }
                }
                is_calculating.set(false);
            });
            crunch_timer.set(Some(handle));
        })
    };

    let recalculate = {
        let outcome = outcome.clone();
        let is_calculating = is_calculating.clone();
        Callback::from(move |_: MouseEvent| {
            outcome.set(None);
            is_calculating.set(false);
        })
    };

    if *is_calculating {
        return html! { <CrunchingAnimation /> };
    }

    if let Some(result) = (*outcome).clone() {
        let form = &result.form;
        let egg = form
            .favorite_artist
            .as_deref()
            .and_then(easter_egg)
            .or_else(|| easter_egg(&form.home_city));
        return html! {
            <div class="results-area">
                { render_travel_info(&form.home_city) }
                { render_city_comparison(&form.home_city) }
                { render_easter_egg(egg) }
                <WeatherForecast forecast={COPENHAGEN_RACE_DAY} />
                <RaceWeekOverview
                    carb_loading={result.plan.carb_loading}
                    coffee_love={form.coffee_love}
                    party_love={form.party_love}
                />
                <RaceDayBreakfast
                    carb_loading={result.plan.carb_loading}
                    home_city={AttrValue::from(form.home_city.clone())}
                />
                <hr />
                { render_plan(&result.plan) }
                { render_coffee_list(form.coffee_love) }
                <button class="btn-secondary" onclick={recalculate}>{ "Recalculate" }</button>
            </div>
        };
    }

    html! {
        <form class="calculator-form" {onsubmit}>
            <WeatherExplanation />

            <h2>{ "Running Details" }</h2>
            <div class="form-group">
                <label for="target_time">{ "Target Marathon Time (HH:MM)" }</label>
                <input
                    type="text"
                    id="target_time"
                    placeholder={DEFAULT_TARGET_TIME}
                    value={target_time.text.clone()}
                    oninput={target_time.on_text_input.clone()}
                />
            </div>
            <div class="form-group">
                <label for="weight">{ "Weight (kg)" }</label>
                <input
                    type="number"
                    id="weight"
                    step="0.1"
                    min={MIN_WEIGHT_KG.to_string()}
                    max={MAX_WEIGHT_KG.to_string()}
                    placeholder={DEFAULT_WEIGHT_KG.to_string()}
                    value={weight.text.clone()}
                    oninput={weight.on_text_input.clone()}
                />
            </div>
            <div class="form-group">
                <label for="weekly_mileage">{ "Weekly average mileage (km)" }</label>
                <input
                    type="number"
                    id="weekly_mileage"
                    min={MIN_MILEAGE_KM.to_string()}
                    max={MAX_WEEKLY_MILEAGE_KM.to_string()}
                    placeholder={DEFAULT_WEEKLY_MILEAGE_KM.to_string()}
                    value={weekly_mileage.text.clone()}
                    oninput={weekly_mileage.on_text_input.clone()}
                />
            </div>
            <div class="form-group">
                <label for="peak_mileage">{ "Peak week mileage (km)" }</label>
                <input
                    type="number"
                    id="peak_mileage"
                    min={MIN_MILEAGE_KM.to_string()}
                    max={MAX_PEAK_MILEAGE_KM.to_string()}
                    placeholder={DEFAULT_PEAK_MILEAGE_KM.to_string()}
                    value={peak_mileage.text.clone()}
                    oninput={peak_mileage.on_text_input.clone()}
                />
            </div>

            <h2>{ "Social Details" }</h2>
            <div class="form-group">
                <label for="home_city">{ "Home city" }</label>
                <input
                    type="text"
                    id="home_city"
                    placeholder="e.g. London"
                    value={home_city.text.clone()}
                    oninput={home_city.on_text_input.clone()}
                />
            </div>
            <div class="form-group">
                <label for="favorite_artist">{ "Favorite artist (optional)" }</label>
                <input
                    type="text"
                    id="favorite_artist"
                    value={favorite_artist.text.clone()}
                    oninput={favorite_artist.on_text_input.clone()}
                />
            </div>
            <LoveSlider
                id="coffee_love"
                label="Love for coffee"
                value={coffee_love.value}
                min={MIN_LOVE}
                max={MAX_LOVE}
                oninput={coffee_love.on_input.clone()}
            />
            <LoveSlider
                id="party_love"
                label="Love for party"
                value={party_love.value}
                min={MIN_LOVE}
                max={MAX_LOVE}
                oninput={party_love.on_input.clone()}
            />

            <div class="form-group">
                <label for="brand">{ "Nutrition Brand" }</label>
                <select id="brand" onchange={brand_onchange}>
                    { Brand::ALL.iter().map(|b| html! {
                        <option value={b.to_string()} selected={*b == *brand}>{ b.to_string() }</option>
                    }).collect::<Html>() }
                </select>
            </div>

            if let Some(ref err) = *error_message {
                <div class="input-error">{ err }</div>
            }

            <button type="submit" class="btn-primary">{ "Calculate Strategy" }</button>
        </form>
    }
}

/// App wrapper with the page header.
#[function_component]
pub fn App() -> Html {
    html! {
        <div class="app">
            <header>
                <img src="images/nbro-logo.png" alt="NBRO Running Logo" class="logo" />
                <p class="brand-line">{ "LØBEREN x MAURTEN" }</p>
                <h1>{ "Carb Calculator" }</h1>
            </header>
            <Main />
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
