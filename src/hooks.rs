use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a free-text form field.
#[derive(Clone)]
pub struct FormField {
    /// The current text content of the input field.
    pub text: String,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    /// Callback to programmatically replace the text.
    pub set_text: Callback<String>,
}

/// Custom hook to manage the text of a form field.
///
/// Parsing is deferred to submit time, so the field keeps whatever the
/// runner typed, malformed or not.
#[hook]
pub fn use_form_field(initial: &'static str) -> FormField {
    let text_state_handle: UseStateHandle<String> = use_state(|| initial.to_string());

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let set_text = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |text: String| text_setter.set(text))
    };

    FormField {
        text: (*text_state_handle).clone(),
        on_text_input,
        set_text,
    }
}

/// Slider state for the 1–5 "love" inputs.
#[derive(Clone)]
pub struct LoveSliderState {
    pub value: u8,
    pub on_input: Callback<InputEvent>,
}

#[hook]
pub fn use_love_slider(initial: u8, min: u8, max: u8) -> LoveSliderState {
    let value = use_state(|| initial);

    let on_input = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<u8>() {
                value.set(v.clamp(min, max));
            }
        })
    };

    LoveSliderState {
        value: *value,
        on_input,
    }
}
