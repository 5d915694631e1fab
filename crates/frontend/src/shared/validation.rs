//! Native form-validation prompts.
//!
//! Replaces the browser's default required-field bubble text with a fixed
//! Russian prompt. Only the prompt text is managed here; whether a value is
//! semantically valid stays the browser's (and backend's) business.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

/// Prompt shown for a required field left empty.
pub const REQUIRED_FIELD_PROMPT: &str = "Пожалуйста, заполните это поле.";

/// Install the prompt handlers on every `<input>` in the document.
///
/// The `invalid` handler resets any custom message first, so the check of
/// `validity()` reflects the native verdict, then installs the fixed
/// prompt. The `input` handler clears the custom message on every
/// keystroke; otherwise a stale custom message keeps the field invalid
/// forever.
pub fn install_validation_messages(document: &Document) -> Result<(), String> {
    let inputs = document.get_elements_by_tag_name("input");

    for index in 0..inputs.length() {
        let Some(element) = inputs.item(index) else {
            continue;
        };
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        let on_invalid = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            target.set_custom_validity("");
            if !target.validity().valid() {
                target.set_custom_validity(REQUIRED_FIELD_PROMPT);
            }
        }) as Box<dyn FnMut(_)>);

        let on_input = Closure::wrap(Box::new(move |event: Event| {
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                target.set_custom_validity("");
            }
        }) as Box<dyn FnMut(_)>);

        input
            .add_event_listener_with_callback("invalid", on_invalid.as_ref().unchecked_ref())
            .map_err(|e| format!("{e:?}"))?;
        input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .map_err(|e| format!("{e:?}"))?;
        on_invalid.forget();
        on_input.forget();
    }

    Ok(())
}
