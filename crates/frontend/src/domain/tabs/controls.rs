use contracts::domain::tabs::response::MutationOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::api;

const ADD_BUTTON_ID: &str = "confirmAddTab";
const NAME_INPUT_ID: &str = "tabName";
const RENAME_BUTTON_ID: &str = "confirmRenameTab";
const NEW_NAME_INPUT_ID: &str = "newTabName";
const DELETE_BUTTON_SELECTOR: &str = ".deleteTabButton";
const TAB_ID_ATTR: &str = "data-tab-id";

/// Bind the "confirm add" control.
///
/// Each click reads the current value of the name input and issues exactly
/// one create request; double clicks are not debounced. On success the page
/// reloads to show the new tab, on failure the error goes to the console
/// and the page is left as is.
pub fn bind_add_control(document: &Document) -> Result<(), String> {
    let Some(button) = document.get_element_by_id(ADD_BUTTON_ID) else {
        // страница без формы добавления
        return Ok(());
    };
    let input = document
        .get_element_by_id(NAME_INPUT_ID)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| format!("#{} input not found next to #{}", NAME_INPUT_ID, ADD_BUTTON_ID))?;

    let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let tab_name = input.value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::add_tab(&tab_name).await {
                Ok(MutationOutcome::Success) => reload_page(),
                Ok(MutationOutcome::Failed(error)) => log::error!("Failed to add tab: {}", error),
                Err(error) => log::error!("Add tab request failed: {}", error),
            }
        });
    }) as Box<dyn FnMut(_)>);

    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| format!("{e:?}"))?;
    // the handler must live as long as the page does
    handler.forget();
    Ok(())
}

/// Bind the "confirm rename" control of a tab's own page.
///
/// The control carries the tab id in its `data-tab-id` attribute; the new
/// name is read from the rename input. Same success/failure behavior as the
/// add control.
pub fn bind_rename_control(document: &Document) -> Result<(), String> {
    let Some(button) = document.get_element_by_id(RENAME_BUTTON_ID) else {
        return Ok(());
    };
    let input = document
        .get_element_by_id(NEW_NAME_INPUT_ID)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| {
            format!(
                "#{} input not found next to #{}",
                NEW_NAME_INPUT_ID, RENAME_BUTTON_ID
            )
        })?;

    let captured = button.clone();
    let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let Some(tab_id) = captured.get_attribute(TAB_ID_ATTR) else {
            log::error!("Rename control has no {} attribute", TAB_ID_ATTR);
            return;
        };
        let new_tab_name = input.value();
        wasm_bindgen_futures::spawn_local(async move {
            match api::rename_tab(&tab_id, &new_tab_name).await {
                Ok(MutationOutcome::Success) => reload_page(),
                Ok(MutationOutcome::Failed(error)) => {
                    log::error!("Failed to rename tab {}: {}", tab_id, error)
                }
                Err(error) => log::error!("Rename tab request failed: {}", error),
            }
        });
    }) as Box<dyn FnMut(_)>);

    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| format!("{e:?}"))?;
    handler.forget();
    Ok(())
}

/// Bind one handler to every delete control present in the document.
///
/// Binding is static: controls rendered after this call get no handler.
/// New delete buttons only ever appear through a full reload, which binds
/// them again.
pub fn bind_delete_controls(document: &Document) -> Result<(), String> {
    let buttons = document
        .query_selector_all(DELETE_BUTTON_SELECTOR)
        .map_err(|e| format!("{e:?}"))?;

    for index in 0..buttons.length() {
        let Some(node) = buttons.item(index) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<Element>() else {
            continue;
        };

        let captured = button.clone();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            // the id attribute is read at click time, like the rest of the row
            let Some(tab_id) = captured.get_attribute(TAB_ID_ATTR) else {
                log::error!("Delete control has no {} attribute", TAB_ID_ATTR);
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_tab(&tab_id).await {
                    Ok(MutationOutcome::Success) => reload_page(),
                    Ok(MutationOutcome::Failed(error)) => {
                        log::error!("Failed to delete tab {}: {}", tab_id, error)
                    }
                    Err(error) => log::error!("Delete tab request failed: {}", error),
                }
            });
        }) as Box<dyn FnMut(_)>);

        button
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| format!("{e:?}"))?;
        handler.forget();
    }
    Ok(())
}

/// Full page reload: the only consistency mechanism the admin page has.
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }
}
