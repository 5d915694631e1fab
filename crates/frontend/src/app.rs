use crate::domain::tabs::controls;
use crate::shared::datatable::{self, TableLanguage};
use crate::shared::{moscow_time, validation};

/// Wire up the admin page once the wasm module is loaded.
///
/// The same binary is served on every admin page; a step that finds no
/// matching elements is a no-op. A failed step is logged and the remaining
/// steps still run, so one broken decoration does not take the page down.
pub fn install() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => {
            log::error!("document is unavailable, nothing to decorate");
            return;
        }
    };

    if let Err(e) = validation::install_validation_messages(&document) {
        log::error!("Failed to install validation messages: {}", e);
    }

    moscow_time::decorate_utc_times(&document);

    if let Err(e) = datatable::init_tables(&TableLanguage::russian()) {
        log::error!("Failed to initialize data tables: {}", e);
    }

    if let Err(e) = controls::bind_add_control(&document) {
        log::error!("Failed to bind add-tab control: {}", e);
    }
    if let Err(e) = controls::bind_rename_control(&document) {
        log::error!("Failed to bind rename-tab control: {}", e);
    }
    if let Err(e) = controls::bind_delete_controls(&document) {
        log::error!("Failed to bind delete-tab controls: {}", e);
    }
}
