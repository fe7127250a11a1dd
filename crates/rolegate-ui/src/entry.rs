//! JavaScript entry points.
//!
//! The page loader assigns `confirmDelete` and `closeModal` to `window` so the
//! inline `onclick` handlers in the server templates can reach them.

use crate::dom::modal::{delete_modal, record_id};
use crate::dom::session::{self, active_config};
use wasm_bindgen::prelude::*;

/// Module start: install the panic hook and mount the page session.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    session::start();
}

/// Point the delete form at `/delete/{id}` and show the confirmation overlay.
///
/// # Errors
///
/// Throws when the overlay or form is missing from the page.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(id: &JsValue) -> Result<(), JsValue> {
    let config = active_config();
    delete_modal(&config).open(&record_id(id))?;
    Ok(())
}

/// Hide the confirmation overlay.
///
/// # Errors
///
/// Throws when the overlay is missing from the page.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() -> Result<(), JsValue> {
    let config = active_config();
    delete_modal(&config).close()?;
    Ok(())
}

/// Detach listeners and cancel any pending banner dismissal.
#[wasm_bindgen]
pub fn teardown() {
    session::teardown();
}
