//! Delete confirmation overlay bound to the document by element id.

use crate::config::PageConfig;
use crate::dom::{dom_error, element_by_id};
use crate::error::UiError;
use crate::logic::modal::{DeleteModal, ModalDisplay};
use crate::logic::page::ModalSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlFormElement};

/// Resolves the overlay and form on every call, so markup swapped in after
/// start is still found.
pub(crate) struct DocumentModal<'a> {
    modal_id: &'a str,
    form_id: &'a str,
}

impl ModalSurface for DocumentModal<'_> {
    fn set_form_action(&self, action: &str) -> Result<(), UiError> {
        let form = element_by_id(self.form_id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| UiError::Dom {
                operation: "form.action",
                detail: format!("#{} is not a form", self.form_id),
            })?;
        form.set_action(action);
        Ok(())
    }

    fn set_modal_display(&self, display: ModalDisplay) -> Result<(), UiError> {
        let modal = element_by_id(self.modal_id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::Dom {
                operation: "style.display",
                detail: format!("#{} is not an html element", self.modal_id),
            })?;
        modal
            .style()
            .set_property("display", display.as_css())
            .map_err(|err| dom_error("style.display", &err))
    }
}

pub(crate) fn delete_modal(config: &PageConfig) -> DeleteModal<DocumentModal<'_>> {
    DeleteModal::new(
        DocumentModal {
            modal_id: &config.modal_id,
            form_id: &config.delete_form_id,
        },
        config.delete_prefix.clone(),
    )
}

/// Stringify an id passed from markup the way `"/delete/" + id` would.
pub(crate) fn record_id(value: &JsValue) -> String {
    if value.is_undefined() {
        return "undefined".to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(number) = value.as_f64() {
        return js_sys::Number::from(number)
            .to_string_with_radix(10)
            .map_or_else(|_| number.to_string(), String::from);
    }
    String::from(value.unchecked_ref::<js_sys::Object>().to_string())
}
