//! Browser bindings for the page behaviours (wasm32 only).

pub(crate) mod alert;
pub(crate) mod modal;
pub(crate) mod session;
pub(crate) mod storage;
pub(crate) mod theme;

use crate::error::UiError;
use gloo::utils::document;
use wasm_bindgen::JsValue;
use web_sys::Element;

pub(crate) fn element_by_id(id: &str) -> Result<Element, UiError> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| UiError::missing(id))
}

pub(crate) fn dom_error(operation: &'static str, err: &JsValue) -> UiError {
    UiError::Dom {
        operation,
        detail: js_detail(err),
    }
}

pub(crate) fn js_detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
