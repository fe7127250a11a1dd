//! Local storage access for the theme preference.

use crate::dom::js_detail;
use crate::error::UiError;
use crate::logic::page::PreferenceStore;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// Reads and writes raw strings so the stored value stays `dark`/`light`
/// rather than a JSON-encoded string.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, UiError> {
        LocalStorage::raw().get_item(key).map_err(|err| {
            let err = storage_error("get", key, &js_detail(&err));
            log_storage_error(&err);
            err
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UiError> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            let err = storage_error("set", key, &js_detail(&err));
            log_storage_error(&err);
            err
        })
    }
}

fn storage_error(operation: &'static str, key: &str, detail: &str) -> UiError {
    UiError::Storage {
        operation,
        key: key.to_string(),
        detail: detail.to_string(),
    }
}

fn log_storage_error(err: &UiError) {
    if let UiError::Storage {
        operation,
        key,
        detail,
    } = err
    {
        console::error!("storage operation failed", *operation, key, detail);
    }
}
