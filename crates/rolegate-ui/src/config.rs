//! Page configuration: element ids, storage key, and dismissal timing.
//!
//! # Design
//! - Defaults mirror the markup rendered by the server templates.
//! - Pages may override any subset through an inline JSON block.

use crate::error::UiError;
use crate::logic::alert::AlertTiming;
use serde::Deserialize;

/// Default identifiers and timings used when no override is provided.
pub mod defaults {
    /// Selector for the flash banner.
    pub const ALERT_SELECTOR: &str = ".alert";
    /// Delay before the banner fades.
    pub const FADE_AFTER_MS: u32 = 3_000;
    /// Delay between the fade and removal from the document.
    pub const REMOVE_AFTER_MS: u32 = 500;
    /// Local storage key for the theme preference.
    pub const THEME_KEY: &str = "theme";
    /// Id of the theme toggle button.
    pub const TOGGLE_ID: &str = "themeToggle";
    /// Id of the element showing the theme glyph.
    pub const ICON_ID: &str = "themeIcon";
    /// Body class marking the dark theme.
    pub const DARK_CLASS: &str = "dark";
    /// Id of the delete confirmation overlay.
    pub const MODAL_ID: &str = "modal";
    /// Id of the form submitted on confirmation.
    pub const DELETE_FORM_ID: &str = "deleteForm";
    /// Path prefix joined with the record id to build the form action.
    pub const DELETE_PREFIX: &str = "/delete/";
    /// Id of the optional inline `<script type="application/json">` config block.
    pub const INLINE_CONFIG_ID: &str = "rolegate-config";
}

/// Runtime configuration for every page behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// CSS selector locating the flash banner.
    pub alert_selector: String,
    /// Milliseconds after start before the banner fades.
    pub fade_after_ms: u32,
    /// Milliseconds after the fade before the banner is removed.
    pub remove_after_ms: u32,
    /// Storage key holding the theme preference.
    pub theme_key: String,
    /// Id of the theme toggle button.
    pub toggle_id: String,
    /// Id of the theme glyph element.
    pub icon_id: String,
    /// Class added to `<body>` for the dark theme.
    pub dark_class: String,
    /// Id of the modal overlay.
    pub modal_id: String,
    /// Id of the delete form.
    pub delete_form_id: String,
    /// Prefix of the delete form action.
    pub delete_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alert_selector: defaults::ALERT_SELECTOR.to_string(),
            fade_after_ms: defaults::FADE_AFTER_MS,
            remove_after_ms: defaults::REMOVE_AFTER_MS,
            theme_key: defaults::THEME_KEY.to_string(),
            toggle_id: defaults::TOGGLE_ID.to_string(),
            icon_id: defaults::ICON_ID.to_string(),
            dark_class: defaults::DARK_CLASS.to_string(),
            modal_id: defaults::MODAL_ID.to_string(),
            delete_form_id: defaults::DELETE_FORM_ID.to_string(),
            delete_prefix: defaults::DELETE_PREFIX.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigParse`] for malformed JSON or unknown fields and
    /// [`UiError::InvalidConfig`] when a field fails validation.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Delays for the flash banner dismissal.
    #[must_use]
    pub const fn alert_timing(&self) -> AlertTiming {
        AlertTiming {
            fade_after_ms: self.fade_after_ms,
            remove_after_ms: self.remove_after_ms,
        }
    }

    /// Check that every identifier is usable.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), UiError> {
        let required = [
            ("alert_selector", &self.alert_selector),
            ("theme_key", &self.theme_key),
            ("toggle_id", &self.toggle_id),
            ("icon_id", &self.icon_id),
            ("dark_class", &self.dark_class),
            ("modal_id", &self.modal_id),
            ("delete_form_id", &self.delete_form_id),
            ("delete_prefix", &self.delete_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(UiError::InvalidConfig {
                    field,
                    reason: "blank",
                });
            }
        }
        // DOMTokenList rejects tokens containing whitespace.
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(UiError::InvalidConfig {
                field: "dark_class",
                reason: "contains_whitespace",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PageConfig, defaults};
    use crate::error::UiError;

    #[test]
    fn defaults_match_server_markup() {
        let config = PageConfig::default();
        assert_eq!(config.alert_selector, ".alert");
        assert_eq!(config.fade_after_ms, 3_000);
        assert_eq!(config.remove_after_ms, 500);
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.toggle_id, "themeToggle");
        assert_eq!(config.icon_id, "themeIcon");
        assert_eq!(config.modal_id, "modal");
        assert_eq!(config.delete_form_id, "deleteForm");
        assert_eq!(config.delete_prefix, defaults::DELETE_PREFIX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            PageConfig::from_json(r#"{"fade_after_ms": 1500, "modal_id": "confirm"}"#).unwrap();
        assert_eq!(config.fade_after_ms, 1_500);
        assert_eq!(config.modal_id, "confirm");
        assert_eq!(config.remove_after_ms, defaults::REMOVE_AFTER_MS);
        assert_eq!(config.theme_key, defaults::THEME_KEY);
        let timing = config.alert_timing();
        assert_eq!(timing.fade_after_ms, 1_500);
        assert_eq!(timing.remove_after_ms, 500);
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let err = PageConfig::from_json(r#"{"icon_id": "  "}"#).unwrap_err();
        assert_eq!(
            err,
            UiError::InvalidConfig {
                field: "icon_id",
                reason: "blank",
            }
        );
    }

    #[test]
    fn dark_class_must_be_a_single_token() {
        let err = PageConfig::from_json(r#"{"dark_class": "theme dark"}"#).unwrap_err();
        assert!(matches!(
            err,
            UiError::InvalidConfig {
                field: "dark_class",
                ..
            }
        ));
    }

    #[test]
    fn unknown_fields_and_bad_json_fail_to_parse() {
        assert!(matches!(
            PageConfig::from_json(r#"{"modal": "x"}"#),
            Err(UiError::ConfigParse { .. })
        ));
        assert!(matches!(
            PageConfig::from_json("not json"),
            Err(UiError::ConfigParse { .. })
        ));
    }
}
