//! DOM seams used by the page behaviours.
//!
//! # Design
//! - Behaviours depend on these traits rather than on `web-sys` so they can be
//!   exercised natively.
//! - Every method takes `&self`; browser handles are already shared references.

use crate::error::UiError;
use crate::logic::modal::ModalDisplay;

/// Durable key/value storage for user preferences.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the store is unavailable.
    fn read(&self, key: &str) -> Result<Option<String>, UiError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Storage`] when the write is rejected.
    fn write(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Elements reflecting the active theme.
pub trait ThemeSurface {
    /// Add or remove the dark marker class on the document body.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the class list rejects the change.
    fn set_dark_marker(&self, present: bool) -> Result<(), UiError>;

    /// Replace the text of the theme indicator.
    ///
    /// # Errors
    ///
    /// Returns an error when the indicator cannot be updated.
    fn set_glyph(&self, glyph: &str) -> Result<(), UiError>;
}

/// Delete confirmation overlay and the form it submits.
pub trait ModalSurface {
    /// Rewrite the submission target of the delete form.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the form is absent.
    fn set_form_action(&self, action: &str) -> Result<(), UiError>;

    /// Apply a display mode to the overlay.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the overlay is absent.
    fn set_modal_display(&self, display: ModalDisplay) -> Result<(), UiError>;
}

/// Lookup and mutation of the flash banner.
pub trait AlertSurface {
    /// Handle to a located banner.
    type Element;

    /// Locate the banner, `None` when the page has none.
    fn find_alert(&self) -> Option<Self::Element>;

    /// Set the inline opacity of the banner.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the style cannot be written.
    fn set_opacity(&self, element: &Self::Element, opacity: &str) -> Result<(), UiError>;

    /// Detach the banner from the document.
    fn remove(&self, element: &Self::Element);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, UiError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).write(key, value)
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn set_dark_marker(&self, present: bool) -> Result<(), UiError> {
        (**self).set_dark_marker(present)
    }

    fn set_glyph(&self, glyph: &str) -> Result<(), UiError> {
        (**self).set_glyph(glyph)
    }
}

impl<T: ModalSurface + ?Sized> ModalSurface for &T {
    fn set_form_action(&self, action: &str) -> Result<(), UiError> {
        (**self).set_form_action(action)
    }

    fn set_modal_display(&self, display: ModalDisplay) -> Result<(), UiError> {
        (**self).set_modal_display(display)
    }
}

impl<T: AlertSurface + ?Sized> AlertSurface for &T {
    type Element = T::Element;

    fn find_alert(&self) -> Option<Self::Element> {
        (**self).find_alert()
    }

    fn set_opacity(&self, element: &Self::Element, opacity: &str) -> Result<(), UiError> {
        (**self).set_opacity(element, opacity)
    }

    fn remove(&self, element: &Self::Element) {
        (**self).remove(element);
    }
}
