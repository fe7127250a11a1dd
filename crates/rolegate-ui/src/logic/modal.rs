//! Delete confirmation overlay.

use crate::error::UiError;
use crate::logic::page::ModalSurface;

/// Display modes applied to the overlay's inline style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalDisplay {
    /// Visible and centred.
    Flex,
    /// Hidden.
    Hidden,
}

impl ModalDisplay {
    /// CSS `display` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::Hidden => "none",
        }
    }
}

/// Join the action prefix and a record id. The id is embedded verbatim.
#[must_use]
pub fn delete_action(prefix: &str, id: &str) -> String {
    format!("{prefix}{id}")
}

/// Opens and closes the overlay and retargets the delete form.
#[derive(Debug)]
pub struct DeleteModal<S> {
    surface: S,
    prefix: String,
}

impl<S: ModalSurface> DeleteModal<S> {
    /// Build a modal controller with the given form action prefix.
    #[must_use]
    pub fn new(surface: S, prefix: impl Into<String>) -> Self {
        Self {
            surface,
            prefix: prefix.into(),
        }
    }

    /// Point the form at `prefix + id`, then show the overlay.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the form or overlay is absent.
    pub fn open(&self, id: &str) -> Result<(), UiError> {
        self.surface
            .set_form_action(&delete_action(&self.prefix, id))?;
        self.surface.set_modal_display(ModalDisplay::Flex)
    }

    /// Hide the overlay.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the overlay is absent.
    pub fn close(&self) -> Result<(), UiError> {
        self.surface.set_modal_display(ModalDisplay::Hidden)
    }
}
