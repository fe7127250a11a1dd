//! Error types for page behaviours.

use thiserror::Error;

/// Primary error type for DOM, storage, and configuration failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UiError {
    /// An element required by the operation was not present in the document.
    #[error("missing element #{id}")]
    MissingElement {
        /// Identifier that failed to resolve.
        id: String,
    },
    /// A DOM call raised a JavaScript exception.
    #[error("dom operation {operation} failed: {detail}")]
    Dom {
        /// DOM operation being attempted.
        operation: &'static str,
        /// Exception text reported by the browser.
        detail: String,
    },
    /// Local storage was unavailable or rejected the request.
    #[error("storage operation {operation} failed for {key}: {detail}")]
    Storage {
        /// Storage operation being attempted.
        operation: &'static str,
        /// Key involved in the operation.
        key: String,
        /// Failure detail reported by the browser.
        detail: String,
    },
    /// Configuration field failed validation.
    #[error("invalid configuration field {field}: {reason}")]
    InvalidConfig {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Inline configuration payload was not valid JSON for the config shape.
    #[error("failed to parse page configuration: {detail}")]
    ConfigParse {
        /// Parser error detail.
        detail: String,
    },
}

impl UiError {
    /// Build a [`UiError::MissingElement`] for the given identifier.
    #[must_use]
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiError;

    #[test]
    fn messages_name_the_failing_target() {
        assert_eq!(
            UiError::missing("modal").to_string(),
            "missing element #modal"
        );
        let err = UiError::Storage {
            operation: "set",
            key: "theme".to_string(),
            detail: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "storage operation set failed for theme: QuotaExceededError"
        );
    }

    #[test]
    fn json_errors_map_to_config_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(UiError::from(err), UiError::ConfigParse { .. }));
    }
}
