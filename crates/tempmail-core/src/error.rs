//! Error types for Tempmail page interactions.
//!
//! Every handler in the UI converts its failures into one of these variants
//! and logs it at the event boundary. Nothing here is ever shown to the user.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enhancing the page.
#[derive(Debug, Error)]
pub enum Error {
    /// An expiry timestamp could not be parsed.
    #[error("Invalid expiry timestamp: {0}")]
    InvalidExpiry(String),

    /// A required data attribute is absent from an element.
    #[error("Element {element} is missing attribute {attribute}")]
    MissingAttribute {
        /// Description of the element (selector or id).
        element: String,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// An element the handler depends on is not in the document.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Configuration is present but invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A browser API call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// A background request failed or returned an unexpected response.
    #[error("Request failed: {0}")]
    Request(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing-attribute error.
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}
