//! Error types for the feed normalization layer.
//!
//! Uses `thiserror` for structured error handling. Every mapper is
//! fail-fast: either a fully valid typed object is produced, or one of
//! these errors is returned before any result exists. No mapper ever
//! returns a partially populated object.

/// Errors raised while normalizing a raw API record.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The content-type discriminator string is outside the closed set.
    #[error("unrecognized content type discriminator: {name:?}")]
    UnrecognizedDiscriminator {
        /// The offending raw discriminator string.
        name: String,
    },

    /// A field the mapper unconditionally requires is absent.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Dotted path of the missing field.
        field: String,
    },

    /// A present field has the wrong JSON shape.
    #[error("field {field} has unexpected shape, expected {expected}")]
    InvalidField {
        /// Dotted path of the offending field.
        field: String,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// A timestamp field is not valid RFC 3339.
    #[error("invalid timestamp in {field}: {source}")]
    InvalidTimestamp {
        /// Dotted path of the offending field.
        field: String,
        /// Underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// A serde-backed collaborator model rejected its input.
    #[error("failed to deserialize {context}: {source}")]
    Deserialize {
        /// Which collaborator model was being built.
        context: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Create an unrecognized-discriminator error.
    #[must_use]
    pub fn unrecognized(name: impl Into<String>) -> Self {
        Self::UnrecognizedDiscriminator { name: name.into() }
    }

    /// Create a missing-required-field error.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField { field: field.into() }
    }

    /// Create an invalid-field error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField { field: field.into(), expected }
    }

    /// Create a deserialize error for a collaborator model.
    #[must_use]
    pub const fn deserialize(context: &'static str, source: serde_json::Error) -> Self {
        Self::Deserialize { context, source }
    }

    /// Returns true if this error signals schema drift in the external API
    /// (an unrecognized discriminator), as opposed to a malformed record.
    #[must_use]
    pub const fn is_schema_drift(&self) -> bool {
        matches!(self, Self::UnrecognizedDiscriminator { .. })
    }

    /// Get the offending discriminator string, if any.
    #[must_use]
    pub fn discriminator(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedDiscriminator { name } => Some(name),
            _ => None,
        }
    }
}

/// Result type alias for mapping operations.
pub type ParseResult<T> = Result<T, ParseError>;
