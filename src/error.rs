use crate::field::Field;

/// Error type for podspec-metadata parsing and operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Input is not syntactically valid JSON.
    #[error("invalid JSON syntax: {0}")]
    Syntax(String),

    /// A required field is absent from the podspec.
    #[error("missing required field: {0}")]
    MissingField(Field),

    /// A field is present but its value has an unexpected shape.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The offending field.
        field: Field,
        /// What was wrong with the value.
        reason: String,
    },

    /// Input could not be read as a text document at all.
    #[error("malformed podspec document: {0}")]
    MalformedDocument(String),

    /// A field name that is not one of the known podspec fields.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl Error {
    /// The field a [`Error::MissingField`] or [`Error::InvalidField`] refers to.
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::MissingField(field) | Error::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub(crate) fn invalid(field: Field, reason: impl Into<String>) -> Self {
        Error::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for podspec-metadata operations.
pub type Result<T> = std::result::Result<T, Error>;
