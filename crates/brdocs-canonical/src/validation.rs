use thiserror::Error;

/// Validation errors raised while normalizing, parsing or generating documents.
///
/// `field` names the document (`"CPF"`, `"CNPJ"`) or the component that failed
/// (`"court"`, `"DDD"`). A fresh value is built for every failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When the input is empty after formatting is removed.
    #[error("{field} is empty")]
    EmptyValue {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// When a value has the wrong shape or characters outside its alphabet.
    #[error("{field} ('{value}') is not in a valid format")]
    InvalidFormat {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When the recomputed check digits differ from the embedded ones.
    #[error("{field} ('{value}') has an invalid check digit")]
    InvalidChecksum {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a value is longer than the document allows.
    #[error("{field} ('{value}') is longer than {expected} characters")]
    TooLong {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Required length.
        expected: usize,
    },
    /// When a value is shorter than the document requires.
    #[error("{field} ('{value}') is shorter than {expected} characters")]
    TooShort {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Required length.
        expected: usize,
    },
    /// When every character of the value is the same.
    #[error("{field} ('{value}') is a repeated sequence")]
    RepeatedSequence {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a check digit is requested for a document that has none.
    #[error("{field} has no check digit")]
    NoChecksum {
        /// Document name.
        field: &'static str,
    },
    /// When a lookup (state by CEP, area code) has no match.
    #[error("{field} ('{value}') was not found")]
    NotFound {
        /// Field name that failed the lookup.
        field: &'static str,
        /// Value that was looked up.
        value: String,
    },
    /// When a component or generator option is outside its allowed values.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Fieldless discriminant of [`ValidationError`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ValidationError::EmptyValue`].
    EmptyValue,
    /// See [`ValidationError::InvalidFormat`].
    InvalidFormat,
    /// See [`ValidationError::InvalidChecksum`].
    InvalidChecksum,
    /// See [`ValidationError::TooLong`].
    TooLong,
    /// See [`ValidationError::TooShort`].
    TooShort,
    /// See [`ValidationError::RepeatedSequence`].
    RepeatedSequence,
    /// See [`ValidationError::NoChecksum`].
    NoChecksum,
    /// See [`ValidationError::NotFound`].
    NotFound,
    /// See [`ValidationError::OutOfBounds`].
    OutOfBounds,
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidFormat`].
    pub fn invalid_format(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
        }
    }

    /// Shorthand for [`ValidationError::InvalidChecksum`].
    pub fn invalid_checksum(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidChecksum {
            field,
            value: value.into(),
        }
    }

    /// Shorthand for [`ValidationError::OutOfBounds`].
    pub fn out_of_bounds(field: &'static str, value: impl Into<String>) -> Self {
        Self::OutOfBounds {
            field,
            value: value.into(),
        }
    }

    /// Returns the kind of this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyValue { .. } => ErrorKind::EmptyValue,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidChecksum { .. } => ErrorKind::InvalidChecksum,
            Self::TooLong { .. } => ErrorKind::TooLong,
            Self::TooShort { .. } => ErrorKind::TooShort,
            Self::RepeatedSequence { .. } => ErrorKind::RepeatedSequence,
            Self::NoChecksum { .. } => ErrorKind::NoChecksum,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }

    /// Returns the field or document name the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyValue { field }
            | Self::NoChecksum { field }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidChecksum { field, .. }
            | Self::TooLong { field, .. }
            | Self::TooShort { field, .. }
            | Self::RepeatedSequence { field, .. }
            | Self::NotFound { field, .. }
            | Self::OutOfBounds { field, .. } => *field,
        }
    }
}
