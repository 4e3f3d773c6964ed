use brdocs_canonical::normalize::{
    apply_mask, fit_to_length, is_repeated_sequence, strip_formatting,
};
use brdocs_canonical::{random, FitPolicy, ValidationError};
use rand::Rng;

/// Contract shared by every document type.
///
/// A value of a `Document` type always holds its normalized form with verified
/// check digits; `parse` is the only way to build one.
pub trait Document: Sized + AsRef<str> + std::fmt::Display {
    /// Name used in errors and logs.
    const NAME: &'static str;
    /// Display mask made of `0` placeholders and separators, if the document has one.
    const MASK: Option<&'static str> = None;
    /// Constraints accepted by the fake generator.
    type FakeOptions: Default;

    /// Strips formatting and enforces alphabet and length. Check digits are not compared.
    fn normalize(value: &str) -> Result<String, ValidationError>;

    /// Normalizes `value` and verifies its check digits.
    fn parse(value: &str) -> Result<Self, ValidationError>;

    /// Check digits for a prefix that does not include them.
    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let _ = prefix;
        Err(ValidationError::NoChecksum { field: Self::NAME })
    }

    /// Generates a random valid document drawing from `rng`.
    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError>;

    /// Generates a random valid document from the thread-local generator.
    fn fake(options: &Self::FakeOptions) -> Result<Self, ValidationError> {
        let document = Self::fake_with(&mut rand::thread_rng(), options)?;
        tracing::trace!(document = Self::NAME, "generated fake document");
        Ok(document)
    }

    /// Like [`Document::validate`], but reports why the value was rejected.
    fn validate_or_fail(value: &str) -> Result<(), ValidationError> {
        Self::parse(value).map(|_| ())
    }

    /// True when `value` parses. Never fails.
    fn validate(value: &str) -> bool {
        match Self::validate_or_fail(value) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(document = Self::NAME, kind = ?error.kind(), "validation rejected");
                false
            }
        }
    }

    /// Normalized value.
    fn value(&self) -> &str {
        self.as_ref()
    }

    /// Normalized value rendered through [`Document::MASK`].
    fn mask(&self) -> String {
        match Self::MASK {
            Some(mask) => apply_mask(self.as_ref(), mask).unwrap_or_else(|_| self.as_ref().into()),
            None => self.as_ref().into(),
        }
    }
}

/// Declares a document newtype over its normalized string.
///
/// The type serializes as that string and deserializes through [`Document::parse`].
macro_rules! document_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = brdocs_canonical::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$name as $crate::Document>::parse(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = brdocs_canonical::ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                <$name as $crate::Document>::parse(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = brdocs_canonical::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <$name as $crate::Document>::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use document_newtype;

/// Digits-only normal form: strips formatting, rejects other characters, then
/// enforces the exact length and, optionally, repeated sequences.
pub(crate) fn digits(
    value: &str,
    length: usize,
    field: &'static str,
    reject_repeated: bool,
) -> Result<String, ValidationError> {
    let stripped = strip_formatting(value);
    if stripped.is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    if !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(field, stripped));
    }
    let policy = if reject_repeated {
        FitPolicy::strict().rejecting_repeated()
    } else {
        FitPolicy::strict()
    };
    fit_to_length(&stripped, length, &policy, field)
}

/// Checks that a checksum prefix has exactly `length` digits.
pub(crate) fn digit_prefix<'a>(
    prefix: &'a str,
    length: usize,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    if prefix.is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    if prefix.len() != length || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(field, prefix));
    }
    Ok(prefix)
}

/// Compares recomputed check digits with the embedded ones.
pub(crate) fn verify(
    field: &'static str,
    value: &str,
    expected: &str,
    embedded: &str,
) -> Result<(), ValidationError> {
    if expected == embedded {
        Ok(())
    } else {
        Err(ValidationError::invalid_checksum(field, value))
    }
}

/// Random digits that are not all the same. `length` must be at least 2.
pub(crate) fn fake_digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    debug_assert!(length > 1);
    loop {
        let drawn = random::digits(rng, length);
        if !is_repeated_sequence(&drawn) {
            return drawn;
        }
    }
}
