use std::sync::LazyLock;

use brdocs_canonical::ValidationError;
use rand::Rng;
use regex::Regex;

use crate::document::document_newtype;
use crate::Document;

static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-?[0-9a-fA-F]{4}-?4[0-9a-fA-F]{3}-?[0-9a-fA-F]{4}-?[0-9a-fA-F]{12}$",
    )
    .expect("uuid regex")
});

document_newtype! {
    /// Version 4 UUID, stored as 32 lowercase hex digits.
    ///
    /// Pix uses this shape for random keys (EVP).
    Uuid
}

impl Uuid {
    /// Canonical hyphenated form, e.g. `123e4567-e89b-42d3-a456-426614174000`.
    pub fn hyphenated(&self) -> String {
        self.mask()
    }
}

impl Document for Uuid {
    const NAME: &'static str = "UUID";
    const MASK: Option<&'static str> = Some("00000000-0000-0000-0000-000000000000");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let uuid = value.trim();
        if uuid.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !SHAPE.is_match(uuid) {
            return Err(ValidationError::invalid_format(Self::NAME, uuid));
        }
        Ok(uuid.replace('-', "").to_ascii_lowercase())
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::normalize(value).map(Self)
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let uuid = ::uuid::Builder::from_random_bytes(bytes).into_uuid();
        Self::parse(&uuid.simple().to_string())
    }
}
