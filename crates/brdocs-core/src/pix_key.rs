use std::fmt;
use std::str::FromStr;

use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Cnpj, Cpf, Document, Email, Phone, Uuid};

const HYPHENATED_UUID_LEN: usize = 36;

/// Kind of Pix key, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyType {
    /// Individual taxpayer number.
    Cpf,
    /// Company taxpayer number.
    Cnpj,
    /// Random key: a version 4 UUID in hyphenated form.
    Evp,
    /// E-mail address.
    Email,
    /// Phone number with country code.
    Phone,
}

impl PixKeyType {
    /// Every key type, in the order keys are matched.
    pub const ALL: [PixKeyType; 5] = [
        PixKeyType::Cpf,
        PixKeyType::Cnpj,
        PixKeyType::Evp,
        PixKeyType::Email,
        PixKeyType::Phone,
    ];

    /// Normalized key when `value` is a valid key of this type.
    fn detect(self, value: &str) -> Option<String> {
        match self {
            PixKeyType::Cpf => Cpf::parse(value).ok().map(String::from),
            PixKeyType::Cnpj => Cnpj::parse(value).ok().map(String::from),
            PixKeyType::Evp => (value.len() == HYPHENATED_UUID_LEN)
                .then(|| Uuid::parse(value).ok())
                .flatten()
                .map(|uuid| uuid.hyphenated()),
            PixKeyType::Email => Email::parse(value).ok().map(String::from),
            PixKeyType::Phone => Phone::parse(value).ok().map(String::from),
        }
    }

    fn fake<R: Rng + ?Sized>(self, rng: &mut R) -> Result<String, ValidationError> {
        Ok(match self {
            PixKeyType::Cpf => Cpf::fake_with(rng, &Default::default())?.into(),
            PixKeyType::Cnpj => Cnpj::fake_with(rng, &Default::default())?.into(),
            PixKeyType::Evp => Uuid::fake_with(rng, &())?.hyphenated(),
            PixKeyType::Email => Email::fake_with(rng, &())?.into(),
            PixKeyType::Phone => Phone::fake_with(rng, &Default::default())?.into(),
        })
    }
}

/// Pix key of any type. The first type that accepts the input wins, in the
/// order CPF, CNPJ, EVP, e-mail, phone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PixKey {
    key_type: PixKeyType,
    value: String,
}

/// Options for [`PixKey::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixKeyFakeOptions {
    /// Key type to generate; random when unset.
    pub key_type: Option<PixKeyType>,
}

impl PixKey {
    /// Detected key type.
    pub fn key_type(&self) -> PixKeyType {
        self.key_type
    }

    fn detect(value: &str) -> Result<(PixKeyType, String), ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        PixKeyType::ALL
            .into_iter()
            .find_map(|key_type| key_type.detect(trimmed).map(|key| (key_type, key)))
            .ok_or_else(|| ValidationError::invalid_format(Self::NAME, trimmed))
    }
}

impl Document for PixKey {
    const NAME: &'static str = "PixKey";
    type FakeOptions = PixKeyFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        Self::detect(value).map(|(_, key)| key)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let (key_type, value) = Self::detect(value)?;
        Ok(Self { key_type, value })
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let key_type = match options.key_type {
            Some(key_type) => key_type,
            None => random::choose(rng, &PixKeyType::ALL)
                .copied()
                .unwrap_or(PixKeyType::Evp),
        };
        Self::parse(&key_type.fake(rng)?)
    }
}

impl AsRef<str> for PixKey {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for PixKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for PixKey {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PixKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PixKey> for String {
    fn from(value: PixKey) -> Self {
        value.value
    }
}
