use std::sync::LazyLock;

use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::document_newtype;
use crate::Document;

static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3}-?[0-9][A-Z0-9][0-9]{2}$").expect("car plate regex")
});

document_newtype! {
    /// Vehicle plate in the old (`ABC-1234`) or Mercosul (`ABC1D23`) format.
    ///
    /// Stored without the hyphen. Plates carry no check digit.
    CarPlate
}

/// Options for [`CarPlate::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarPlateFakeOptions {
    /// Force the Mercosul (`true`) or old (`false`) format; random when unset.
    pub mercosul: Option<bool>,
}

impl CarPlate {
    /// True for the Mercosul format, which has a letter in the fifth position.
    pub fn is_mercosul(&self) -> bool {
        self.0.as_bytes()[4].is_ascii_uppercase()
    }
}

impl Document for CarPlate {
    const NAME: &'static str = "CarPlate";
    const MASK: Option<&'static str> = Some("000-0000");
    type FakeOptions = CarPlateFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let plate = value.trim().to_ascii_uppercase();
        if plate.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !SHAPE.is_match(&plate) {
            return Err(ValidationError::invalid_format(Self::NAME, plate));
        }
        Ok(plate.replace('-', ""))
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::normalize(value).map(Self)
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let mercosul = options.mercosul.unwrap_or_else(|| rng.gen_bool(0.5));
        let fifth = if mercosul {
            random::letters(rng, 1)
        } else {
            random::digits(rng, 1)
        };
        let plate = format!(
            "{}{}{fifth}{}",
            random::letters(rng, 3),
            random::digits(rng, 1),
            random::digits(rng, 2)
        );
        Self::parse(&plate)
    }
}
