use brdocs_canonical::checksum::{mod11_remainder, weighted_sum};
use brdocs_canonical::ValidationError;
use rand::Rng;

use crate::document::{self, document_newtype};
use crate::Document;

const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

document_newtype! {
    /// Registro Nacional de Veículos Automotores: 10 digits and 1 check digit.
    Renavam
}

impl Document for Renavam {
    const NAME: &'static str = "RENAVAM";
    const MASK: Option<&'static str> = Some("0000000000-0");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 11, Self::NAME, true)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let renavam = Self::normalize(value)?;
        document::verify(
            Self::NAME,
            &renavam,
            &Self::checksum(&renavam[..10])?,
            &renavam[10..],
        )?;
        Ok(Self(renavam))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 10, Self::NAME)?;
        Ok(mod11_remainder(weighted_sum(base, &WEIGHTS) * 10, 0).to_string())
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let base = document::fake_digits(rng, 10);
        let renavam = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&renavam)
    }
}
