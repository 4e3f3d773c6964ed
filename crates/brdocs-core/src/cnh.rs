use brdocs_canonical::checksum::{mod11, weighted_sum};
use brdocs_canonical::ValidationError;
use rand::Rng;

use crate::document::{self, document_newtype};
use crate::Document;

const FIRST_WEIGHTS: [u32; 9] = [2, 3, 4, 5, 6, 7, 8, 9, 10];
const SECOND_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 10, 11, 2];

document_newtype! {
    /// Carteira Nacional de Habilitação (driver's license): 9 digits and 2 check digits.
    Cnh
}

impl Document for Cnh {
    const NAME: &'static str = "CNH";
    const MASK: Option<&'static str> = Some("000000000-00");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 11, Self::NAME, true)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let cnh = Self::normalize(value)?;
        document::verify(Self::NAME, &cnh, &Self::checksum(&cnh[..9])?, &cnh[9..])?;
        Ok(Self(cnh))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 9, Self::NAME)?;
        let first = mod11(weighted_sum(base, &FIRST_WEIGHTS));
        // The first check digit takes the last weight (2).
        let second = mod11(weighted_sum(&format!("{base}{first}"), &SECOND_WEIGHTS));
        Ok(format!("{first}{second}"))
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let base = document::fake_digits(rng, 9);
        let cnh = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&cnh)
    }
}
