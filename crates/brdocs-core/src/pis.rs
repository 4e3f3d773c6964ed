use brdocs_canonical::checksum::{mod11, weighted_sum};
use brdocs_canonical::ValidationError;
use rand::Rng;

use crate::document::{self, document_newtype};
use crate::Document;

const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

document_newtype! {
    /// PIS/PASEP/NIS/NIT social security number: 10 digits and 1 check digit.
    Pis
}

impl Document for Pis {
    const NAME: &'static str = "PIS";
    const MASK: Option<&'static str> = Some("000.00000.00-0");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 11, Self::NAME, true)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let pis = Self::normalize(value)?;
        document::verify(Self::NAME, &pis, &Self::checksum(&pis[..10])?, &pis[10..])?;
        Ok(Self(pis))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 10, Self::NAME)?;
        Ok(mod11(weighted_sum(base, &WEIGHTS)).to_string())
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let base = document::fake_digits(rng, 10);
        let pis = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&pis)
    }
}
