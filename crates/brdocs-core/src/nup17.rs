use brdocs_canonical::checksum::{mod11_with_exceptions, weighted_sum};
use brdocs_canonical::{random, ValidationError};
use rand::Rng;

use crate::document::{self, document_newtype};
use crate::Document;

/// `11 - rest`, except that 11 becomes 1 and 10 becomes 0.
const EXCEPTIONS: [(u32, u32); 2] = [(0, 1), (1, 0)];

document_newtype! {
    /// Número Único de Protocolo of the federal administration, `AAAAA.NNNNNN/YYYY-DD`.
    Nup17
}

impl Nup17 {
    /// Registering agency code.
    pub fn agency(&self) -> &str {
        &self.0[..5]
    }

    /// Sequential number within the agency and year.
    pub fn sequence(&self) -> &str {
        &self.0[5..11]
    }

    /// Registration year.
    pub fn year(&self) -> &str {
        &self.0[11..15]
    }
}

fn ascending_weights(count: u32) -> Vec<u32> {
    (2..2 + count).collect()
}

impl Document for Nup17 {
    const NAME: &'static str = "NUP17";
    const MASK: Option<&'static str> = Some("00000.000000/0000-00");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 17, Self::NAME, false)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let nup = Self::normalize(value)?;
        document::verify(Self::NAME, &nup, &Self::checksum(&nup[..15])?, &nup[15..])?;
        Ok(Self(nup))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 15, Self::NAME)?;
        let reversed: String = base.chars().rev().collect();
        let first = mod11_with_exceptions(
            weighted_sum(&reversed, &ascending_weights(15)),
            &EXCEPTIONS,
        );
        let second = mod11_with_exceptions(
            weighted_sum(&format!("{first}{reversed}"), &ascending_weights(16)),
            &EXCEPTIONS,
        );
        Ok(format!("{first}{second}"))
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let base = random::digits(rng, 15);
        let nup = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&nup)
    }
}
