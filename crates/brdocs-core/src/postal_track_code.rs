use std::sync::LazyLock;

use brdocs_canonical::checksum::{mod11_with_exceptions, weighted_sum};
use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use regex::Regex;

use crate::document::{self, document_newtype};
use crate::Document;

const WEIGHTS: [u32; 8] = [8, 6, 4, 2, 3, 5, 9, 7];
const EXCEPTIONS: [(u32, u32); 2] = [(0, 5), (1, 0)];

static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{9}[A-Z]{2}$").expect("postal track code regex")
});

document_newtype! {
    /// Correios tracking code, e.g. `SS987654321BR`: service letters, 8 digits,
    /// 1 check digit and the origin country.
    PostalTrackCode
}

impl PostalTrackCode {
    /// Two-letter service code.
    pub fn service(&self) -> &str {
        &self.0[..2]
    }

    /// Eight-digit object number.
    pub fn number(&self) -> &str {
        &self.0[2..10]
    }

    /// Two-letter origin country.
    pub fn country(&self) -> &str {
        &self.0[11..]
    }
}

impl Document for PostalTrackCode {
    const NAME: &'static str = "PostalTrackCode";
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let code = value.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !SHAPE.is_match(&code) {
            return Err(ValidationError::invalid_format(Self::NAME, code));
        }
        Ok(code)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let code = Self::normalize(value)?;
        document::verify(Self::NAME, &code, &Self::checksum(&code[2..10])?, &code[10..11])?;
        Ok(Self(code))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let number = document::digit_prefix(prefix, 8, Self::NAME)?;
        Ok(mod11_with_exceptions(weighted_sum(number, &WEIGHTS), &EXCEPTIONS).to_string())
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let number = random::digits(rng, 8);
        let code = format!(
            "{}{number}{}BR",
            random::letters(rng, 2),
            Self::checksum(&number)?
        );
        Self::parse(&code)
    }
}
