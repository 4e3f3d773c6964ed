use brdocs_canonical::checksum::{mod11, weighted_sum};
use brdocs_canonical::normalize::{fit_to_length, is_repeated_sequence, strip_formatting};
use brdocs_canonical::{random, FitPolicy, ValidationError};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::document::{self, document_newtype};
use crate::Document;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

document_newtype! {
    /// Cadastro Nacional da Pessoa Jurídica: 12 base characters and 2 check digits.
    ///
    /// The base may be alphanumeric (`[0-9A-Z]`); letters weigh their ASCII code
    /// minus 48. Check digits are always numeric.
    Cnpj
}

/// Options for [`Cnpj::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnpjFakeOptions {
    /// Draw the base from `[0-9A-Z]` instead of digits only.
    pub alphanumeric: bool,
}

impl Cnpj {
    /// Company root (first 8 characters).
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// Branch number (characters 9 to 12).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// True when the base carries letters.
    pub fn is_alphanumeric(&self) -> bool {
        self.0[..12].bytes().any(|b| b.is_ascii_uppercase())
    }
}

fn is_base_char(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase()
}

impl Document for Cnpj {
    const NAME: &'static str = "CNPJ";
    const MASK: Option<&'static str> = Some("00.000.000/0000-00");
    type FakeOptions = CnpjFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let stripped = strip_formatting(value).to_ascii_uppercase();
        if stripped.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !stripped.bytes().all(is_base_char) {
            return Err(ValidationError::invalid_format(Self::NAME, stripped));
        }
        let cnpj = fit_to_length(
            &stripped,
            14,
            &FitPolicy::strict().rejecting_repeated(),
            Self::NAME,
        )?;
        if !cnpj[12..].bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(Self::NAME, cnpj));
        }
        Ok(cnpj)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let cnpj = Self::normalize(value)?;
        document::verify(Self::NAME, &cnpj, &Self::checksum(&cnpj[..12])?, &cnpj[12..])?;
        Ok(Self(cnpj))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        if prefix.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        let base = prefix.to_ascii_uppercase();
        if base.len() != 12 || !base.bytes().all(is_base_char) {
            return Err(ValidationError::invalid_format(Self::NAME, prefix));
        }
        let first = mod11(weighted_sum(&base, &FIRST_WEIGHTS));
        let second = mod11(weighted_sum(&format!("{base}{first}"), &SECOND_WEIGHTS));
        Ok(format!("{first}{second}"))
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let base = if options.alphanumeric {
            loop {
                let drawn = random::from_alphabet(rng, ALPHANUMERIC, 12);
                if !is_repeated_sequence(&drawn) {
                    break drawn;
                }
            }
        } else {
            document::fake_digits(rng, 12)
        };
        let cnpj = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&cnpj)
    }
}
