use brdocs_canonical::checksum::{mod11, weighted_sum};
use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::document::{self, document_newtype};
use crate::{Document, Uf};

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

document_newtype! {
    /// Cadastro de Pessoas Físicas: 9 base digits and 2 check digits.
    ///
    /// The ninth digit identifies the fiscal region that issued the number.
    Cpf
}

/// Options for [`Cpf::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpfFakeOptions {
    /// Fiscal region digit (0-9) placed in the ninth position.
    pub fiscal_region: Option<u8>,
}

impl Cpf {
    /// Fiscal region digit (ninth position).
    pub fn fiscal_region(&self) -> u8 {
        self.0.as_bytes()[8] - b'0'
    }

    /// States served by the fiscal region that issued this number.
    pub fn issuing_states(&self) -> &'static [Uf] {
        region_states(self.fiscal_region())
    }
}

fn region_states(region: u8) -> &'static [Uf] {
    match region {
        1 => &[Uf::DF, Uf::GO, Uf::MS, Uf::MT, Uf::TO],
        2 => &[Uf::AC, Uf::AM, Uf::AP, Uf::PA, Uf::RO, Uf::RR],
        3 => &[Uf::CE, Uf::MA, Uf::PI],
        4 => &[Uf::AL, Uf::PB, Uf::PE, Uf::RN],
        5 => &[Uf::BA, Uf::SE],
        6 => &[Uf::MG],
        7 => &[Uf::ES, Uf::RJ],
        8 => &[Uf::SP],
        9 => &[Uf::PR, Uf::SC],
        _ => &[Uf::RS],
    }
}

impl Document for Cpf {
    const NAME: &'static str = "CPF";
    const MASK: Option<&'static str> = Some("000.000.000-00");
    type FakeOptions = CpfFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 11, Self::NAME, true)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let cpf = Self::normalize(value)?;
        document::verify(Self::NAME, &cpf, &Self::checksum(&cpf[..9])?, &cpf[9..])?;
        Ok(Self(cpf))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 9, Self::NAME)?;
        let first = mod11(weighted_sum(base, &FIRST_WEIGHTS));
        let second = mod11(weighted_sum(&format!("{base}{first}"), &SECOND_WEIGHTS));
        Ok(format!("{first}{second}"))
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let region = match options.fiscal_region {
            Some(region) if region > 9 => {
                return Err(ValidationError::out_of_bounds(
                    "fiscal_region",
                    region.to_string(),
                ))
            }
            Some(region) => region.to_string(),
            None => random::digits(rng, 1),
        };
        let base = format!("{}{region}", document::fake_digits(rng, 8));
        let cpf = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&cpf)
    }
}
