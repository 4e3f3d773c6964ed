use std::sync::LazyLock;

use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::document_newtype;
use crate::{Document, Uf};

static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}\.?[0-9]{3}-|[0-9]{5}-?)[0-9]{3}$").expect("CEP regex")
});

/// Inclusive CEP ranges allocated to each state.
const RANGES: [(Uf, &[(u32, u32)]); 27] = [
    (Uf::SP, &[(1_000_000, 19_999_999)]),
    (Uf::RJ, &[(20_000_000, 28_999_999)]),
    (Uf::ES, &[(29_000_000, 29_999_999)]),
    (Uf::MG, &[(30_000_000, 39_999_999)]),
    (Uf::BA, &[(40_000_000, 48_999_999)]),
    (Uf::SE, &[(49_000_000, 49_999_999)]),
    (Uf::PE, &[(50_000_000, 56_999_999)]),
    (Uf::AL, &[(57_000_000, 57_999_999)]),
    (Uf::PB, &[(58_000_000, 58_999_999)]),
    (Uf::RN, &[(59_000_000, 59_999_999)]),
    (Uf::CE, &[(60_000_000, 63_999_999)]),
    (Uf::PI, &[(64_000_000, 64_999_999)]),
    (Uf::MA, &[(65_000_000, 65_999_999)]),
    (Uf::PA, &[(66_000_000, 68_899_999)]),
    (Uf::AP, &[(68_900_000, 68_999_999)]),
    (Uf::AM, &[(69_000_000, 69_299_999), (69_400_000, 69_899_999)]),
    (Uf::RR, &[(69_300_000, 69_399_999)]),
    (Uf::AC, &[(69_900_000, 69_999_999)]),
    (Uf::DF, &[(70_000_000, 72_799_999), (73_000_000, 73_699_999)]),
    (Uf::GO, &[(72_800_000, 72_999_999), (73_700_000, 76_799_999)]),
    (Uf::RO, &[(76_800_000, 76_999_999)]),
    (Uf::TO, &[(77_000_000, 77_999_999)]),
    (Uf::MT, &[(78_000_000, 78_899_999)]),
    (Uf::MS, &[(79_000_000, 79_999_999)]),
    (Uf::PR, &[(80_000_000, 87_999_999)]),
    (Uf::SC, &[(88_000_000, 89_999_999)]),
    (Uf::RS, &[(90_000_000, 99_999_999)]),
];

document_newtype! {
    /// Código de Endereçamento Postal, 8 digits. No check digit.
    Cep
}

/// Options for [`Cep::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CepFakeOptions {
    /// Draw the CEP from one of this state's ranges.
    pub uf: Option<Uf>,
}

impl Cep {
    /// Parses `value` and requires it to fall inside one of `uf`'s ranges.
    pub fn parse_in_state(value: &str, uf: Uf) -> Result<Self, ValidationError> {
        let cep = Self::parse(value)?;
        if cep.state()? != uf {
            return Err(ValidationError::out_of_bounds(Self::NAME, cep.0));
        }
        Ok(cep)
    }

    /// State whose ranges contain this CEP.
    pub fn state(&self) -> Result<Uf, ValidationError> {
        let number: u32 = self
            .0
            .parse()
            .map_err(|_| ValidationError::invalid_format(Self::NAME, self.0.as_str()))?;
        RANGES
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|(lo, hi)| (*lo..=*hi).contains(&number)))
            .map(|(uf, _)| *uf)
            .ok_or_else(|| {
                tracing::trace!(cep = %self.0, "no state range matches");
                ValidationError::NotFound {
                    field: Self::NAME,
                    value: self.0.clone(),
                }
            })
    }

    /// State for a raw CEP string, formatted or not.
    pub fn state_of(value: &str) -> Result<Uf, ValidationError> {
        Self::parse(value)?.state()
    }

    /// Ranges allocated to `uf`.
    pub fn ranges(uf: Uf) -> &'static [(u32, u32)] {
        RANGES
            .iter()
            .find(|(candidate, _)| *candidate == uf)
            .map(|(_, ranges)| *ranges)
            .unwrap_or(&[])
    }
}

impl Document for Cep {
    const NAME: &'static str = "CEP";
    const MASK: Option<&'static str> = Some("00000-000");
    type FakeOptions = CepFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let cep = value.trim();
        if cep.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !SHAPE.is_match(cep) {
            return Err(ValidationError::invalid_format(Self::NAME, cep));
        }
        Ok(cep.replace(|c: char| c == '.' || c == '-', ""))
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::normalize(value).map(Self)
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let cep = match options.uf {
            Some(uf) => {
                let (lo, hi) = random::choose(rng, Self::ranges(uf))
                    .copied()
                    .ok_or_else(|| ValidationError::NotFound {
                        field: "UF",
                        value: uf.to_string(),
                    })?;
                format!("{:08}", random::between(rng, u64::from(lo), u64::from(hi)))
            }
            None => random::digits(rng, 8),
        };
        Self::parse(&cep)
    }
}
