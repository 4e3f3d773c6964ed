use brdocs_canonical::checksum::{mod11_remainder, weighted_sum};
use brdocs_canonical::{random, ValidationError};
use rand::Rng;

use crate::document::{self, document_newtype};
use crate::{Document, Uf};

const SEQUENCE_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
const STATE_WEIGHTS: [u32; 3] = [7, 8, 9];

/// Electoral state codes 01 to 27. Code 28 (`ZZ`) is used for voters abroad.
const STATE_CODES: [Uf; 27] = [
    Uf::SP,
    Uf::MG,
    Uf::RJ,
    Uf::RS,
    Uf::BA,
    Uf::PR,
    Uf::CE,
    Uf::PE,
    Uf::SC,
    Uf::GO,
    Uf::MA,
    Uf::PB,
    Uf::PA,
    Uf::ES,
    Uf::PI,
    Uf::RN,
    Uf::AL,
    Uf::MT,
    Uf::MS,
    Uf::DF,
    Uf::SE,
    Uf::AM,
    Uf::RO,
    Uf::AC,
    Uf::AP,
    Uf::RR,
    Uf::TO,
];

document_newtype! {
    /// Título de Eleitor: 8-digit sequence, 2-digit state code and 2 check digits.
    TituloEleitor
}

impl TituloEleitor {
    /// Two-digit electoral state code (positions 9 and 10).
    pub fn uf_code(&self) -> &str {
        &self.0[8..10]
    }

    /// Issuing state, `None` for voters registered abroad (code 28) or unknown codes.
    pub fn state(&self) -> Option<Uf> {
        let code: usize = self.uf_code().parse().ok()?;
        code.checked_sub(1)
            .and_then(|index| STATE_CODES.get(index))
            .copied()
    }

    /// True for titles issued to voters abroad.
    pub fn is_abroad(&self) -> bool {
        self.uf_code() == "28"
    }
}

impl Document for TituloEleitor {
    const NAME: &'static str = "TituloEleitor";
    const MASK: Option<&'static str> = Some("0000.0000.0000");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 12, Self::NAME, true)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let titulo = Self::normalize(value)?;
        document::verify(
            Self::NAME,
            &titulo,
            &Self::checksum(&titulo[..10])?,
            &titulo[10..],
        )?;
        Ok(Self(titulo))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 10, Self::NAME)?;
        let first = mod11_remainder(weighted_sum(&base[..8], &SEQUENCE_WEIGHTS), 0);
        let second = mod11_remainder(
            weighted_sum(&format!("{}{first}", &base[8..]), &STATE_WEIGHTS),
            0,
        );
        Ok(format!("{first}{second}"))
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let sequence = document::fake_digits(rng, 8);
        let base = format!("{sequence}{:02}", random::between(rng, 1, 28));
        let titulo = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&titulo)
    }
}
