use brdocs_canonical::checksum::mod31_crockford;
use brdocs_canonical::normalize::fit_to_length;
use brdocs_canonical::{crockford, random, FitPolicy, ValidationError};
use rand::Rng;

use crate::document::{self, document_newtype};
use crate::Document;

const WEIGHTS: [u32; 7] = [4, 3, 9, 5, 7, 1, 8];

document_newtype! {
    /// Código de Imóvel Brasileiro (CIB) from SINTER: 7 Crockford base32
    /// symbols and 1 check symbol.
    CbiSinter
}

impl Document for CbiSinter {
    const NAME: &'static str = "CBISinter";
    const MASK: Option<&'static str> = Some("0000000-0");
    type FakeOptions = ();

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let folded = crockford::normalize(value, Self::NAME)?;
        if folded.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !crockford::is_canonical(&folded) {
            return Err(ValidationError::invalid_format(Self::NAME, folded));
        }
        fit_to_length(&folded, 8, &FitPolicy::strict(), Self::NAME)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let cib = Self::normalize(value)?;
        document::verify(Self::NAME, &cib, &Self::checksum(&cib[..7])?, &cib[7..])?;
        Ok(Self(cib))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        if prefix.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        let values = prefix
            .chars()
            .map(crockford::char_to_int)
            .collect::<Option<Vec<u32>>>()
            .filter(|values| values.len() == WEIGHTS.len())
            .ok_or_else(|| ValidationError::invalid_format(Self::NAME, prefix))?;
        let sum: u32 = values.iter().zip(WEIGHTS).map(|(v, w)| v * w).sum();
        Ok(mod31_crockford(sum).to_string())
    }

    fn fake_with<R: Rng + ?Sized>(rng: &mut R, _: &()) -> Result<Self, ValidationError> {
        let base = random::from_alphabet(rng, crockford::ALPHABET, 7);
        let cib = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&cib)
    }
}
