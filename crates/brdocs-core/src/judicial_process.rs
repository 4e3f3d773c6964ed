use brdocs_canonical::checksum::{mod97_check_digits, mod97_factored};
use brdocs_canonical::normalize::{insert_at, remove_range};
use brdocs_canonical::{random, ValidationError};
use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::document::{self, document_newtype};
use crate::Document;

/// Position of the two check digits inside the 20-digit number.
const CHECK_DIGITS_AT: usize = 7;

document_newtype! {
    /// CNJ unified judicial process number, `NNNNNNN-DD.AAAA.J.TR.OOOO`.
    ///
    /// The check digits sit at position 7 and are computed with ISO 7064
    /// mod 97-10 over the other 18 digits.
    JudicialProcess
}

/// Options for [`JudicialProcess::fake_with`]. Every field is validated before use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudicialProcessFakeOptions {
    /// Justice branch, one digit from 1 to 9.
    pub court: Option<String>,
    /// Court, two digits other than `00`.
    pub sub_court: Option<String>,
    /// Filing year, four digits.
    pub year: Option<String>,
    /// Originating unit, four digits other than `0000`.
    pub origin: Option<String>,
}

impl JudicialProcess {
    /// Sequential process number (`NNNNNNN`).
    pub fn process_number(&self) -> &str {
        &self.0[..7]
    }

    /// Embedded check digits (`DD`).
    pub fn check_digits(&self) -> &str {
        &self.0[7..9]
    }

    /// Filing year (`AAAA`).
    pub fn year(&self) -> &str {
        &self.0[9..13]
    }

    /// Justice branch (`J`).
    pub fn court(&self) -> &str {
        &self.0[13..14]
    }

    /// Court within the branch (`TR`).
    pub fn sub_court(&self) -> &str {
        &self.0[14..16]
    }

    /// Originating unit (`OOOO`).
    pub fn origin(&self) -> &str {
        &self.0[16..]
    }
}

fn check_component(
    field: &'static str,
    value: &str,
    length: usize,
    forbidden: Option<&str>,
) -> Result<(), ValidationError> {
    let well_formed = value.len() == length && value.bytes().all(|b| b.is_ascii_digit());
    if !well_formed || forbidden == Some(value) {
        return Err(ValidationError::out_of_bounds(field, value));
    }
    Ok(())
}

impl Document for JudicialProcess {
    const NAME: &'static str = "JudicialProcess";
    const MASK: Option<&'static str> = Some("0000000-00.0000.0.00.0000");
    type FakeOptions = JudicialProcessFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 20, Self::NAME, false)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let number = Self::normalize(value)?;
        check_component("court", &number[13..14], 1, Some("0"))?;
        let prefix = remove_range(&number, CHECK_DIGITS_AT, CHECK_DIGITS_AT + 2);
        document::verify(Self::NAME, &number, &Self::checksum(&prefix)?, &number[7..9])?;
        Ok(Self(number))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 18, Self::NAME)?;
        let rest = mod97_factored(&base[..7], &base[7..14], &base[14..])?;
        Ok(mod97_check_digits(rest))
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let court = match &options.court {
            Some(court) => {
                check_component("court", court, 1, Some("0"))?;
                court.clone()
            }
            None => random::between(rng, 1, 9).to_string(),
        };
        let sub_court = match &options.sub_court {
            Some(sub_court) => {
                check_component("sub_court", sub_court, 2, Some("00"))?;
                sub_court.clone()
            }
            None => format!("{:02}", random::between(rng, 1, 99)),
        };
        let year = match &options.year {
            Some(year) => {
                check_component("year", year, 4, None)?;
                year.clone()
            }
            None => {
                let current = u64::try_from(chrono::Utc::now().year()).unwrap_or(2000);
                (current - random::between(rng, 0, 9)).to_string()
            }
        };
        let origin = match &options.origin {
            Some(origin) => {
                check_component("origin", origin, 4, Some("0000"))?;
                origin.clone()
            }
            None => format!("{:04}", random::between(rng, 1, 9999)),
        };

        let prefix = format!("{}{year}{court}{sub_court}{origin}", random::digits(rng, 7));
        let number = insert_at(&prefix, &Self::checksum(&prefix)?, CHECK_DIGITS_AT);
        Self::parse(&number)
    }
}
