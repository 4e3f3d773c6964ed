//! Bank slips (boleto bancário) in barcode or typed-line form.
//!
//! Barcode layout (44 digits):
//!
//! | positions | field |
//! |---|---|
//! | 0..3 | bank code |
//! | 3 | currency (9 = real) |
//! | 4 | general check digit |
//! | 5..9 | expiration factor, days since 1997-10-07 |
//! | 9..19 | amount in cents |
//! | 19..44 | free field, bank specific |
//!
//! The typed line (47 digits) regroups the same digits into five fields, the
//! first three followed by a modulo 10 check digit each.

use std::fmt;
use std::str::FromStr;

use brdocs_canonical::checksum::{boleto_mod11, mod10};
use brdocs_canonical::normalize::apply_mask;
use brdocs_canonical::{random, ValidationError};
use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::document;
use crate::Document;

const BARCODE_LEN: usize = 44;
const LINE_LEN: usize = 47;
const LINE_MASK: &str = "00000.00000 00000.000000 00000.000000 0 00000000000000";

/// Validated boleto, stored as its 44-digit barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Boleto {
    barcode: String,
    typed_line_digits: Option<String>,
}

/// Options for [`Boleto::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoletoFakeOptions {
    /// Three-digit bank code.
    pub bank: Option<String>,
    /// Amount in cents, up to ten digits.
    pub amount_cents: Option<u64>,
    /// Expiration factor, up to 9999.
    pub expiration_factor: Option<u16>,
}

/// Rebuilds the barcode from a typed line.
fn line_to_barcode(line: &str) -> String {
    [
        &line[0..4],
        &line[32..33],
        &line[33..47],
        &line[4..9],
        &line[10..20],
        &line[21..31],
    ]
    .concat()
}

fn barcode_to_line(barcode: &str) -> String {
    let first = format!("{}{}", &barcode[0..4], &barcode[19..24]);
    let second = &barcode[24..34];
    let third = &barcode[34..44];
    format!(
        "{first}{}{second}{}{third}{}{}{}",
        mod10(&first),
        mod10(second),
        mod10(third),
        &barcode[4..5],
        &barcode[5..19]
    )
}

impl Boleto {
    /// Bank code.
    pub fn bank(&self) -> &str {
        &self.barcode[0..3]
    }

    /// Currency code, `9` for the real.
    pub fn currency(&self) -> &str {
        &self.barcode[3..4]
    }

    /// General check digit.
    pub fn main_check_digit(&self) -> &str {
        &self.barcode[4..5]
    }

    /// Expiration factor as written.
    pub fn expiration_factor(&self) -> &str {
        &self.barcode[5..9]
    }

    /// Due date, `None` when the slip has no expiration (factor `0000`).
    ///
    /// Counts days from 1997-10-07 in a single cycle. Factors restarted at 1000
    /// on 2025-02-22, so slips due after that date resolve to the first cycle.
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        let factor: u64 = self.expiration_factor().parse().ok()?;
        if factor == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(1997, 10, 7)?.checked_add_days(Days::new(factor))
    }

    /// Amount in cents.
    pub fn amount_cents(&self) -> u64 {
        self.barcode[9..19].parse().unwrap_or(0)
    }

    /// Amount in reais with two decimals, e.g. `151.30`.
    pub fn amount(&self) -> String {
        let cents = self.amount_cents();
        format!("{}.{:02}", cents / 100, cents % 100)
    }

    /// Bank-specific free field.
    pub fn free_field(&self) -> &str {
        &self.barcode[19..]
    }

    /// The 44-digit barcode.
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// The 47-digit typed line, with field check digits recomputed.
    pub fn line(&self) -> String {
        barcode_to_line(&self.barcode)
    }

    /// The three field check digits as typed, when the input was a typed line.
    ///
    /// They are kept for inspection only and are not verified.
    pub fn line_check_digits(&self) -> Option<&str> {
        self.typed_line_digits.as_deref()
    }
}

impl Document for Boleto {
    const NAME: &'static str = "Boleto";
    type FakeOptions = BoletoFakeOptions;

    /// Returns the barcode, converting from a typed line when needed.
    fn normalize(value: &str) -> Result<String, ValidationError> {
        let digits: String = value
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .collect();
        if digits.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(Self::NAME, digits));
        }
        match digits.len() {
            BARCODE_LEN => Ok(digits),
            LINE_LEN => Ok(line_to_barcode(&digits)),
            n if n < BARCODE_LEN => Err(ValidationError::TooShort {
                field: Self::NAME,
                value: digits,
                expected: BARCODE_LEN,
            }),
            n if n > LINE_LEN => Err(ValidationError::TooLong {
                field: Self::NAME,
                value: digits,
                expected: LINE_LEN,
            }),
            _ => Err(ValidationError::invalid_format(Self::NAME, digits)),
        }
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let barcode = Self::normalize(value)?;
        let prefix = format!("{}{}", &barcode[..4], &barcode[5..]);
        document::verify(Self::NAME, &barcode, &Self::checksum(&prefix)?, &barcode[4..5])?;

        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        let typed_line_digits = (digits.len() == LINE_LEN)
            .then(|| [&digits[9..10], &digits[20..21], &digits[31..32]].concat());
        Ok(Self {
            barcode,
            typed_line_digits,
        })
    }

    /// General check digit for the 43 barcode digits that exclude it.
    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let digits = document::digit_prefix(prefix, BARCODE_LEN - 1, Self::NAME)?;
        Ok(boleto_mod11(digits).to_string())
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let bank = match &options.bank {
            Some(bank) if bank.len() == 3 && bank.bytes().all(|b| b.is_ascii_digit()) => {
                bank.clone()
            }
            Some(bank) => return Err(ValidationError::out_of_bounds("bank", bank.as_str())),
            None => random::digits(rng, 3),
        };
        let amount = match options.amount_cents {
            Some(cents) if cents > 9_999_999_999 => {
                return Err(ValidationError::out_of_bounds("amount_cents", cents.to_string()))
            }
            Some(cents) => cents,
            None => random::between(rng, 1, 999_999),
        };
        let factor = match options.expiration_factor {
            Some(factor) if factor > 9999 => {
                return Err(ValidationError::out_of_bounds("expiration_factor", factor.to_string()))
            }
            Some(factor) => u64::from(factor),
            None => random::between(rng, 1000, 9999),
        };

        let head = format!("{bank}9");
        let tail = format!("{factor:04}{amount:010}{}", random::digits(rng, 25));
        let dv = Self::checksum(&format!("{head}{tail}"))?;
        Self::parse(&format!("{head}{dv}{tail}"))
    }

    /// Renders the typed line with its separators.
    fn mask(&self) -> String {
        let line = self.line();
        apply_mask(&line, LINE_MASK).unwrap_or(line)
    }
}

impl AsRef<str> for Boleto {
    fn as_ref(&self) -> &str {
        &self.barcode
    }
}

impl fmt::Display for Boleto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.barcode)
    }
}

impl FromStr for Boleto {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Boleto {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Boleto {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Boleto> for String {
    fn from(value: Boleto) -> Self {
        value.barcode
    }
}
