//! Civil registry certificate numbers (matrícula), as defined by CNJ
//! Provimento 3/2009.
//!
//! Layout of the 32 digits:
//!
//! | digits | field |
//! |---|---|
//! | 1-6 | CNS code of the registry office |
//! | 7-8 | collection (`01` own, `02` incorporated) |
//! | 9-10 | service type (55 = civil registry of natural persons) |
//! | 11-14 | registration year |
//! | 15 | book type |
//! | 16-20 | book number |
//! | 21-23 | page |
//! | 24-30 | term |
//! | 31-32 | check digits |

use brdocs_canonical::checksum::{mod11_remainder, weighted_sum};
use brdocs_canonical::{random, ValidationError};
use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::document::{self, document_newtype};
use crate::Document;

document_newtype! {
    /// Certidão de registro civil: 30 digits and 2 check digits.
    Certidao
}

/// Book type (digit 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookType {
    /// Births (A).
    Birth,
    /// Marriages (B).
    Marriage,
    /// Religious marriages with civil effect (B auxiliary).
    ReligiousMarriage,
    /// Deaths (C).
    Death,
    /// Stillbirths (C auxiliary).
    Stillbirth,
    /// Marriage banns (D).
    Banns,
    /// Other acts (E).
    Other,
}

impl BookType {
    /// Digit used in the certificate number.
    pub fn code(self) -> u8 {
        match self {
            BookType::Birth => 1,
            BookType::Marriage => 2,
            BookType::ReligiousMarriage => 3,
            BookType::Death => 4,
            BookType::Stillbirth => 5,
            BookType::Banns => 6,
            BookType::Other => 7,
        }
    }

    /// Inverse of [`BookType::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => BookType::Birth,
            2 => BookType::Marriage,
            3 => BookType::ReligiousMarriage,
            4 => BookType::Death,
            5 => BookType::Stillbirth,
            6 => BookType::Banns,
            7 => BookType::Other,
            _ => return None,
        })
    }
}

/// Notary service type (digits 9 and 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryService {
    /// Notes.
    Notes,
    /// Protest of titles.
    Protest,
    /// Real estate registry.
    RealEstate,
    /// Registry of titles and documents.
    TitlesAndDocuments,
    /// Civil registry of natural persons.
    CivilRegistry,
    /// Maritime contracts.
    MaritimeContracts,
    /// Distribution.
    Distribution,
}

impl RegistryService {
    /// Two-digit code used in the certificate number.
    pub fn code(self) -> u8 {
        match self {
            RegistryService::Notes => 51,
            RegistryService::Protest => 52,
            RegistryService::RealEstate => 53,
            RegistryService::TitlesAndDocuments => 54,
            RegistryService::CivilRegistry => 55,
            RegistryService::MaritimeContracts => 56,
            RegistryService::Distribution => 57,
        }
    }

    /// Inverse of [`RegistryService::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            51 => RegistryService::Notes,
            52 => RegistryService::Protest,
            53 => RegistryService::RealEstate,
            54 => RegistryService::TitlesAndDocuments,
            55 => RegistryService::CivilRegistry,
            56 => RegistryService::MaritimeContracts,
            57 => RegistryService::Distribution,
            _ => return None,
        })
    }
}

/// Options for [`Certidao::fake_with`]. Unset fields are drawn at random, except
/// collection (`01`), service (civil registry), year (current) and book type (births).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertidaoFakeOptions {
    /// Registry office code, up to 6 digits.
    pub cns: Option<String>,
    /// Collection, up to 2 digits.
    pub collection: Option<String>,
    /// Service type.
    pub service: Option<RegistryService>,
    /// Registration year.
    pub year: Option<u16>,
    /// Book type.
    pub book_type: Option<BookType>,
    /// Book number, up to 99999.
    pub book: Option<u32>,
    /// Page, up to 999.
    pub page: Option<u32>,
    /// Term, up to 9999999.
    pub term: Option<u32>,
}

impl Certidao {
    /// Registry office CNS code.
    pub fn cns(&self) -> &str {
        &self.0[..6]
    }

    /// Collection code.
    pub fn collection(&self) -> &str {
        &self.0[6..8]
    }

    /// Service type, when the code is a known one.
    pub fn service(&self) -> Option<RegistryService> {
        self.0[8..10].parse().ok().and_then(RegistryService::from_code)
    }

    /// Registration year.
    pub fn year(&self) -> &str {
        &self.0[10..14]
    }

    /// Book type, when the digit is a known one.
    pub fn book_type(&self) -> Option<BookType> {
        self.0[14..15].parse().ok().and_then(BookType::from_code)
    }

    /// Book number.
    pub fn book(&self) -> &str {
        &self.0[15..20]
    }

    /// Page within the book.
    pub fn page(&self) -> &str {
        &self.0[20..23]
    }

    /// Term number.
    pub fn term(&self) -> &str {
        &self.0[23..30]
    }

    /// Embedded check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[30..]
    }
}

fn padded_digits(
    field: &'static str,
    value: &str,
    width: usize,
) -> Result<String, ValidationError> {
    if value.is_empty() || value.len() > width || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::out_of_bounds(field, value));
    }
    Ok(format!("{value:0>width$}"))
}

fn bounded(field: &'static str, value: u32, max: u32, width: usize) -> Result<String, ValidationError> {
    if value > max {
        return Err(ValidationError::out_of_bounds(field, value.to_string()));
    }
    Ok(format!("{value:0width$}"))
}

fn descending_weights(from: u32) -> Vec<u32> {
    (2..=from).rev().collect()
}

impl Document for Certidao {
    const NAME: &'static str = "Certidao";
    const MASK: Option<&'static str> = Some("000000 00 00 0000 0 00000 000 0000000 00");
    type FakeOptions = CertidaoFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        document::digits(value, 32, Self::NAME, false)
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let certidao = Self::normalize(value)?;
        document::verify(
            Self::NAME,
            &certidao,
            &Self::checksum(&certidao[..30])?,
            &certidao[30..],
        )?;
        Ok(Self(certidao))
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        let base = document::digit_prefix(prefix, 30, Self::NAME)?;
        let first = mod11_remainder(weighted_sum(base, &descending_weights(31)), 1);
        let second = mod11_remainder(
            weighted_sum(&format!("{base}{first}"), &descending_weights(32)),
            1,
        );
        Ok(format!("{first}{second}"))
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let cns = match &options.cns {
            Some(cns) => padded_digits("cns", cns, 6)?,
            None => random::digits(rng, 6),
        };
        let collection = match &options.collection {
            Some(collection) => padded_digits("collection", collection, 2)?,
            None => "01".to_owned(),
        };
        let service = options.service.unwrap_or(RegistryService::CivilRegistry);
        let year = match options.year {
            Some(year) => bounded("year", u32::from(year), 9999, 4)?,
            None => chrono::Utc::now().year().to_string(),
        };
        let book_type = options.book_type.unwrap_or(BookType::Birth);
        let book = match options.book {
            Some(book) => bounded("book", book, 99_999, 5)?,
            None => random::digits(rng, 5),
        };
        let page = match options.page {
            Some(page) => bounded("page", page, 999, 3)?,
            None => random::digits(rng, 3),
        };
        let term = match options.term {
            Some(term) => bounded("term", term, 9_999_999, 7)?,
            None => random::digits(rng, 7),
        };

        let base = format!(
            "{cns}{collection}{}{year}{}{book}{page}{term}",
            service.code(),
            book_type.code()
        );
        let certidao = format!("{base}{}", Self::checksum(&base)?);
        Self::parse(&certidao)
    }
}
