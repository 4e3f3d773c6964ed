use std::sync::LazyLock;

use brdocs_canonical::{random, ValidationError};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::document_newtype;
use crate::Document;

/// Brazilian area codes (DDD) in service.
pub const DDDS: [&str; 67] = [
    "11", "12", "13", "14", "15", "16", "17", "18", "19", "21", "22", "24", "27", "28", "31",
    "32", "33", "34", "35", "37", "38", "41", "42", "43", "44", "45", "46", "47", "48", "49",
    "51", "53", "54", "55", "61", "62", "63", "64", "65", "66", "67", "68", "69", "71", "73",
    "74", "75", "77", "79", "81", "82", "83", "84", "85", "86", "87", "88", "89", "91", "92",
    "93", "94", "95", "96", "97", "98", "99",
];

const COUNTRY_CODE: &str = "+55";
const MOBILE_PREFIXES: [&str; 3] = ["99", "98", "97"];
const LANDLINE_PREFIXES: [&str; 2] = ["3", "4"];

static SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+55)?(?P<ddd>[0-9]{2})(?P<subscriber>9[0-9]{8}|[34][0-9]{7})$")
        .expect("phone regex")
});

document_newtype! {
    /// Brazilian phone number, stored as `+55` followed by the DDD and subscriber number.
    ///
    /// Mobile numbers have 9 digits starting with 9; landlines 8 digits starting with 3 or 4.
    Phone
}

/// Options for [`Phone::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneFakeOptions {
    /// Area code; must be one of [`DDDS`].
    pub ddd: Option<String>,
    /// Generate a mobile number.
    pub is_mobile: bool,
    /// Generate a landline number (ignored when `is_mobile` is set).
    pub is_landline: bool,
}

impl Phone {
    /// Country code, always `+55`.
    pub fn ddi(&self) -> &str {
        &self.0[..3]
    }

    /// Two-digit area code.
    pub fn ddd(&self) -> &str {
        &self.0[3..5]
    }

    /// Subscriber number without the area code.
    pub fn subscriber(&self) -> &str {
        &self.0[5..]
    }

    /// True for 9-digit mobile numbers.
    pub fn is_mobile(&self) -> bool {
        self.subscriber().len() == 9
    }

    /// Number rendered with the country code, e.g. `+55 11 987654321`.
    pub fn mask_with_country(&self) -> String {
        format!("{} {}", self.ddi(), self.mask())
    }
}

fn known_ddd(ddd: &str) -> Result<(), ValidationError> {
    if DDDS.contains(&ddd) {
        Ok(())
    } else {
        Err(ValidationError::NotFound {
            field: "DDD",
            value: ddd.to_owned(),
        })
    }
}

impl Document for Phone {
    const NAME: &'static str = "Phone";
    type FakeOptions = PhoneFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let cleaned: String = value
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | '-') && !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        let captures = SHAPE
            .captures(&cleaned)
            .ok_or_else(|| ValidationError::invalid_format(Self::NAME, cleaned.as_str()))?;
        let ddd = &captures["ddd"];
        known_ddd(ddd)?;
        Ok(format!("{COUNTRY_CODE}{ddd}{}", &captures["subscriber"]))
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::normalize(value).map(Self)
    }

    fn mask(&self) -> String {
        format!("{} {}", self.ddd(), self.subscriber())
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let ddd = match &options.ddd {
            Some(ddd) => {
                known_ddd(ddd)?;
                ddd.as_str()
            }
            None => random::choose(rng, &DDDS).copied().unwrap_or("11"),
        };

        let prefixes: Vec<&str> = if options.is_mobile {
            MOBILE_PREFIXES.to_vec()
        } else if options.is_landline {
            LANDLINE_PREFIXES.to_vec()
        } else {
            MOBILE_PREFIXES.iter().chain(&LANDLINE_PREFIXES).copied().collect()
        };
        let prefix = random::choose(rng, &prefixes).copied().unwrap_or("3");

        let phone = format!("{COUNTRY_CODE}{ddd}{prefix}{}", random::digits(rng, 7));
        Self::parse(&phone)
    }
}
