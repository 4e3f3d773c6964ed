//! Pix "copia e cola" payloads (static BR Code).
//!
//! A payload is a flat run of EMV fields, each `TT LL VALUE` with a two-digit
//! tag and a two-digit length, closed by field `63` carrying the CRC-16 of
//! everything before its value.

use std::fmt;
use std::str::FromStr;

use brdocs_canonical::crc::crc16_hex;
use brdocs_canonical::ValidationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Document, PixKey};

const CRC_TAG: &str = "63";
const CRC_LENGTH: usize = 4;

/// One tag-length-value field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixField {
    /// Two-digit tag.
    pub tag: String,
    /// Declared length of `value`, in characters.
    pub length: usize,
    /// Raw value.
    pub value: String,
    /// Nested fields, present when the value is itself exactly one field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PixField>,
}

/// Splits a payload into fields.
///
/// Fails with [`ValidationError::InvalidFormat`] when a header is not four
/// digits, a value is shorter than declared, or a step consumes nothing.
pub fn parse_fields(payload: &str) -> Result<Vec<PixField>, ValidationError> {
    let mut fields = Vec::new();
    let mut rest = payload;
    while !rest.is_empty() {
        let (field, next) = match next_field(rest)? {
            Some(step) if step.1.len() < rest.len() => step,
            _ => return Err(ValidationError::invalid_format(PixCopyPaste::NAME, rest)),
        };
        fields.push(field);
        rest = next;
    }
    Ok(fields)
}

fn header(input: &str) -> Option<(&str, usize)> {
    let head = input.get(..4)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&head[..2], head[2..].parse().ok()?))
}

fn next_field(input: &str) -> Result<Option<(PixField, &str)>, ValidationError> {
    let Some((tag, length)) = header(input) else {
        return Ok(None);
    };
    let body = &input[4..];
    let split = body
        .char_indices()
        .nth(length)
        .map_or(body.len(), |(offset, _)| offset);
    let (value, rest) = body.split_at(split);
    if value.chars().count() != length {
        return Err(ValidationError::invalid_format(PixCopyPaste::NAME, input));
    }

    let children = match header(value) {
        Some((_, inner)) if value[4..].chars().count() == inner => parse_fields(value)?,
        _ => Vec::new(),
    };

    Ok(Some((
        PixField {
            tag: tag.to_owned(),
            length,
            value: value.to_owned(),
            children,
        },
        rest,
    )))
}

/// Validated Pix copy-and-paste payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PixCopyPaste {
    payload: String,
    fields: Vec<PixField>,
}

/// Options for [`PixCopyPaste::fake_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixCopyPasteFakeOptions {
    /// Pix key; a random one when unset.
    pub key: Option<String>,
    /// Transaction amount such as `10.00`; omitted when unset.
    pub amount: Option<String>,
    /// Merchant name, up to 25 characters.
    pub merchant_name: Option<String>,
    /// Merchant city, up to 15 characters.
    pub merchant_city: Option<String>,
}

impl PixCopyPaste {
    /// Top-level fields in payload order.
    pub fn fields(&self) -> &[PixField] {
        &self.fields
    }

    /// First top-level field with `tag`.
    pub fn field(&self, tag: &str) -> Option<&PixField> {
        self.fields.iter().find(|field| field.tag == tag)
    }

    /// Merchant name (tag 59).
    pub fn merchant_name(&self) -> Option<&str> {
        self.field("59").map(|field| field.value.as_str())
    }

    /// Merchant city (tag 60).
    pub fn merchant_city(&self) -> Option<&str> {
        self.field("60").map(|field| field.value.as_str())
    }

    /// Transaction amount (tag 54), as written in the payload.
    pub fn amount(&self) -> Option<&str> {
        self.field("54").map(|field| field.value.as_str())
    }

    /// CRC carried by the payload.
    pub fn crc(&self) -> &str {
        &self.payload[self.payload.len() - CRC_LENGTH..]
    }

    fn split_crc(payload: &str) -> Result<(&str, &str), ValidationError> {
        let at = payload
            .len()
            .checked_sub(CRC_LENGTH)
            .filter(|at| payload.is_char_boundary(*at))
            .ok_or_else(|| ValidationError::invalid_format(Self::NAME, payload))?;
        Ok(payload.split_at(at))
    }
}

fn tlv(tag: &str, value: &str) -> Result<String, ValidationError> {
    let length = value.chars().count();
    if length > 99 {
        return Err(ValidationError::out_of_bounds(tag_field(tag), value));
    }
    Ok(format!("{tag}{length:02}{value}"))
}

fn tag_field(tag: &str) -> &'static str {
    match tag {
        "26" => "key",
        "54" => "amount",
        "59" => "merchant_name",
        "60" => "merchant_city",
        _ => "field",
    }
}

fn limited(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() > max {
        return Err(ValidationError::out_of_bounds(field, value));
    }
    Ok(())
}

impl Document for PixCopyPaste {
    const NAME: &'static str = "PixCopyPaste";
    type FakeOptions = PixCopyPasteFakeOptions;

    fn normalize(value: &str) -> Result<String, ValidationError> {
        let payload = value.trim();
        if payload.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        Ok(payload.to_owned())
    }

    fn parse(value: &str) -> Result<Self, ValidationError> {
        let payload = Self::normalize(value)?;
        let (body, crc) = Self::split_crc(&payload)?;
        if !Self::checksum(body)?.eq_ignore_ascii_case(crc) {
            return Err(ValidationError::invalid_checksum(Self::NAME, payload.as_str()));
        }

        let fields = parse_fields(&payload)?;
        match fields.last() {
            Some(last) if last.tag == CRC_TAG && last.length == CRC_LENGTH => {}
            _ => return Err(ValidationError::invalid_format(Self::NAME, payload.as_str())),
        }
        Ok(Self { payload, fields })
    }

    fn checksum(prefix: &str) -> Result<String, ValidationError> {
        if prefix.is_empty() {
            return Err(ValidationError::EmptyValue { field: Self::NAME });
        }
        Ok(crc16_hex(prefix))
    }

    fn fake_with<R: Rng + ?Sized>(
        rng: &mut R,
        options: &Self::FakeOptions,
    ) -> Result<Self, ValidationError> {
        let key = match &options.key {
            Some(key) => PixKey::parse(key)?.to_string(),
            None => PixKey::fake_with(rng, &Default::default())?.to_string(),
        };
        let name = options.merchant_name.as_deref().unwrap_or("FULANO DE TAL");
        let city = options.merchant_city.as_deref().unwrap_or("SAO PAULO");
        limited("merchant_name", name, 25)?;
        limited("merchant_city", city, 15)?;

        let account = format!("{}{}", tlv("00", "br.gov.bcb.pix")?, tlv("01", &key)?);
        // Payload format 01, merchant category 0000, currency 986 (BRL).
        let mut payload = format!("000201{}520400005303986", tlv("26", &account)?);
        if let Some(amount) = &options.amount {
            let valid = !amount.is_empty()
                && amount.bytes().all(|b| b.is_ascii_digit() || b == b'.')
                && amount.matches('.').count() <= 1;
            if !valid {
                return Err(ValidationError::out_of_bounds("amount", amount.as_str()));
            }
            payload.push_str(&tlv("54", amount)?);
        }
        payload.push_str("5802BR");
        payload.push_str(&tlv("59", name)?);
        payload.push_str(&tlv("60", city)?);
        payload.push_str(&tlv("62", &tlv("05", "***")?)?);
        payload.push_str("6304");
        let crc = Self::checksum(&payload)?;
        payload.push_str(&crc);
        Self::parse(&payload)
    }
}

impl AsRef<str> for PixCopyPaste {
    fn as_ref(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for PixCopyPaste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

impl FromStr for PixCopyPaste {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for PixCopyPaste {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PixCopyPaste {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PixCopyPaste> for String {
    fn from(value: PixCopyPaste) -> Self {
        value.payload
    }
}
