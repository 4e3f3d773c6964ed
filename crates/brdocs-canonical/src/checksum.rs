//! Weighted sums and the modulo reductions behind Brazilian check digits.
//!
//! Functions here never validate the alphabet of their input; callers check
//! shape first and pass only digits (or `[0-9A-Z]` where noted).

use crate::crockford;
use crate::validation::ValidationError;

/// Numeric value of an ASCII character for weighting: its code minus 48.
///
/// Digits keep their value and uppercase letters map to 17..=42.
pub fn char_value(c: u8) -> u32 {
    u32::from(c.saturating_sub(b'0'))
}

/// `Σ value(c_i) * w_i` over the first `weights.len()` characters.
pub fn weighted_sum(value: &str, weights: &[u32]) -> u32 {
    value
        .bytes()
        .zip(weights)
        .map(|(c, w)| char_value(c) * w)
        .sum()
}

/// Parses a string of single-digit weights such as `"543298765432"`.
pub fn weights_from_digits(weights: &str) -> Vec<u32> {
    weights.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Standard modulo 11: remainders 0 and 1 give 0, otherwise `11 - rest`.
pub fn mod11(sum: u32) -> u32 {
    match sum % 11 {
        rest if rest < 2 => 0,
        rest => 11 - rest,
    }
}

/// Modulo 11 where listed remainders map to fixed digits and the rest to `11 - rest`.
pub fn mod11_with_exceptions(sum: u32, exceptions: &[(u32, u32)]) -> u32 {
    let rest = sum % 11;
    exceptions
        .iter()
        .find(|(from, _)| *from == rest)
        .map_or(11 - rest, |(_, to)| *to)
}

/// Modulo 11 that keeps the remainder itself, mapping 10 to `ten`.
pub fn mod11_remainder(sum: u32, ten: u32) -> u32 {
    match sum % 11 {
        10 => ten,
        rest => rest,
    }
}

/// Crockford base32 symbol at `sum % 31`.
pub fn mod31_crockford(sum: u32) -> char {
    let alphabet = crockford::ALPHABET.as_bytes();
    char::from(alphabet[(sum % 31) as usize])
}

/// Remainder of a decimal digit string by 97, folded digit by digit.
///
/// Exact for any length; non-digit characters are skipped.
pub fn mod97(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |rest, d| (rest * 10 + d) % 97)
}

/// ISO 7064 mod 97-10 remainder computed in three stages, as the CNJ numbering
/// rule describes it: `number`, then `year_court`, then `origin` followed by `00`.
pub fn mod97_factored(
    number: &str,
    year_court: &str,
    origin: &str,
) -> Result<u32, ValidationError> {
    let part1 = parse_u64(number)? % 97;
    let part2 = parse_u64(&format!("{part1}{year_court}"))? % 97;
    let part3 = parse_u64(&format!("{part2}{origin}00"))? % 97;
    Ok(part3 as u32)
}

/// Two check digits from a mod 97 remainder: `98 - rest`, zero-padded.
pub fn mod97_check_digits(rest: u32) -> String {
    format!("{:02}", 98 - rest % 97)
}

/// FEBRABAN modulo 10 used by the fields of a boleto typed line.
///
/// Weights alternate 2 and 1 from the rightmost digit; two-digit products
/// contribute the sum of their digits.
pub fn mod10(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .zip([2, 1].into_iter().cycle())
        .map(|(d, w)| {
            let product = d * w;
            product / 10 + product % 10
        })
        .sum();
    (10 - sum % 10) % 10
}

/// FEBRABAN modulo 11 for the general boleto check digit.
///
/// Weights cycle 2..=9 from the rightmost digit; results 0, 10 and 11 become 1.
pub fn boleto_mod11(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .zip((2..=9).cycle())
        .map(|(d, w)| d * w)
        .sum();
    match 11 - sum % 11 {
        0 | 10 | 11 => 1,
        dv => dv,
    }
}

fn parse_u64(digits: &str) -> Result<u64, ValidationError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format("mod97", digits));
    }
    digits
        .parse()
        .map_err(|_| ValidationError::invalid_format("mod97", digits))
}
