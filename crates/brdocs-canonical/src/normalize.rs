use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Separators allowed inside a mask pattern, besides the `0` placeholder.
pub const MASK_SEPARATORS: [char; 6] = ['.', '-', '/', '(', ')', ' '];

fn is_formatting(c: char) -> bool {
    matches!(c, '.' | '-' | '/' | '(' | ')') || c.is_whitespace()
}

/// Keeps only ASCII digits.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Removes punctuation used for display (`. - / ( )`) and whitespace.
///
/// Any other character survives so that alphabet checks downstream still see it.
pub fn strip_formatting(value: &str) -> String {
    value.chars().filter(|c| !is_formatting(*c)).collect()
}

/// Length policy applied by [`fit_to_length`].
///
/// The default applies no rule at all. Hosts can deserialize a policy from their
/// own configuration; missing keys fall back to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitPolicy {
    /// Zero-pad on the left up to the target length.
    pub zero_pad_left: bool,
    /// Drop characters past the target length.
    pub truncate_right: bool,
    /// Fail with [`ValidationError::EmptyValue`] on empty input.
    pub reject_if_empty: bool,
    /// Fail with [`ValidationError::TooLong`] on longer input.
    pub reject_if_longer: bool,
    /// Fail with [`ValidationError::TooShort`] on shorter input.
    pub reject_if_shorter: bool,
    /// Fail with [`ValidationError::RepeatedSequence`] when all characters match.
    pub reject_if_repeated_sequence: bool,
}

impl FitPolicy {
    /// Rejects empty, longer and shorter input; never pads or truncates.
    pub const fn strict() -> Self {
        Self {
            zero_pad_left: false,
            truncate_right: false,
            reject_if_empty: true,
            reject_if_longer: true,
            reject_if_shorter: true,
            reject_if_repeated_sequence: false,
        }
    }

    /// Pads and truncates to fit; only empty input is rejected.
    pub const fn lenient() -> Self {
        Self {
            zero_pad_left: true,
            truncate_right: true,
            reject_if_empty: true,
            reject_if_longer: false,
            reject_if_shorter: false,
            reject_if_repeated_sequence: false,
        }
    }

    /// Same policy, additionally rejecting repeated sequences.
    pub const fn rejecting_repeated(mut self) -> Self {
        self.reject_if_repeated_sequence = true;
        self
    }
}

/// Strips formatting and applies `policy` against `length` characters.
///
/// Rules run in a fixed order: empty, longer, shorter, repeated, then padding and
/// truncation. With no flag set the stripped value is returned as is.
pub fn fit_to_length(
    value: &str,
    length: usize,
    policy: &FitPolicy,
    field: &'static str,
) -> Result<String, ValidationError> {
    let stripped = strip_formatting(value);
    let count = stripped.chars().count();

    if policy.reject_if_empty && stripped.is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    if policy.reject_if_longer && count > length {
        return Err(ValidationError::TooLong {
            field,
            value: stripped,
            expected: length,
        });
    }
    if policy.reject_if_shorter && count < length {
        return Err(ValidationError::TooShort {
            field,
            value: stripped,
            expected: length,
        });
    }
    if policy.reject_if_repeated_sequence && is_repeated_sequence(&stripped) {
        return Err(ValidationError::RepeatedSequence {
            field,
            value: stripped,
        });
    }

    let mut fitted = stripped;
    if policy.zero_pad_left && count < length {
        fitted = format!("{}{}", "0".repeat(length - count), fitted);
    }
    if policy.truncate_right && count > length {
        fitted = fitted.chars().take(length).collect();
    }
    Ok(fitted)
}

/// Renders `value` through a mask made of `0` placeholders and separators.
///
/// The value is zero-padded on the left or truncated on the right to the number
/// of placeholders. A mask with characters other than `0` and
/// [`MASK_SEPARATORS`] is rejected.
pub fn apply_mask(value: &str, mask: &str) -> Result<String, ValidationError> {
    if mask
        .chars()
        .any(|c| c != '0' && !MASK_SEPARATORS.contains(&c))
    {
        return Err(ValidationError::invalid_format("mask", mask));
    }

    let slots = mask.chars().filter(|c| *c == '0').count();
    let fitted = fit_to_length(value, slots, &FitPolicy::lenient(), "mask")
        .unwrap_or_else(|_| "0".repeat(slots));
    let mut chars = fitted.chars();

    Ok(mask
        .chars()
        .map(|c| match c {
            '0' => chars.next().unwrap_or('0'),
            separator => separator,
        })
        .collect())
}

/// Removes mask separators, the inverse of [`apply_mask`] for well-shaped values.
pub fn remove_mask(value: &str) -> String {
    value
        .chars()
        .filter(|c| !MASK_SEPARATORS.contains(c))
        .collect()
}

/// Inserts `fragment` before the character at `position` (clamped to the end).
pub fn insert_at(value: &str, fragment: &str, position: usize) -> String {
    let split = byte_offset(value, position);
    let mut out = String::with_capacity(value.len() + fragment.len());
    out.push_str(&value[..split]);
    out.push_str(fragment);
    out.push_str(&value[split..]);
    out
}

/// Removes the characters in `start..end` (clamped to the end).
pub fn remove_range(value: &str, start: usize, end: usize) -> String {
    let from = byte_offset(value, start);
    let to = byte_offset(value, end.max(start));
    let mut out = String::with_capacity(value.len());
    out.push_str(&value[..from]);
    out.push_str(&value[to..]);
    out
}

/// True when every character equals the first one. The empty string counts as repeated.
pub fn is_repeated_sequence(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

fn byte_offset(value: &str, position: usize) -> usize {
    value
        .char_indices()
        .nth(position)
        .map_or(value.len(), |(offset, _)| offset)
}
