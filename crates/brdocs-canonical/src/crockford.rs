use crate::validation::ValidationError;

/// Crockford base32 symbols in value order. `I`, `L`, `O` and `U` are absent.
pub const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Uppercases, drops `-`, `.` and whitespace, and folds look-alike letters.
///
/// `I` and `L` become `1`, `O` becomes `0`. `U` is forbidden and yields
/// [`ValidationError::InvalidFormat`].
pub fn normalize(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c.to_ascii_uppercase() {
            '-' | '.' => {}
            c if c.is_whitespace() => {}
            'I' | 'L' => out.push('1'),
            'O' => out.push('0'),
            'U' => return Err(ValidationError::invalid_format(field, value)),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Value of a symbol, after folding look-alikes. `None` outside the alphabet.
pub fn char_to_int(c: char) -> Option<u32> {
    let folded = match c.to_ascii_uppercase() {
        'I' | 'L' => '1',
        'O' => '0',
        other => other,
    };
    ALPHABET.find(folded).map(|index| index as u32)
}

/// Symbol for a value in `0..32`.
pub fn int_to_char(value: u32) -> Option<char> {
    ALPHABET.chars().nth(value as usize)
}

/// True when every character is a Crockford symbol (no folding applied).
pub fn is_canonical(value: &str) -> bool {
    value.chars().all(|c| ALPHABET.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ambiguous_letters() {
        assert_eq!(normalize("a3n8-z4f.y", "cib").unwrap(), "A3N8Z4FY");
        assert_eq!(normalize("iLo", "cib").unwrap(), "110");
    }

    #[test]
    fn rejects_u() {
        assert!(normalize("AU00000", "cib").is_err());
    }

    #[test]
    fn char_round_trip() {
        for (index, c) in ALPHABET.chars().enumerate() {
            assert_eq!(char_to_int(c), Some(index as u32));
            assert_eq!(int_to_char(index as u32), Some(c));
        }
        assert_eq!(char_to_int('U'), None);
        assert_eq!(int_to_char(32), None);
    }
}
