//! Random draws for fake document generators.
//!
//! Every helper takes the random source explicitly so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `length` random decimal digits; leading zeros are kept.
pub fn digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// `length` random uppercase ASCII letters.
pub fn letters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
        .collect()
}

/// Uniform integer in `min..=max`.
pub fn between<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> u64 {
    rng.gen_range(min..=max)
}

/// Random element of a non-empty slice.
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// `length` random characters drawn from `alphabet`.
pub fn from_alphabet<R: Rng + ?Sized>(rng: &mut R, alphabet: &str, length: usize) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    (0..length)
        .filter_map(|_| symbols.choose(rng).copied())
        .collect()
}
