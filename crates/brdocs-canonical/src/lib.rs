//! Shared primitives for Brazilian document validation.
//!
//! Every validator in `brdocs-core` is assembled from the pieces in this crate:
//! - formatting removal, length fitting and masks (`normalize`)
//! - weighted sums and the modulo reductions used by check digits (`checksum`)
//! - the Crockford base32 alphabet (`crockford`) and CRC-16 (`crc`)
//! - random draws for fake document generators (`random`)
//!
//! Nothing here holds state; every function is pure apart from the
//! caller-supplied random source.
//!
#![deny(missing_docs)]

/// Weighted sums and modulo reductions.
pub mod checksum;
/// CRC-16/CCITT-FALSE as used by Pix payloads.
pub mod crc;
/// Crockford base32 alphabet helpers.
pub mod crockford;
/// Formatting removal, length fitting and mask helpers.
pub mod normalize;
/// Random digit and letter draws for generators.
pub mod random;
/// Validation error taxonomy.
pub mod validation;

pub use normalize::FitPolicy;
pub use validation::{ErrorKind, ValidationError};
