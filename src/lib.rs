//! Base62 encoding for bytes and non-negative integers.
//!
//! Two ready-made codecs cover the common alphabets:
//!
//! ```
//! use base62::{INVERTED, STANDARD};
//!
//! assert_eq!(STANDARD.encode_bytes(b"base62"), "UiP9AV6Y");
//! assert_eq!(INVERTED.decode_to_bytes("uIp9av6y", None).unwrap(), b"base62");
//! ```
//!
//! The shared codecs are immutable. Clone one to configure padding:
//!
//! ```
//! let mut codec = base62::STANDARD.clone();
//! codec.set_padding(6);
//! assert_eq!(codec.encode_u64(61), "00000z");
//! ```

mod alphabet;
mod codec;
mod config;
mod errors;

use std::sync::LazyLock;

pub use alphabet::{Alphabet, BASE, INVERTED_CHARS, STANDARD_CHARS};
pub use codec::Codec;
pub use config::{AlphabetConfig, AlphabetRegistry};
pub use errors::{
    AlphabetError, AlphabetNotFoundError, DecodeError, EncodeError, find_closest_alphabet,
};
pub use num_bigint::BigUint;

/// Codec over `0-9A-Za-z`.
pub static STANDARD: LazyLock<Codec> = LazyLock::new(|| Codec::new(Alphabet::standard()));

/// Codec over `0-9a-zA-Z`.
pub static INVERTED: LazyLock<Codec> = LazyLock::new(|| Codec::new(Alphabet::inverted()));

/// Encodes bytes with the [`STANDARD`] alphabet.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode_bytes(data)
}

/// Decodes a [`STANDARD`] string back to its minimal big-endian bytes.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode_to_bytes(encoded, None)
}
