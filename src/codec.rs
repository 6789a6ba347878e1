use crate::alphabet::{Alphabet, BASE};
use crate::errors::{AlphabetError, DecodeError, EncodeError};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// A base62 encoder/decoder over one alphabet.
///
/// Every conversion goes through a non-negative integer: bytes are read as a
/// big-endian magnitude, and the integer is written most significant digit
/// first. Encoding left-pads the output with the alphabet's zero symbol up to
/// [`padding`](Codec::padding) characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
    padding: usize,
}

impl Codec {
    /// Creates a codec with no minimum output length.
    pub fn new(alphabet: Alphabet) -> Self {
        Codec {
            alphabet,
            padding: 0,
        }
    }

    /// Validates `chars` as an alphabet and wraps it in a codec.
    pub fn from_chars(chars: &str) -> Result<Self, AlphabetError> {
        Ok(Self::new(chars.parse()?))
    }

    /// Returns a copy of this codec with a different minimum output length.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the minimum output length of subsequent encodes. 0 disables padding.
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes bytes read as a big-endian unsigned integer.
    ///
    /// Leading zero bytes carry no value and leave no trace in the output;
    /// pass the original length to [`decode_to_bytes`](Codec::decode_to_bytes)
    /// to restore them.
    pub fn encode_bytes(&self, data: &[u8]) -> String {
        self.encode_big_int(&BigUint::from_bytes_be(data))
    }

    /// Encodes a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NegativeInput`] for `n < 0`.
    pub fn encode_int64(&self, n: i64) -> Result<String, EncodeError> {
        let n = u64::try_from(n).map_err(|_| EncodeError::NegativeInput(n))?;
        Ok(self.encode_u64(n))
    }

    /// Encodes an unsigned 64-bit integer. Zero encodes to the empty string
    /// before padding.
    pub fn encode_u64(&self, mut n: u64) -> String {
        let base = BASE as u64;
        let mut digits = Vec::with_capacity(11);

        while n > 0 {
            digits.push((n % base) as usize);
            n /= base;
        }

        self.render(digits)
    }

    /// Encodes an arbitrary-precision integer. Zero encodes to the empty
    /// string before padding.
    pub fn encode_big_int(&self, n: &BigUint) -> String {
        let base = BigUint::from(BASE);
        let mut num = n.clone();

        // log2(62) is a bit under 6
        let mut digits = Vec::with_capacity((n.bits() / 5 + 1) as usize);

        while !num.is_zero() {
            let (quotient, remainder) = num.div_rem(&base);
            digits.push(remainder.to_usize().unwrap_or(0));
            num = quotient;
        }

        self.render(digits)
    }

    /// Decodes to an unsigned integer of any size.
    pub fn decode_to_big_int(&self, encoded: &str) -> Result<BigUint, DecodeError> {
        let base = BigUint::from(BASE);
        let mut num = BigUint::zero();

        for (position, c) in encoded.char_indices() {
            let digit = self.digit_at(c, position, encoded)?;
            num *= &base;
            num += digit;
        }

        Ok(num)
    }

    /// Decodes to a signed 64-bit integer with exact arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Overflow`] when the value exceeds `i64::MAX`.
    pub fn decode_to_int64(&self, encoded: &str) -> Result<i64, DecodeError> {
        let mut num: i64 = 0;

        for (position, c) in encoded.char_indices() {
            let digit = self.digit_at(c, position, encoded)? as i64;
            num = num
                .checked_mul(BASE as i64)
                .and_then(|n| n.checked_add(digit))
                .ok_or_else(|| DecodeError::overflow(encoded))?;
        }

        Ok(num)
    }

    /// Decodes to a signed 64-bit integer using floating-point powers of 62.
    ///
    /// Each digit is weighted by `62^k` computed as an `f64` and truncated
    /// (saturating) to `i64`, and the terms are summed with wrapping
    /// arithmetic. Results match [`decode_to_int64`](Codec::decode_to_int64)
    /// up to 11 symbols whose value fits in `i64`; past that the result is
    /// wrong without any error. Kept for compatibility with values produced
    /// by that arithmetic.
    pub fn decode_to_int64_approx(&self, encoded: &str) -> Result<i64, DecodeError> {
        let len = encoded.chars().count();
        let mut num: i64 = 0;

        for (i, (position, c)) in encoded.char_indices().enumerate() {
            let digit = self.digit_at(c, position, encoded)? as i64;
            let power = (BASE as f64).powi((len - i - 1) as i32) as i64;
            num = num.wrapping_add(digit.wrapping_mul(power));
        }

        Ok(num)
    }

    /// Decodes to the minimal big-endian bytes of the value (zero decodes to
    /// no bytes), left-padded with zero bytes up to `padding` when given.
    pub fn decode_to_bytes(
        &self,
        encoded: &str,
        padding: Option<usize>,
    ) -> Result<Vec<u8>, DecodeError> {
        let num = self.decode_to_big_int(encoded)?;
        let bytes = if num.is_zero() {
            Vec::new()
        } else {
            num.to_bytes_be()
        };

        match padding {
            Some(len) if bytes.len() < len => {
                let mut result = vec![0u8; len - bytes.len()];
                result.extend_from_slice(&bytes);
                Ok(result)
            }
            _ => Ok(bytes),
        }
    }

    fn digit_at(&self, c: char, position: usize, encoded: &str) -> Result<usize, DecodeError> {
        self.alphabet.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, encoded, &self.alphabet.as_string())
        })
    }

    /// Turns least-significant-first digits into padded text.
    fn render(&self, digits: Vec<usize>) -> String {
        let fill = self.padding.saturating_sub(digits.len());
        let mut result = String::with_capacity(fill + digits.len());

        for _ in 0..fill {
            result.push(self.alphabet.zero());
        }
        for &digit in digits.iter().rev() {
            // Digits are remainders mod 62, always in range
            if let Some(c) = self.alphabet.encode_digit(digit) {
                result.push(c);
            }
        }

        result
    }
}
