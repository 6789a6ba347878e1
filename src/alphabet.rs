use crate::errors::AlphabetError;
use std::collections::HashMap;
use std::str::FromStr;

/// Number of symbols in every base62 alphabet.
pub const BASE: usize = 62;

/// Digits, then uppercase, then lowercase.
pub const STANDARD_CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits, then lowercase, then uppercase.
pub const INVERTED_CHARS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered set of 62 distinct symbols.
///
/// The symbol at position *i* stands for digit value *i*. Construction
/// validates the length and uniqueness, so every `Alphabet` in existence is a
/// well-formed digit table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates a new alphabet from its symbols in digit order.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::InvalidLength`] unless there are exactly 62
    /// symbols, and [`AlphabetError::DuplicateCharacter`] when a symbol
    /// repeats.
    pub fn new(chars: Vec<char>) -> Result<Self, AlphabetError> {
        if chars.len() != BASE {
            return Err(AlphabetError::InvalidLength {
                actual: chars.len(),
            });
        }

        let mut char_to_index = HashMap::with_capacity(BASE);
        for (i, &c) in chars.iter().enumerate() {
            if let Some(first) = char_to_index.insert(c, i) {
                return Err(AlphabetError::DuplicateCharacter {
                    char: c,
                    first,
                    second: i,
                });
            }
        }

        Ok(Alphabet {
            chars,
            char_to_index,
        })
    }

    /// The built-in `0-9A-Za-z` alphabet.
    pub fn standard() -> Self {
        Self::builtin(STANDARD_CHARS)
    }

    /// The built-in `0-9a-zA-Z` alphabet.
    pub fn inverted() -> Self {
        Self::builtin(INVERTED_CHARS)
    }

    // Built-in tables are 62 distinct ASCII symbols, checked by the tests below.
    fn builtin(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let char_to_index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet {
            chars,
            char_to_index,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Symbol for a digit value, `None` when the value is 62 or more.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Digit value for a symbol, `None` when it is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    /// The digit-0 symbol, used for left padding.
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The alphabet as a string, in digit order.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid() {
        assert_eq!(Alphabet::from_str(STANDARD_CHARS), Ok(Alphabet::standard()));
        assert_eq!(Alphabet::from_str(INVERTED_CHARS), Ok(Alphabet::inverted()));
    }

    #[test]
    fn test_digit_mapping() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.encode_digit(0), Some('0'));
        assert_eq!(alphabet.encode_digit(10), Some('A'));
        assert_eq!(alphabet.encode_digit(61), Some('z'));
        assert_eq!(alphabet.encode_digit(62), None);
        assert_eq!(alphabet.decode_char('a'), Some(36));
        assert_eq!(alphabet.decode_char('-'), None);
        assert_eq!(alphabet.zero(), '0');

        let inverted = Alphabet::inverted();
        assert_eq!(inverted.encode_digit(10), Some('a'));
        assert_eq!(inverted.decode_char('A'), Some(36));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "0123456789".parse::<Alphabet>(),
            Err(AlphabetError::InvalidLength { actual: 10 })
        );
        assert_eq!(
            Alphabet::new(Vec::new()),
            Err(AlphabetError::InvalidLength { actual: 0 })
        );
        let too_long = format!("{}!", STANDARD_CHARS);
        assert_eq!(
            too_long.parse::<Alphabet>(),
            Err(AlphabetError::InvalidLength { actual: 63 })
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut chars: Vec<char> = STANDARD_CHARS.chars().collect();
        chars[61] = 'A';
        assert_eq!(
            Alphabet::new(chars),
            Err(AlphabetError::DuplicateCharacter {
                char: 'A',
                first: 10,
                second: 61
            })
        );
    }

    #[test]
    fn test_accepts_unicode_symbols() {
        // 62 consecutive Cyrillic letters
        let chars: Vec<char> = (0x0410..0x0410 + 62)
            .filter_map(char::from_u32)
            .collect();
        let alphabet = Alphabet::new(chars).unwrap();
        assert_eq!(alphabet.zero(), 'А');
        assert_eq!(alphabet.decode_char('Б'), Some(1));
    }
}
