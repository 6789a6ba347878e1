use std::fmt;

/// Errors that can occur while building an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not contain exactly 62 symbols
    InvalidLength { actual: usize },
    /// A symbol appears more than once
    DuplicateCharacter {
        char: char,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            AlphabetError::InvalidLength { actual } => {
                write_header(f, use_color, "invalid alphabet length")?;
                writeln!(f)?;
                writeln!(f, "  alphabet has {} characters, expected 62", actual)?;
                writeln!(f)?;
                write_hint(f, use_color, "a base62 alphabet needs 62 distinct symbols")
            }
            AlphabetError::DuplicateCharacter {
                char: c,
                first,
                second,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("duplicate character '{}' in alphabet", c),
                )?;
                writeln!(f)?;
                writeln!(f, "  first at position {}, again at position {}", first, second)?;
                writeln!(f)?;
                write_hint(f, use_color, "every digit value needs its own symbol")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The decoded value does not fit in a signed 64-bit integer
    Overflow { input: String },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: truncate_input(input),
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an Overflow error for the given input
    pub fn overflow(input: &str) -> Self {
        DecodeError::Overflow {
            input: truncate_input(input),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character '{}' at position {}", c, position),
                )?;
                writeln!(f)?;

                // Position is a byte offset; the caret needs a char column
                let char_position = input
                    .char_indices()
                    .take_while(|(i, _)| i < position)
                    .count();
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(char_position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                write_hint(f, use_color, &format!("valid characters: {}", valid_chars))
            }
            DecodeError::Overflow { input } => {
                write_header(f, use_color, "value does not fit in a 64-bit integer")?;
                writeln!(f)?;
                writeln!(f, "  {}", input)?;
                writeln!(f)?;
                write_hint(f, use_color, "decode as an arbitrary-precision integer instead")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Only non-negative integers have a base62 form
    NegativeInput(i64),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            EncodeError::NegativeInput(n) => {
                write_header(f, use_color, &format!("cannot encode negative integer {}", n))?;
                writeln!(f)?;
                writeln!(f)?;
                write_hint(f, use_color, "base62 only represents non-negative values")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error when an alphabet name is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color, &format!("alphabet '{}' not found", self.name))?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base62 list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `base62 list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        writeln!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

fn truncate_input(input: &str) -> String {
    match input.char_indices().nth(60) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The Display impls consult the environment; these tests only check
    // substrings that appear with or without color.

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("standard", "standard"), 0);
        assert_eq!(levenshtein_distance("standrd", "standard"), 1);
        assert_eq!(levenshtein_distance("inverted", "invert"), 2);
        assert_eq!(levenshtein_distance("", "inverted"), 8);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec!["standard".to_string(), "inverted".to_string()];

        assert_eq!(
            find_closest_alphabet("standrad", &names),
            Some("standard".to_string())
        );
        assert_eq!(
            find_closest_alphabet("inverte", &names),
            Some("inverted".to_string())
        );
        assert_eq!(find_closest_alphabet("base64", &names), None);
        assert_eq!(find_closest_alphabet("standard", &[]), None);
    }

    #[test]
    fn test_invalid_character_display() {
        let err = DecodeError::invalid_character('-', 4, "UiP9-V6Y", "0-9A-Za-z");
        let display = format!("{}", err);

        assert!(display.contains("invalid character '-' at position 4"));
        assert!(display.contains("UiP9-V6Y"));
        assert!(display.contains('^'));
        assert!(display.contains("valid characters: 0-9A-Za-z"));
    }

    #[test]
    fn test_invalid_character_truncates_long_input() {
        let input = "a".repeat(100);
        match DecodeError::invalid_character('!', 99, &input, "") {
            DecodeError::InvalidCharacter { input, .. } => {
                assert_eq!(input.len(), 63);
                assert!(input.ends_with("..."));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_alphabet_error_display() {
        let display = format!("{}", AlphabetError::InvalidLength { actual: 10 });
        assert!(display.contains("10 characters, expected 62"));

        let display = format!(
            "{}",
            AlphabetError::DuplicateCharacter {
                char: 'a',
                first: 10,
                second: 36
            }
        );
        assert!(display.contains("duplicate character 'a'"));
        assert!(display.contains("position 10, again at position 36"));
    }

    #[test]
    fn test_negative_input_display() {
        let display = format!("{}", EncodeError::NegativeInput(-5));
        assert!(display.contains("cannot encode negative integer -5"));
    }

    #[test]
    fn test_alphabet_not_found_display() {
        let err = AlphabetNotFoundError::new("standrd", Some("standard".to_string()));
        let display = format!("{}", err);

        assert!(display.contains("alphabet 'standrd' not found"));
        assert!(display.contains("did you mean 'standard'?"));
        assert!(display.contains("base62 list"));
    }
}
