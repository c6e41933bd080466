/// Reduced input alphabet the scanner dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CharClass {
    Whitespace,
    Newline,
    Letter,
    Digit,
    Dot,
    Hash,
    SingleQuote,
    DoubleQuote,
    Backslash,
    Other,
}

/// Classify one character. `None` stands for end of input.
pub fn classify(ch: Option<char>) -> CharClass {
    match ch {
        None => CharClass::Other,
        Some(' ' | '\t') => CharClass::Whitespace,
        Some('\n') => CharClass::Newline,
        Some(c) if c == '_' || c.is_ascii_alphabetic() => CharClass::Letter,
        Some(c) if c.is_ascii_digit() => CharClass::Digit,
        Some('.') => CharClass::Dot,
        Some('#') => CharClass::Hash,
        Some('\'') => CharClass::SingleQuote,
        Some('"') => CharClass::DoubleQuote,
        Some('\\') => CharClass::Backslash,
        Some(_) => CharClass::Other,
    }
}

impl CharClass {
    pub fn is_quote(self) -> bool {
        matches!(self, Self::SingleQuote | Self::DoubleQuote)
    }

    pub fn continues_identifier(self) -> bool {
        matches!(self, Self::Letter | Self::Digit)
    }
}
