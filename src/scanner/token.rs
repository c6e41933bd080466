use std::fmt;

use serde::Serialize;

/// The closed set of token categories the scanner emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    String,
    Operator,
    Delimiter,
    Comment,
    Newline,
    EndOfInput,
    Error,
}

impl TokenKind {
    /// Tokens that do not correspond to consumed input.
    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// Byte range of a lexeme within the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// A classified lexeme. `line` and `column` are 1-based and point at the
/// first character of `lexeme`; `column` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        line: usize,
        column: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            span,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @{}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}
