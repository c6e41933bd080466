use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::char_class::classify;
use crate::scanner::token::Token;

// ============= Scan diagnostics (with miette) =============

/// Diagnostic view of an ERROR token. The scanner itself never fails; these
/// are built after the fact for tools that want to report malformed input.
#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("unterminated string literal")]
    #[diagnostic(code(pylex::unterminated_string), help("add the closing quote"))]
    UnterminatedString {
        #[label("string starts here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("newline inside string literal")]
    #[diagnostic(
        code(pylex::newline_in_string),
        help("close the string before the end of the line or escape the newline")
    )]
    NewlineInString {
        #[label("string broken by a newline")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("unexpected character {ch:?}")]
    #[diagnostic(code(pylex::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl ScanError {
    /// Classify an ERROR token; `None` for any other kind.
    pub fn from_token(token: &Token) -> Option<Self> {
        if !token.is_error() {
            return None;
        }
        let span: SourceSpan = token.span.into();
        let src = miette::NamedSource::new("input", String::new());
        let first = token.lexeme.chars().next();
        if classify(first).is_quote() {
            if ends_with_raw_newline(&token.lexeme) {
                Some(Self::NewlineInString { span, src })
            } else {
                Some(Self::UnterminatedString { span, src })
            }
        } else {
            Some(Self::UnexpectedCharacter {
                ch: first.unwrap_or('\0'),
                span,
                src,
            })
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let src = miette::NamedSource::new(name.into(), source.into());
        match self {
            Self::UnterminatedString { span, .. } => Self::UnterminatedString { span, src },
            Self::NewlineInString { span, .. } => Self::NewlineInString { span, src },
            Self::UnexpectedCharacter { ch, span, .. } => {
                Self::UnexpectedCharacter { ch, span, src }
            }
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UnterminatedString { span, .. }
            | Self::NewlineInString { span, .. }
            | Self::UnexpectedCharacter { span, .. } => *span,
        }
    }
}

/// Collect a diagnostic for every ERROR token in the stream.
pub fn scan_errors(tokens: &[Token]) -> Vec<ScanError> {
    tokens.iter().filter_map(ScanError::from_token).collect()
}

// ============= Lexicon loading errors =============

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("read lexicon file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("operator lexemes must not be empty")]
    EmptyOperator,

    #[error("delimiter {0:?} must be exactly one character")]
    InvalidDelimiter(String),
}

/// A string ERROR ends in a raw newline unless the run of backslashes right
/// before that newline has odd length.
fn ends_with_raw_newline(lexeme: &str) -> bool {
    let Some(body) = lexeme.strip_suffix('\n') else {
        return false;
    };
    let backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}

// ============= Tests =============
