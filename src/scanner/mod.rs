pub mod char_class;
pub mod cursor;
pub mod lexer;
pub mod token;

use crate::lexicon::Lexicon;
pub use lexer::Scanner;
use token::Token;

/// Which optional token kinds end up in the output. Suppressing a kind
/// never changes the kinds or positions of the remaining tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub emit_newlines: bool,
    pub emit_comments: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            emit_newlines: true,
            emit_comments: true,
        }
    }
}

/// Scan source code with the built-in Python lexicon.
pub fn tokenize(source: &str, options: ScanOptions) -> Vec<Token> {
    tokenize_with(source, Lexicon::python(), options)
}

/// Scan source code with a caller-supplied lexicon.
pub fn tokenize_with(source: &str, lexicon: &Lexicon, options: ScanOptions) -> Vec<Token> {
    Scanner::new(source, lexicon).tokenize(options)
}
