use tracing::{debug, trace};

use crate::lexicon::Lexicon;
use crate::scanner::ScanOptions;
use crate::scanner::char_class::{CharClass, classify};
use crate::scanner::cursor::Cursor;
use crate::scanner::token::{Span, Token, TokenKind};

/// Hand-coded scanner: one dispatch on the current character class per
/// token, with a sub-scan for each multi-character production.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    lexicon: &'a Lexicon,
}

/// Where the token being scanned began.
#[derive(Debug, Clone, Copy)]
struct Start {
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, lexicon: &'a Lexicon) -> Self {
        Self {
            cursor: Cursor::new(source),
            lexicon,
        }
    }

    /// Scan the whole input. Always ends with exactly one END_OF_INPUT token.
    pub fn tokenize(mut self, options: ScanOptions) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.cursor.peek() {
            let start = self.mark();
            let token = match classify(Some(ch)) {
                CharClass::Newline => {
                    self.cursor.advance();
                    options
                        .emit_newlines
                        .then(|| self.make(TokenKind::Newline, "\n", start))
                }
                CharClass::Whitespace => {
                    self.cursor.advance();
                    None
                }
                CharClass::Hash => {
                    let comment = self.comment(start);
                    options.emit_comments.then_some(comment)
                }
                CharClass::SingleQuote | CharClass::DoubleQuote => Some(self.string(start)),
                CharClass::Letter => Some(self.identifier(start)),
                CharClass::Digit => Some(self.number(start)),
                CharClass::Dot if classify(self.cursor.peek_nth(1)) == CharClass::Digit => {
                    Some(self.number(start))
                }
                _ => Some(self.operator_delimiter_or_error(start)),
            };

            if let Some(token) = token {
                if token.is_error() {
                    trace!(line = token.line, column = token.column, lexeme = ?token.lexeme, "malformed input");
                }
                tokens.push(token);
            }
        }

        let end = self.mark();
        tokens.push(self.make(TokenKind::EndOfInput, "", end));

        debug!(
            tokens = tokens.len(),
            errors = tokens.iter().filter(|t| t.is_error()).count(),
            "tokenized input"
        );
        tokens
    }

    fn mark(&self) -> Start {
        Start {
            offset: self.cursor.index(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    fn make(&self, kind: TokenKind, lexeme: impl Into<String>, start: Start) -> Token {
        let span = Span::new(start.offset, self.cursor.index() - start.offset);
        Token::new(kind, lexeme, start.line, start.column, span)
    }

    /// `#` up to, not including, the next newline.
    fn comment(&mut self, start: Start) -> Token {
        let mut lexeme = String::new();
        while let Some(ch) = self.cursor.peek() {
            if classify(Some(ch)) == CharClass::Newline {
                break;
            }
            lexeme.push(ch);
            self.cursor.advance();
        }
        self.make(TokenKind::Comment, lexeme, start)
    }

    /// Quoted literal. A backslash escapes exactly the next character; end of
    /// input or a raw newline before the closing quote yields ERROR.
    fn string(&mut self, start: Start) -> Token {
        let Some(quote) = self.cursor.advance() else {
            return self.make(TokenKind::Error, "", start);
        };
        let mut lexeme = String::from(quote);
        let mut escaped = false;

        loop {
            let Some(ch) = self.cursor.advance() else {
                return self.make(TokenKind::Error, lexeme, start);
            };
            lexeme.push(ch);

            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                c if c == quote => return self.make(TokenKind::String, lexeme, start),
                '\n' => return self.make(TokenKind::Error, lexeme, start),
                _ => {}
            }
        }
    }

    fn identifier(&mut self, start: Start) -> Token {
        let mut lexeme = String::new();
        while let Some(ch) = self.cursor.peek() {
            if !classify(Some(ch)).continues_identifier() {
                break;
            }
            lexeme.push(ch);
            self.cursor.advance();
        }
        let kind = if self.lexicon.is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.make(kind, lexeme, start)
    }

    /// Digits with at most one `.`; a leading `.` counts as the point.
    fn number(&mut self, start: Start) -> Token {
        let mut lexeme = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.cursor.peek() {
            match classify(Some(ch)) {
                CharClass::Digit => {}
                CharClass::Dot if !seen_dot => seen_dot = true,
                _ => break,
            }
            lexeme.push(ch);
            self.cursor.advance();
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.make(kind, lexeme, start)
    }

    /// Longest operator, else a delimiter, else a one-character ERROR.
    fn operator_delimiter_or_error(&mut self, start: Start) -> Token {
        if let Some(op) = self.lexicon.longest_operator(self.cursor.rest()) {
            for _ in op.chars() {
                self.cursor.advance();
            }
            return self.make(TokenKind::Operator, op, start);
        }

        let Some(ch) = self.cursor.advance() else {
            return self.make(TokenKind::Error, "", start);
        };
        let kind = if self.lexicon.is_delimiter(ch) {
            TokenKind::Delimiter
        } else {
            TokenKind::Error
        };
        self.make(kind, ch, start)
    }
}
