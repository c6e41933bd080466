use std::fmt::Write;

use crate::scanner::token::Token;

/// One line per token: `line:column`, the kind padded to ten columns, and the
/// lexeme in debug-quoted form so newlines and quotes stay visible.
pub fn to_listing(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for token in tokens {
        listing_line(&mut buf, token);
    }
    buf
}

pub fn to_json(tokens: &[Token]) -> String {
    serde_json::to_string_pretty(tokens).expect("tokens should be serializable")
}

/// Separator printed before each file when a whole directory is scanned.
pub fn file_header(name: &str) -> String {
    format!("{}\nFILE: {name}\n", "=".repeat(80))
}

fn listing_line(buf: &mut String, token: &Token) {
    let kind = token.kind.to_string();
    // Writing to a String cannot fail.
    let _ = writeln!(
        buf,
        "{}:{}\t{:<10}\t{:?}",
        token.line, token.column, kind, token.lexeme
    );
}
