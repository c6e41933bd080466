//! Structural properties of the token stream over arbitrary input.

use proptest::prelude::*;
use pylex::scanner::token::{Token, TokenKind};
use pylex::scanner::{ScanOptions, tokenize};

/// Input biased toward the characters the scanner treats specially.
fn source_strategy() -> impl Strategy<Value = String> {
    let specials = vec!["\n", " ", "\t", "#", "'", "\"", "\\", ".", "**=", "!", "def"];
    let pieces = prop_oneof![
        prop::sample::select(specials).prop_map(String::from),
        "[a-z_][a-z0-9_]{0,4}",
        "[0-9]{1,3}",
        "[+\\-*/%=<>()\\[\\]{},:;@$?]",
        any::<char>().prop_map(String::from),
    ];
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.concat())
}

fn options_strategy() -> impl Strategy<Value = ScanOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(emit_newlines, emit_comments)| ScanOptions {
        emit_newlines,
        emit_comments,
    })
}

/// Rebuild the input from the full-emission stream plus skipped whitespace.
fn reconstruct(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut offset = 0;
    for token in tokens.iter().filter(|t| !t.kind.is_synthetic()) {
        let gap = &source[offset..token.span.offset];
        assert!(
            gap.chars().all(|c| c == ' ' || c == '\t'),
            "unaccounted input {gap:?} before {token}"
        );
        out.push_str(gap);
        out.push_str(&token.lexeme);
        offset = token.span.end();
    }
    let tail = &source[offset..];
    assert!(tail.chars().all(|c| c == ' ' || c == '\t'));
    out.push_str(tail);
    out
}

proptest! {
    #[test]
    fn ends_with_exactly_one_end_of_input(source in source_strategy(), options in options_strategy()) {
        let tokens = tokenize(&source, options);
        let ends: Vec<&Token> = tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).collect();
        prop_assert_eq!(ends.len(), 1);
        let last = tokens.last().expect("non-empty stream");
        prop_assert_eq!(last.kind, TokenKind::EndOfInput);
        prop_assert_eq!(last.span.offset, source.len());
        let newlines = source.matches('\n').count();
        prop_assert_eq!(last.line, newlines + 1);
        let last_line = source.rsplit('\n').next().unwrap_or("");
        prop_assert_eq!(last.column, last_line.chars().count() + 1);
    }

    #[test]
    fn lexemes_cover_the_input(source in source_strategy()) {
        let tokens = tokenize(&source, ScanOptions::default());
        prop_assert_eq!(reconstruct(&source, &tokens), source);
    }

    #[test]
    fn positions_never_go_backwards(source in source_strategy(), options in options_strategy()) {
        let tokens = tokenize(&source, options);
        for pair in tokens.windows(2) {
            prop_assert!(
                (pair[0].line, pair[0].column) <= (pair[1].line, pair[1].column),
                "{} then {}", pair[0], pair[1]
            );
        }
    }

    #[test]
    fn suppression_only_removes_tokens(source in source_strategy(), options in options_strategy()) {
        let full = tokenize(&source, ScanOptions::default());
        let expected: Vec<Token> = full
            .into_iter()
            .filter(|t| match t.kind {
                TokenKind::Newline => options.emit_newlines,
                TokenKind::Comment => options.emit_comments,
                _ => true,
            })
            .collect();
        prop_assert_eq!(tokenize(&source, options), expected);
    }

    #[test]
    fn retokenizing_is_identical(source in source_strategy(), options in options_strategy()) {
        prop_assert_eq!(tokenize(&source, options), tokenize(&source, options));
    }

    #[test]
    fn errors_are_single_chars_or_open_strings(source in source_strategy()) {
        for token in tokenize(&source, ScanOptions::default()).iter().filter(|t| t.is_error()) {
            let first = token.lexeme.chars().next().expect("error lexeme is never empty");
            if first != '\'' && first != '"' {
                prop_assert_eq!(token.lexeme.chars().count(), 1);
            }
        }
    }
}
