use rstest::rstest;
use pylex::lexicon::Lexicon;
use pylex::render;
use pylex::scanner::token::{Token, TokenKind};
use pylex::scanner::{ScanOptions, tokenize, tokenize_with};

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect()
}

fn quiet(emit_newlines: bool, emit_comments: bool) -> ScanOptions {
    ScanOptions {
        emit_newlines,
        emit_comments,
    }
}

#[rstest]
#[case(
    include_str!("../fixtures/samples/basics.py"),
    include_str!("../fixtures/samples/basics.expected")
)]
#[case(
    include_str!("../fixtures/samples/strings.txt"),
    include_str!("../fixtures/samples/strings.expected")
)]
#[case(
    include_str!("../fixtures/malformed.py"),
    include_str!("../fixtures/malformed.expected")
)]
fn fixture_listing(#[case] source: &str, #[case] expected: &str) {
    let tokens = tokenize(source, ScanOptions::default());
    assert_eq!(render::to_listing(&tokens), expected);
}

#[test]
fn fixture_without_comments_drops_only_comments() {
    let source = include_str!("../fixtures/samples/basics.py");
    let full = tokenize(source, ScanOptions::default());
    let without = tokenize(source, quiet(true, false));
    let filtered: Vec<Token> = full
        .into_iter()
        .filter(|t| t.kind != TokenKind::Comment)
        .collect();
    assert_eq!(without, filtered);
}

#[test]
fn fixture_without_newlines_drops_only_newlines() {
    let source = include_str!("../fixtures/samples/strings.txt");
    let full = tokenize(source, ScanOptions::default());
    let without = tokenize(source, quiet(false, true));
    let filtered: Vec<Token> = full
        .into_iter()
        .filter(|t| t.kind != TokenKind::Newline)
        .collect();
    assert_eq!(without, filtered);
}

#[test]
fn custom_lexicon_from_json() {
    let lexicon = Lexicon::from_json(include_str!("../fixtures/lexicon.json"))
        .expect("fixture lexicon should load");
    let source = include_str!("../fixtures/custom.lang");
    let tokens = tokenize_with(source, &lexicon, quiet(false, true));
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Keyword, "fn"),
            (TokenKind::Identifier, "add"),
            (TokenKind::Delimiter, "("),
            (TokenKind::Identifier, "a"),
            (TokenKind::Delimiter, ","),
            (TokenKind::Identifier, "b"),
            (TokenKind::Delimiter, ")"),
            (TokenKind::Operator, "->"),
            (TokenKind::Identifier, "a"),
            (TokenKind::Operator, "+"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Delimiter, ";"),
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "def"),
            (TokenKind::Operator, "="),
            (TokenKind::Identifier, "add"),
            (TokenKind::Delimiter, "("),
            (TokenKind::Integer, "1"),
            (TokenKind::Delimiter, ","),
            (TokenKind::Integer, "2"),
            (TokenKind::Delimiter, ")"),
            (TokenKind::Delimiter, ";"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn end_of_input_sits_at_final_cursor_position() {
    let tokens = tokenize("ab\ncd  ", ScanOptions::default());
    let last = tokens.last().expect("end of input token");
    assert_eq!(last.kind, TokenKind::EndOfInput);
    assert_eq!((last.line, last.column), (2, 5));
    assert_eq!(last.span.offset, 7);
    assert_eq!(last.span.len, 0);
}

#[test]
fn trailing_newline_moves_end_to_next_line() {
    let tokens = tokenize("x\n", ScanOptions::default());
    let last = tokens.last().expect("end of input token");
    assert_eq!((last.line, last.column), (2, 1));
}

#[test]
fn carriage_return_is_reported_not_skipped() {
    let tokens = tokenize("a\r\nb", ScanOptions::default());
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::Error, "\r"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "b"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn spans_slice_back_to_lexemes() {
    let source = "total = 'x' # tail\n.25 ** 2";
    let tokens = tokenize(source, ScanOptions::default());
    for token in &tokens {
        assert_eq!(
            &source[token.span.offset..token.span.end()],
            token.lexeme,
            "span mismatch for {token}"
        );
    }
}
