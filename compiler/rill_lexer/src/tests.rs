//! Lexer tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{tokenize, LexError};
use rill_ast::{Span, StringInterner, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut interner = StringInterner::new();
    let (tokens, errors) = tokenize(source, &mut interner);
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_and_identifiers() {
    let mut interner = StringInterner::new();
    let (tokens, errors) = tokenize("while whilex if iffy", &mut interner);
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 5); // 4 + Eof

    assert_eq!(tokens[0].kind, TokenKind::While);
    let TokenKind::Ident(whilex) = tokens[1].kind else {
        panic!("expected identifier, got {:?}", tokens[1]);
    };
    assert_eq!(interner.resolve(whilex), "whilex");
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert!(matches!(tokens[3].kind, TokenKind::Ident(_)));
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn compound_operators_win_over_single() {
    assert_eq!(
        kinds("== = <= < != ! && & || |"),
        vec![
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::NotEq,
            TokenKind::Bang,
            TokenKind::AmpAmp,
            TokenKind::Amp,
            TokenKind::PipePipe,
            TokenKind::Pipe,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn statement_shape() {
    assert_eq!(
        kinds("x = ? + 42;"),
        vec![
            TokenKind::Ident(StringInterner::new().intern("x")),
            TokenKind::Eq,
            TokenKind::Question,
            TokenKind::Plus,
            TokenKind::Int(42),
            TokenKind::Semi,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(
        kinds("print 1; // trailing comment\n// whole line\nprint 2;"),
        vec![
            TokenKind::Print,
            TokenKind::Int(1),
            TokenKind::Semi,
            TokenKind::Print,
            TokenKind::Int(2),
            TokenKind::Semi,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_point_at_the_lexeme() {
    let mut interner = StringInterner::new();
    let (tokens, _) = tokenize("if (x)", &mut interner);
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[1].span, Span::new(3, 4));
    assert_eq!(tokens[2].span, Span::new(4, 5));
}

#[test]
fn unknown_character_is_reported_and_skipped() {
    let mut interner = StringInterner::new();
    let (tokens, errors) = tokenize("x = 1 @ 2;", &mut interner);
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], LexError::UnknownCharacter { text, .. } if text == "@"));
    // The rest of the stream is still produced.
    assert_eq!(tokens.len(), 6); // x = 1 2 ; Eof
}

#[test]
fn oversized_literal_is_an_error() {
    let mut interner = StringInterner::new();
    let (_, errors) = tokenize("99999999999999999999;", &mut interner);
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], LexError::IntegerOverflow { .. }));
}

proptest! {
    /// Arbitrary input never panics, always ends in Eof, and every span
    /// stays within the source.
    #[test]
    fn tokenize_is_total(source in ".*") {
        let mut interner = StringInterner::new();
        let (tokens, _) = tokenize(&source, &mut interner);
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
        for token in &tokens {
            prop_assert!(token.span.end as usize <= source.len());
            prop_assert!(token.span.start <= token.span.end);
        }
    }
}
