//! Lexer for Rill using logos.
//!
//! Tokenization is a two-step pass: logos produces raw matches over the
//! source bytes, and the conversion loop turns them into spanned
//! [`Token`]s, interning identifiers as it goes. Lexical errors (unknown
//! characters, oversized integer literals) are accumulated with their
//! spans rather than aborting the scan, so the parser still sees the rest
//! of the stream and one run can report every problem.

use logos::Logos;

use rill_ast::{Span, StringInterner, Token, TokenKind};

/// Raw token from logos (before interning and literal parsing).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")] // Whitespace
#[logos(skip r"//[^\n]*")] // Line comments
enum RawToken {
    // Keywords
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("print")]
    Print,

    // Literals and identifiers
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // Input read
    #[token("?")]
    Question,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,

    // Delimiters
    #[token(";")]
    Semi,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

/// A lexical error with its source span.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unknown character `{text}`")]
    UnknownCharacter { text: String, span: Span },
    #[error("integer literal `{text}` does not fit in a 64-bit integer")]
    IntegerOverflow { text: String, span: Span },
}

impl LexError {
    /// The source span the error points at.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownCharacter { span, .. } | LexError::IntegerOverflow { span, .. } => {
                *span
            }
        }
    }
}

/// Tokenize `source`, interning identifiers into `interner`.
///
/// Always returns a token stream ending in exactly one `Eof` token, plus
/// the accumulated lexical errors. Unknown characters are skipped in the
/// token stream and reported; any error suppresses evaluation downstream.
pub fn tokenize(source: &str, interner: &mut StringInterner) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for (raw, range) in RawToken::lexer(source).spanned() {
        let span = Span::from_range(range.clone());
        let kind = match raw {
            Ok(RawToken::If) => TokenKind::If,
            Ok(RawToken::Else) => TokenKind::Else,
            Ok(RawToken::While) => TokenKind::While,
            Ok(RawToken::Print) => TokenKind::Print,
            Ok(RawToken::Int) => {
                let text = &source[range];
                match text.parse::<i64>() {
                    Ok(value) => TokenKind::Int(value),
                    Err(_) => {
                        errors.push(LexError::IntegerOverflow {
                            text: text.to_owned(),
                            span,
                        });
                        continue;
                    }
                }
            }
            Ok(RawToken::Ident) => TokenKind::Ident(interner.intern(&source[range])),
            Ok(RawToken::Question) => TokenKind::Question,
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => TokenKind::Minus,
            Ok(RawToken::Star) => TokenKind::Star,
            Ok(RawToken::Slash) => TokenKind::Slash,
            Ok(RawToken::Percent) => TokenKind::Percent,
            Ok(RawToken::Amp) => TokenKind::Amp,
            Ok(RawToken::Caret) => TokenKind::Caret,
            Ok(RawToken::Pipe) => TokenKind::Pipe,
            Ok(RawToken::AmpAmp) => TokenKind::AmpAmp,
            Ok(RawToken::PipePipe) => TokenKind::PipePipe,
            Ok(RawToken::Bang) => TokenKind::Bang,
            Ok(RawToken::Eq) => TokenKind::Eq,
            Ok(RawToken::EqEq) => TokenKind::EqEq,
            Ok(RawToken::NotEq) => TokenKind::NotEq,
            Ok(RawToken::Lt) => TokenKind::Lt,
            Ok(RawToken::LtEq) => TokenKind::LtEq,
            Ok(RawToken::Gt) => TokenKind::Gt,
            Ok(RawToken::GtEq) => TokenKind::GtEq,
            Ok(RawToken::Semi) => TokenKind::Semi,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBrace) => TokenKind::LBrace,
            Ok(RawToken::RBrace) => TokenKind::RBrace,
            Err(()) => {
                errors.push(LexError::UnknownCharacter {
                    text: source[range].to_owned(),
                    span,
                });
                continue;
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
    (tokens, errors)
}

#[cfg(test)]
mod tests;
