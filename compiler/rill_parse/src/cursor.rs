//! Token cursor for navigating the token stream.

use std::mem::discriminant;

use rill_ast::{Span, Token, TokenKind};

use crate::ParseError;

/// Cursor over the token slice.
///
/// Invariant: the stream is non-empty and ends with exactly one `Eof`
/// token (the lexer guarantees this); the position never moves past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// The span of the most recently consumed token.
    ///
    /// Before anything was consumed this is the first token's span.
    pub fn previous_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }

    /// Kind of the token after the current one (`Eof` at the end).
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Whether the cursor is at the end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Consume and return the current token. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Whether the current token has the same kind (payloads ignored).
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        discriminant(&self.current_kind()) == discriminant(&kind)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or produce a syntax error.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                expected,
                self.current_kind(),
                self.current_span(),
            ))
        }
    }
}
