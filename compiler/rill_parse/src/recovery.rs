//! Error recovery.
//!
//! After a syntax error the parser skips ahead to a statement boundary so
//! it can keep collecting errors from the rest of the input.

use rill_ast::TokenKind;

use crate::Parser;

/// Token kinds that can begin a statement.
pub(crate) fn starts_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Semi
            | TokenKind::LBrace
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Print
            | TokenKind::Ident(_)
    )
}

impl Parser<'_> {
    /// Skip tokens until a likely statement boundary.
    ///
    /// Consumes at least one token (unless already at `Eof`) so recovery
    /// always makes progress, then stops just past a `;`, just before a
    /// `}`, or at the next statement start.
    pub(crate) fn synchronize(&mut self) {
        if self.cursor.is_at_end() {
            return;
        }
        // The offending token itself is always skipped.
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            match self.cursor.current_kind() {
                TokenKind::Semi => {
                    self.cursor.advance();
                    return;
                }
                TokenKind::RBrace => return,
                kind if starts_statement(kind) => return,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }
}
