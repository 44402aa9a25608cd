//! Grammar productions.
//!
//! Statements:
//! ```text
//! stmt  := ';'
//!        | '{' stmt* '}'
//!        | ident '=' expr ';'
//!        | 'if' '(' expr ')' stmt ('else' stmt)?
//!        | 'while' '(' expr ')' stmt
//!        | 'print' expr ';'
//! ```
//!
//! Expressions use the C precedence ladder, lowest first:
//! assignment (right-assoc), `||`, `&&`, `|`, `^`, `&`, equality,
//! relational, additive, multiplicative, unary, primary.

use rill_ast::{BinOp, Expr, Span, Stmt, TokenKind, UnOp, Variable};
use rill_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Semi => {
                let token = self.cursor.advance();
                Ok(Stmt::empty(token.span))
            }
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Ident(_) if self.cursor.peek_kind() == TokenKind::Eq => {
                self.parse_assign_stmt()
            }
            found => Err(ParseError::unexpected(
                "a statement",
                found,
                self.cursor.current_span(),
            )),
        }
    }

    /// `{ stmt* }` - opens a scope frame for the block's duration.
    ///
    /// Errors inside the block are accumulated and recovery continues
    /// within the block, so one unparsable statement doesn't hide the
    /// rest.
    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let open = self.cursor.advance();
        self.scopes.push();

        let mut stmts = Vec::new();
        loop {
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
            if self.cursor.is_at_end() {
                self.scopes.pop();
                return Err(ParseError::unexpected(
                    "`}`",
                    TokenKind::Eof,
                    self.cursor.current_span(),
                ));
            }
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }
        let close = self.cursor.advance();
        self.scopes.pop();
        Ok(Stmt::block(stmts, open.span.merge(close.span)))
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        self.cursor.expect(TokenKind::LParen, "`(`")?;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen, "`)`")?;
        let then_branch = self.parse_stmt()?;

        let (else_branch, end) = if self.cursor.eat(TokenKind::Else) {
            let other = self.parse_stmt()?;
            let span = other.span();
            (Some(other), span)
        } else {
            (None, then_branch.span())
        };
        Ok(Stmt::if_stmt(
            cond,
            then_branch,
            else_branch,
            keyword.span.merge(end),
        ))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        self.cursor.expect(TokenKind::LParen, "`(`")?;
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen, "`)`")?;
        let body = self.parse_stmt()?;
        let span = keyword.span.merge(body.span());
        Ok(Stmt::while_stmt(cond, body, span))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let value = self.parse_expr()?;
        let semi = self.cursor.expect(TokenKind::Semi, "`;`")?;
        Ok(Stmt::print(value, keyword.span.merge(semi.span)))
    }

    /// `ident = expr ;` - the target is declared after the value is
    /// parsed, so `x = x + 1;` resolves the read before the declaration.
    fn parse_assign_stmt(&mut self) -> Result<Stmt, ParseError> {
        let (name, name_span) = self.expect_ident()?;
        self.cursor.expect(TokenKind::Eq, "`=`")?;
        let value = self.parse_expr()?;
        let semi = self.cursor.expect(TokenKind::Semi, "`;`")?;

        let canonical = self.scopes.declare(name);
        Ok(Stmt::assign(
            Variable::new(canonical, name_span),
            value,
            name_span.merge(semi.span),
        ))
    }

    fn expect_ident(&mut self) -> Result<(rill_ast::Name, Span), ParseError> {
        let token = self.cursor.advance();
        match token.kind {
            TokenKind::Ident(name) => Ok((name, token.span)),
            found => Err(ParseError::unexpected("identifier", found, token.span)),
        }
    }

    /// Entry point for expressions.
    ///
    /// Wrapped in `ensure_sufficient_stack`: nested parentheses and
    /// assignment chains recurse through here once per level.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assign_expr())
    }

    /// Assignment expression, right-associative: `x = y = 1` yields 1
    /// into both.
    fn parse_assign_expr(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.cursor.current_kind(), TokenKind::Ident(_))
            && self.cursor.peek_kind() == TokenKind::Eq
        {
            let (name, name_span) = self.expect_ident()?;
            self.cursor.advance(); // `=`
            let value = self.parse_expr()?;

            let canonical = self.scopes.declare(name);
            let span = name_span.merge(value.span());
            return Ok(Expr::assign(Variable::new(canonical, name_span), value, span));
        }
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;
        while self.cursor.eat(TokenKind::PipePipe) {
            let right = self.parse_logical_and()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(BinOp::Or, left, right, span);
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bit_or()?;
        while self.cursor.eat(TokenKind::AmpAmp) {
            let right = self.parse_bit_or()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(BinOp::And, left, right, span);
        }
        Ok(left)
    }

    fn parse_bit_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bit_xor()?;
        while self.cursor.eat(TokenKind::Pipe) {
            let right = self.parse_bit_xor()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(BinOp::BitOr, left, right, span);
        }
        Ok(left)
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bit_and()?;
        while self.cursor.eat(TokenKind::Caret) {
            let right = self.parse_bit_and()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(BinOp::BitXor, left, right, span);
        }
        Ok(left)
    }

    fn parse_bit_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.cursor.eat(TokenKind::Amp) {
            let right = self.parse_equality()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(BinOp::BitAnd, left, right, span);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::NotEq,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_relational()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(op, left, right, span);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::LtEq => BinOp::LtEq,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::GtEq => BinOp::GtEq,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_additive()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(op, left, right, span);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(op, left, right, span);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Rem,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_unary()?;
            let span = left.span().merge(right.span());
            left = Expr::binary(op, left, right, span);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Plus => UnOp::Plus,
            TokenKind::Bang => UnOp::Not,
            _ => return self.parse_primary(),
        };
        let token = self.cursor.advance();
        // Unary chains recurse once per operator.
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = token.span.merge(operand.span());
        Ok(Expr::unary(op, operand, span))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Int(value) => {
                let token = self.cursor.advance();
                Ok(Expr::number(value, token.span))
            }
            TokenKind::Ident(name) => {
                let token = self.cursor.advance();
                // Reads resolve to the canonical binding when one is
                // visible; an unbound read is a runtime error, not a
                // parse error.
                let canonical = self.scopes.lookup(name).unwrap_or(name);
                Ok(Expr::variable(canonical, token.span))
            }
            TokenKind::Question => {
                let token = self.cursor.advance();
                Ok(Expr::input(token.span))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let expr = self.parse_expr()?;
                self.cursor.expect(TokenKind::RParen, "`)`")?;
                Ok(expr)
            }
            found => Err(ParseError::unexpected(
                "an expression",
                found,
                self.cursor.current_span(),
            )),
        }
    }
}
