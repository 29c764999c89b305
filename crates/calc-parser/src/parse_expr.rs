//! Expression grammar with precedence layering.
//!
//! Precedence (loosest → tightest):
//! 4. assignment (right-associative)
//! 3. `+`, `-` (left-associative)
//! 2. `*`, `/` (left-associative)
//! 1. unary `+`, `-` (nests)
//! 0. atoms: integer, identifier, `( expression )`

use calc_lexer::TokenKind;
use calc_types::ast::{BinOp, Expr, ExprKind, Ident, UnaryOp};

use crate::parser::{ParseError, Parser};

impl<'src> Parser<'src> {
    /// `expression := assignment`
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// `assignment := IDENT '=' expression | additive`
    ///
    /// An identifier starts an assignment only when the token immediately
    /// after it is `=` — that is the one place two tokens of lookahead are
    /// needed. Any other identifier is an ordinary variable reference and
    /// parsing falls through to the additive chain. The recursion into
    /// `expression` on the right-hand side makes `x = y = 2` associate
    /// rightwards.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        if let TokenKind::Ident(name) = self.peek_kind() {
            let name = name.clone();
            if matches!(self.peek_second()?, TokenKind::Eq) {
                let target_span = self.current_span();
                self.advance()?; // identifier
                self.advance()?; // '='
                let value = self.parse_expression()?;
                let span = target_span.merge(value.span);
                return Ok(Expr::new(
                    ExprKind::Assign {
                        target: Ident::new(name, target_span),
                        value: Box::new(value),
                    },
                    span,
                ));
            }
        }
        self.parse_additive()
    }

    /// `additive := multiplicative (('+' | '-') multiplicative)*`
    ///
    /// Folds left-to-right into a left-leaning chain: `10 - 2 - 3` is
    /// `(10 - 2) - 3`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_multiplicative()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `multiplicative := unary (('*' | '/') unary)*`
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_unary()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `unary := ('+' | '-') unary | atom`
    ///
    /// Nests (`--5` is double negation) and binds tighter than any binary
    /// operator, including on the right-hand side of one.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_atom(),
        };
        let start = self.current_span();
        self.advance()?;
        let operand = self.parse_unary()?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `atom := INT | IDENT | '(' expression ')'`
    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind().clone() {
            TokenKind::Int(value) => {
                let span = self.advance()?.span;
                Ok(Expr::new(ExprKind::Number(value), span))
            }
            TokenKind::Ident(name) => {
                let span = self.advance()?.span;
                Ok(Expr::new(ExprKind::Variable(name), span))
            }
            TokenKind::LParen => {
                let open = self.advance()?.span;
                let inner = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?.span;
                // Grouping only shapes the tree; the node itself is the
                // inner expression with the parens folded into its span.
                Ok(Expr::new(inner.kind, open.merge(close)))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }
}
