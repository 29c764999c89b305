//! Core parser infrastructure: token cursor, lookahead, expect helper.

use calc_lexer::{LexError, Lexer, Token, TokenKind};
use calc_types::ast::Expr;
use calc_types::Span;
use thiserror::Error;

/// Syntax error. Fail-fast: the first mismatch aborts the parse, no
/// recovery or partial tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer rejected the input while the parser was pulling tokens.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The current token does not fit the grammar rule being matched.
    #[error("invalid syntax: expected {expected}, found '{found}' at {span}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },
    /// Tokens remain after a complete top-level expression.
    #[error("invalid syntax: trailing input '{found}' at {span}")]
    TrailingInput { found: TokenKind, span: Span },
}

impl ParseError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::TrailingInput { span, .. } => *span,
        }
    }
}

/// The calc parser.
///
/// Pulls tokens from the lexer on demand. Grammar rules see exactly one
/// token of lookahead (`current`); a second slot is filled only while
/// deciding whether an identifier starts an assignment.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// The token every grammar rule inspects.
    current: Token,
    /// Second lookahead slot for the assignment decision.
    peeked: Option<Token>,
}

impl<'src> Parser<'src> {
    /// Create a parser and prime the first token.
    ///
    /// Priming can already fail lexically, e.g. when the input starts with
    /// an unrecognized character.
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            peeked: None,
        })
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.current.span
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Look at the token after the current one without consuming anything.
    pub(crate) fn peek_second(&mut self) -> Result<&TokenKind, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(&self.peeked.insert(token).kind)
    }

    /// Consume primitive: if the current token matches `expected`, advance
    /// and return it; otherwise fail with a syntax error.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<Token, ParseError> {
        if self.peek_kind() == expected {
            self.advance()
        } else {
            Err(self.unexpected(format!("'{expected}'")))
        }
    }

    /// Build an `UnexpectedToken` error at the current position.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: self.current.kind.clone(),
            span: self.current.span,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the whole input into one expression AST.
    ///
    /// The token after the top-level expression must be end-of-input.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !matches!(self.peek_kind(), TokenKind::Eof) {
            return Err(ParseError::TrailingInput {
                found: self.current.kind.clone(),
                span: self.current.span,
            });
        }
        Ok(expr)
    }
}
