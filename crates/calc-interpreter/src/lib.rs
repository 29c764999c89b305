//! calc interpreter: orchestrates the full pipeline.
//!
//! ```text
//! source text → Lexer → token stream → Parser → AST → Evaluator → f64
//! ```
//!
//! A [`Session`] owns one environment, so assignments persist across its
//! [`Session::eval`] calls. Independent sessions share nothing.

use calc_eval::{Environment, EvalError, Evaluator};
use calc_lexer::{LexError, Lexer};
use calc_parser::{ParseError, Parser};
use calc_types::{Diagnostic, Stage};
use thiserror::Error;

/// Umbrella error for a full lex → parse → evaluate run.
///
/// Each of the stage errors propagates unchanged; nothing is caught or
/// retried inside the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Lifts a lexical failure observed by the parser back out to
/// [`CalcError::Lex`], so every error keeps its original kind at the
/// session surface.
impl From<ParseError> for CalcError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(lex) => CalcError::Lex(lex),
            other => CalcError::Parse(other),
        }
    }
}

impl CalcError {
    /// Structured rendering for front ends (JSON output, editors).
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CalcError::Lex(e) => Diagnostic::new(Stage::Lex, e.to_string(), e.span()),
            CalcError::Parse(e) => Diagnostic::new(Stage::Parse, e.to_string(), e.span()),
            CalcError::Eval(e) => Diagnostic::new(Stage::Eval, e.to_string(), e.span()),
        }
    }
}

/// One interpreter session: the pipeline plus a persistent environment.
///
/// A REPL keeps a single session alive for its whole run; file evaluation
/// uses one session for all lines of the file.
#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    /// Create a session with an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one expression against this session's environment.
    pub fn eval(&mut self, source: &str) -> Result<f64, CalcError> {
        let parser = Parser::new(Lexer::new(source))?;
        let expr = parser.parse()?;
        Ok(self.evaluator.eval(&expr)?)
    }

    /// The session's variable environment.
    pub fn env(&self) -> &Environment {
        self.evaluator.env()
    }
}

/// Evaluate a single expression with a fresh, throwaway environment.
pub fn eval_str(source: &str) -> Result<f64, CalcError> {
    Session::new().eval(source)
}
