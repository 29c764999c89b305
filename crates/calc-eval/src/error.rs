//! Runtime error types for the calc evaluator.

use calc_types::Span;
use thiserror::Error;

/// Evaluation error — failures while walking the tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A variable was read before any assignment to it.
    #[error("undefined variable '{name}' at {span}")]
    UndefinedVariable { name: String, span: Span },
    /// The right operand of `/` evaluated to zero.
    #[error("division by zero at {span}")]
    DivisionByZero { span: Span },
}

impl EvalError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            EvalError::UndefinedVariable { span, .. } => *span,
            EvalError::DivisionByZero { span } => *span,
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
