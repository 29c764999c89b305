//! Core expression evaluator.

use calc_types::ast::{BinOp, Expr, ExprKind, UnaryOp};

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};

/// The calc evaluator — walks AST nodes and produces numbers.
///
/// Owns the variable environment; keep one evaluator alive to retain
/// bindings across successive top-level evaluations. All arithmetic runs in
/// `f64`, so `/` is real division: `7 / 2` is `3.5`.
#[derive(Debug, Default)]
pub struct Evaluator {
    env: Environment,
}

impl Evaluator {
    /// Create an evaluator with an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current variable environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate an expression to a number.
    ///
    /// The match is exhaustive over [`ExprKind`] — a new variant fails to
    /// compile here rather than falling into a generic handler.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(*n as f64),

            ExprKind::Variable(name) => {
                self.env
                    .get(name)
                    .ok_or_else(|| EvalError::UndefinedVariable {
                        name: name.clone(),
                        span: expr.span,
                    })
            }

            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Ok(match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Neg => -value,
                })
            }

            ExprKind::Binary { left, op, right } => {
                // Left operand first: a nested assignment on the left must
                // be visible to the right operand.
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                match op {
                    BinOp::Add => Ok(lhs + rhs),
                    BinOp::Sub => Ok(lhs - rhs),
                    BinOp::Mul => Ok(lhs * rhs),
                    BinOp::Div => {
                        if rhs == 0.0 {
                            Err(EvalError::DivisionByZero { span: right.span })
                        } else {
                            Ok(lhs / rhs)
                        }
                    }
                }
            }

            ExprKind::Assign { target, value } => {
                let value = self.eval(value)?;
                self.env.define(&target.name, value);
                Ok(value)
            }
        }
    }
}
