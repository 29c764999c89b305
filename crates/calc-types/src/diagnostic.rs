use crate::Span;
use serde::{Deserialize, Serialize};

/// The pipeline stage that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Lex,
    Parse,
    Eval,
}

/// A structured interpreter error.
///
/// Front ends render these directly — they must not parse free-form error
/// strings. The `--json` CLI mode serializes this type as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Which stage rejected the input.
    pub stage: Stage,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending text.
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(stage: Stage, message: impl Into<String>, span: Span) -> Self {
        Self {
            stage,
            message: message.into(),
            span,
        }
    }
}
