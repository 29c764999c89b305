//! Shared types for the calc interpreter.
//!
//! This crate defines the AST node types, source spans, and the structured
//! diagnostic type used across all interpreter stages.

mod diagnostic;
mod span;
pub mod ast;

pub use diagnostic::{Diagnostic, Stage};
pub use span::Span;
