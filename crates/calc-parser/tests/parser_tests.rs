//! Parser tests: precedence, associativity, unary nesting, assignment
//! lookahead, and syntax failures.

use calc_lexer::{Lexer, TokenKind};
use calc_parser::{ParseError, Parser};
use calc_types::ast::{BinOp, Expr, ExprKind, UnaryOp};

/// Parse source into an AST. Panics on a syntax error.
fn parse(source: &str) -> Expr {
    Parser::new(Lexer::new(source))
        .and_then(Parser::parse)
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

/// Parse source and return the error. Panics if parsing succeeds.
fn parse_err(source: &str) -> ParseError {
    match Parser::new(Lexer::new(source)).and_then(Parser::parse) {
        Ok(expr) => panic!("expected a syntax error for {source:?}, got {expr:?}"),
        Err(err) => err,
    }
}

/// Destructure a binary node or panic.
fn as_binary(expr: &Expr) -> (&Expr, BinOp, &Expr) {
    match &expr.kind {
        ExprKind::Binary { left, op, right } => (left.as_ref(), *op, right.as_ref()),
        other => panic!("expected a binary node, got {other:?}"),
    }
}

#[test]
fn number_atom() {
    assert_eq!(parse("42").kind, ExprKind::Number(42));
}

#[test]
fn variable_atom() {
    assert_eq!(parse("total").kind, ExprKind::Variable("total".into()));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    // 2 + 3 * 4 parses as 2 + (3 * 4)
    let expr = parse("2 + 3 * 4");
    let (left, op, right) = as_binary(&expr);
    assert_eq!(op, BinOp::Add);
    assert_eq!(left.kind, ExprKind::Number(2));
    let (mul_left, mul_op, mul_right) = as_binary(right);
    assert_eq!(mul_op, BinOp::Mul);
    assert_eq!(mul_left.kind, ExprKind::Number(3));
    assert_eq!(mul_right.kind, ExprKind::Number(4));
}

#[test]
fn additive_chain_leans_left() {
    // 10 - 2 - 3 parses as (10 - 2) - 3
    let expr = parse("10 - 2 - 3");
    let (left, op, right) = as_binary(&expr);
    assert_eq!(op, BinOp::Sub);
    assert_eq!(right.kind, ExprKind::Number(3));
    let (inner_left, inner_op, inner_right) = as_binary(left);
    assert_eq!(inner_op, BinOp::Sub);
    assert_eq!(inner_left.kind, ExprKind::Number(10));
    assert_eq!(inner_right.kind, ExprKind::Number(2));
}

#[test]
fn multiplicative_chain_leans_left() {
    // 8 / 4 / 2 parses as (8 / 4) / 2
    let expr = parse("8 / 4 / 2");
    let (left, op, right) = as_binary(&expr);
    assert_eq!(op, BinOp::Div);
    assert_eq!(right.kind, ExprKind::Number(2));
    let (_, inner_op, _) = as_binary(left);
    assert_eq!(inner_op, BinOp::Div);
}

#[test]
fn parentheses_override_precedence() {
    // (2 + 3) * 4 parses as a Mul whose left child is the Add
    let expr = parse("(2 + 3) * 4");
    let (left, op, right) = as_binary(&expr);
    assert_eq!(op, BinOp::Mul);
    assert_eq!(right.kind, ExprKind::Number(4));
    let (_, inner_op, _) = as_binary(left);
    assert_eq!(inner_op, BinOp::Add);
}

#[test]
fn unary_nests() {
    // --5 is Neg(Neg(5))
    let expr = parse("--5");
    let ExprKind::Unary { op, operand } = &expr.kind else {
        panic!("expected a unary node");
    };
    assert_eq!(*op, UnaryOp::Neg);
    let ExprKind::Unary { op, operand } = &operand.kind else {
        panic!("expected a nested unary node");
    };
    assert_eq!(*op, UnaryOp::Neg);
    assert_eq!(operand.kind, ExprKind::Number(5));
}

#[test]
fn unary_binds_tighter_than_binary() {
    // 3 * -4 parses as 3 * (-4)
    let expr = parse("3 * -4");
    let (_, op, right) = as_binary(&expr);
    assert_eq!(op, BinOp::Mul);
    assert!(matches!(
        right.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn unary_plus_is_recognized() {
    let expr = parse("+7");
    assert!(matches!(
        expr.kind,
        ExprKind::Unary {
            op: UnaryOp::Plus,
            ..
        }
    ));
}

#[test]
fn assignment_from_identifier_and_eq() {
    let expr = parse("x = 5");
    let ExprKind::Assign { target, value } = &expr.kind else {
        panic!("expected an assignment");
    };
    assert_eq!(target.name, "x");
    assert_eq!(value.kind, ExprKind::Number(5));
}

#[test]
fn assignment_chains_rightward() {
    // x = y = 2 parses as x = (y = 2)
    let expr = parse("x = y = 2");
    let ExprKind::Assign { target, value } = &expr.kind else {
        panic!("expected an assignment");
    };
    assert_eq!(target.name, "x");
    let ExprKind::Assign { target, value } = &value.kind else {
        panic!("expected a nested assignment");
    };
    assert_eq!(target.name, "y");
    assert_eq!(value.kind, ExprKind::Number(2));
}

#[test]
fn identifier_without_eq_is_a_variable_reference() {
    // The two-token lookahead must not swallow `x` here.
    let expr = parse("x + 1");
    let (left, op, _) = as_binary(&expr);
    assert_eq!(op, BinOp::Add);
    assert_eq!(left.kind, ExprKind::Variable("x".into()));
}

#[test]
fn assignment_value_may_use_the_same_name() {
    let expr = parse("x = x + 1");
    let ExprKind::Assign { target, value } = &expr.kind else {
        panic!("expected an assignment");
    };
    assert_eq!(target.name, "x");
    assert!(matches!(value.kind, ExprKind::Binary { .. }));
}

#[test]
fn dangling_operator_is_a_syntax_error() {
    assert!(matches!(
        parse_err("3 + "),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn unclosed_paren_is_a_syntax_error() {
    let err = parse_err("(3 + 4");
    match err {
        ParseError::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, "')'");
            assert_eq!(found, TokenKind::Eof);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_rejected() {
    assert!(matches!(
        parse_err("1 + 2 3"),
        ParseError::TrailingInput {
            found: TokenKind::Int(3),
            ..
        }
    ));
}

#[test]
fn stray_close_paren_is_trailing_input() {
    assert!(matches!(
        parse_err("(1 + 2))"),
        ParseError::TrailingInput {
            found: TokenKind::RParen,
            ..
        }
    ));
}

#[test]
fn leading_eq_is_a_syntax_error() {
    assert!(matches!(
        parse_err("= 5"),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn empty_input_is_a_syntax_error() {
    assert!(matches!(
        parse_err(""),
        ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            ..
        }
    ));
}

#[test]
fn lex_failure_surfaces_through_the_parser() {
    assert!(matches!(parse_err("3 & 4"), ParseError::Lex(_)));
}

#[test]
fn spans_cover_the_whole_expression() {
    let expr = parse("(2 + 3) * 4");
    assert_eq!(expr.span.start, 0);
    assert_eq!(expr.span.end, 11);
}
