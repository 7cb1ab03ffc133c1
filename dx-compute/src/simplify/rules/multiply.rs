//! Rewrite rules for multiplication and division.

use crate::simplify::{simplify, text_eq};
use dx_parser::ast::Token;

/// `a*b` folds when both sides are constant; `0*x = x*0 = 0`; `1*x = x*1 = x`. A constant on the
/// right is swapped to the left (`x*5 = 5*x`) so that coefficients always sit in front, both for
/// display and so later passes can recognise them.
pub fn multiply(left: &Token, right: &Token) -> Token {
    if let (Some(a), Some(b)) = (left.as_constant(), right.as_constant()) {
        return Token::Constant(a * b);
    }
    if left.is_constant(0.0) || right.is_constant(0.0) {
        return Token::Constant(0.0);
    }
    if left.is_constant(1.0) {
        return simplify(right);
    }
    if right.is_constant(1.0) {
        return simplify(left);
    }
    if right.as_constant().is_some() {
        return simplify(&Token::Multiply(Box::new(right.clone()), Box::new(left.clone())));
    }

    Token::Multiply(Box::new(simplify(left)), Box::new(simplify(right)))
}

/// `a/b` folds when both sides are constant, which may produce `inf` or `NaN`; callers
/// tolerate non-finite constants. `x/x = 1` (by the text oracle, not domain-checked);
/// `x/1 = x`; `0/x = 0`.
pub fn divide(left: &Token, right: &Token) -> Token {
    if let (Some(a), Some(b)) = (left.as_constant(), right.as_constant()) {
        return Token::Constant(a / b);
    }
    if text_eq(left, right) {
        return Token::Constant(1.0);
    }
    if right.is_constant(1.0) {
        return simplify(left);
    }
    if left.is_constant(0.0) {
        return Token::Constant(0.0);
    }

    Token::Divide(Box::new(simplify(left)), Box::new(simplify(right)))
}
