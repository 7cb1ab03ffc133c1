//! Rewrite rules for addition and subtraction.

use crate::simplify::{simplify, text_eq};
use dx_parser::ast::Token;

/// `a+b` folds when both sides are constant; `0+x = x`; `x+0 = x`.
pub fn add(left: &Token, right: &Token) -> Token {
    if let (Some(a), Some(b)) = (left.as_constant(), right.as_constant()) {
        return Token::Constant(a + b);
    }
    if left.is_constant(0.0) {
        return simplify(right);
    }
    if right.is_constant(0.0) {
        return simplify(left);
    }

    Token::Add(Box::new(simplify(left)), Box::new(simplify(right)))
}

/// `a-b` folds when both sides are constant; `0-x = -1*x`; `x-x = 0` (by the text oracle, not
/// domain-checked); `x-0 = x`.
pub fn subtract(left: &Token, right: &Token) -> Token {
    if let (Some(a), Some(b)) = (left.as_constant(), right.as_constant()) {
        return Token::Constant(a - b);
    }
    if left.is_constant(0.0) {
        return Token::Multiply(Box::new(Token::Constant(-1.0)), Box::new(simplify(right)));
    }
    if text_eq(left, right) {
        return Token::Constant(0.0);
    }
    if right.is_constant(0.0) {
        return simplify(left);
    }

    Token::Subtract(Box::new(simplify(left)), Box::new(simplify(right)))
}
