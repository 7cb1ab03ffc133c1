//! Rewrite rules for exponentiation and the natural logarithm.

use crate::simplify::simplify;
use dx_parser::ast::Token;

/// `0^x = 0`; `x^0 = 1`; `x^1 = x`; `1^x = 1`; `a^b` folds via [`f64::powf`] when both sides are
/// constant; `e^ln(x) = x`.
///
/// Note that `0^x` is tried first, so `0^0` reduces to `0`; none of these identities are
/// domain-checked.
pub fn power(left: &Token, right: &Token) -> Token {
    if left.is_constant(0.0) {
        return Token::Constant(0.0);
    }
    if right.is_constant(0.0) {
        return Token::Constant(1.0);
    }
    if right.is_constant(1.0) {
        return simplify(left);
    }
    if left.is_constant(1.0) {
        return Token::Constant(1.0);
    }
    if let (Some(a), Some(b)) = (left.as_constant(), right.as_constant()) {
        return Token::Constant(a.powf(b));
    }
    if let (Token::E, Token::Ln(argument)) = (left, right) {
        return simplify(argument);
    }

    Token::Power(Box::new(simplify(left)), Box::new(simplify(right)))
}

/// `ln(a^b) = b*ln(a)`; `ln(e) = 1`.
pub fn ln(argument: &Token) -> Token {
    if let Token::Power(base, exponent) = argument {
        return Token::Multiply(
            Box::new(simplify(exponent)),
            Box::new(Token::Ln(Box::new(simplify(base)))),
        );
    }
    if let Token::E = argument {
        return Token::Constant(1.0);
    }

    Token::Ln(Box::new(simplify(argument)))
}
