//! The canonical stringifier, implemented as [`Display`] on [`Token`].
//!
//! Binary nodes render as `(left OP right)` with no spaces and **unconditional** parentheses,
//! regardless of precedence. This makes the output unambiguous, which is what allows the
//! simplification fixpoint driver to compare stringified trees as its equality oracle. Unary
//! functions render as `name(argument)` and leaves as `x`, `pi`, `e` or the constant's shortest
//! numeric form (`2`, not `2.0`).
//!
//! Stringification is total: there is no failure path for any well-formed tree.

use crate::ast::Token;
use std::fmt::{Display, Formatter, Result};

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Token::Variable => write!(f, "x"),
            Token::Pi => write!(f, "pi"),
            Token::E => write!(f, "e"),
            Token::Constant(value) => write!(f, "{}", value),
            Token::Add(left, right) => write!(f, "({}+{})", left, right),
            Token::Subtract(left, right) => write!(f, "({}-{})", left, right),
            Token::Multiply(left, right) => write!(f, "({}*{})", left, right),
            Token::Divide(left, right) => write!(f, "({}/{})", left, right),
            Token::Power(left, right) => write!(f, "({}^{})", left, right),
            Token::Sin(argument) => write!(f, "sin({})", argument),
            Token::Cos(argument) => write!(f, "cos({})", argument),
            Token::Tan(argument) => write!(f, "tan({})", argument),
            Token::Ln(argument) => write!(f, "ln({})", argument),
            Token::Abs(argument) => write!(f, "abs({})", argument),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn leaves() {
        assert_eq!(Token::Variable.to_string(), "x");
        assert_eq!(Token::Pi.to_string(), "pi");
        assert_eq!(Token::E.to_string(), "e");
        assert_eq!(Token::Constant(2.0).to_string(), "2");
        assert_eq!(Token::Constant(3.14).to_string(), "3.14");
        assert_eq!(Token::Constant(-1.0).to_string(), "-1");
    }

    #[test]
    fn unconditional_parens() {
        // (2*x)+1, with every binary node parenthesized
        let expr = Token::Add(
            Box::new(Token::Multiply(
                Box::new(Token::Constant(2.0)),
                Box::new(Token::Variable),
            )),
            Box::new(Token::Constant(1.0)),
        );
        assert_eq!(expr.to_string(), "((2*x)+1)");
    }

    #[test]
    fn unary_functions() {
        let expr = Token::Sin(Box::new(Token::Cos(Box::new(Token::Variable))));
        assert_eq!(expr.to_string(), "sin(cos(x))");

        let expr = Token::Abs(Box::new(Token::Ln(Box::new(Token::Pi))));
        assert_eq!(expr.to_string(), "abs(ln(pi))");
    }
}
