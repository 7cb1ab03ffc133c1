//! The single-pass simplifier and the fixpoint driver that makes it safe to use.
//!
//! [`simplify`] applies each variant's algebraic identities (see [`rules`]) and otherwise
//! recurses into the children. One pass is **not** idempotent: a rewrite fired at one level does
//! not re-trigger matching at that same level on the structure it just produced, so e.g.
//! `(0+x)*1` needs a second pass to fully collapse. Callers that want a reduced canonical form
//! must use [`simplify_full`].
//!
//! Two trees are considered equal throughout this module iff their canonical stringified text is
//! identical (see [`text_eq`]). This is deliberate: the stringifier parenthesizes every binary
//! node, so its output is unambiguous, and comparing it is much simpler than a structural
//! equality that has to reason about floats.

pub mod rules;

use dx_parser::ast::Token;

/// The most passes [`simplify_full`] will ever run.
///
/// Well-formed input settles within a handful of passes; the bound only exists so that a
/// pathological rewrite cycle cannot hang the caller.
pub const MAX_PASSES: usize = 32;

/// The equality oracle: two trees are equal iff they stringify to the same canonical text.
pub(crate) fn text_eq(a: &Token, b: &Token) -> bool {
    a.to_string() == b.to_string()
}

/// Performs one simplification pass over the tree, returning the rewritten tree.
///
/// Every branch that cannot fire an identity still simplifies its children, so a single call does
/// useful work at every level; it just doesn't rescan the structure it produces. Use
/// [`simplify_full`] to reach a fixpoint.
pub fn simplify(expr: &Token) -> Token {
    match expr {
        Token::Variable | Token::Pi | Token::E | Token::Constant(_) => expr.clone(),
        Token::Add(left, right) => rules::add::add(left, right),
        Token::Subtract(left, right) => rules::add::subtract(left, right),
        Token::Multiply(left, right) => rules::multiply::multiply(left, right),
        Token::Divide(left, right) => rules::multiply::divide(left, right),
        Token::Power(left, right) => rules::power::power(left, right),
        Token::Ln(argument) => rules::power::ln(argument),
        Token::Sin(argument) => Token::Sin(Box::new(simplify(argument))),
        Token::Cos(argument) => Token::Cos(Box::new(simplify(argument))),
        Token::Tan(argument) => Token::Tan(Box::new(simplify(argument))),
        Token::Abs(argument) => Token::Abs(Box::new(simplify(argument))),
    }
}

/// Drives [`simplify`] to a fixpoint: passes are applied until two consecutive results render to
/// the same canonical text, and then one further pass is applied to the agreed-upon tree.
///
/// If the tree has not settled after [`MAX_PASSES`] passes, the current tree is returned as-is
/// rather than looping forever.
pub fn simplify_full(expr: &Token) -> Token {
    let mut current = expr.clone();
    let mut text = current.to_string();

    for _ in 0..MAX_PASSES {
        let next = simplify(&current);
        let next_text = next.to_string();
        if next_text == text {
            return simplify(&next);
        }
        current = next;
        text = next_text;
    }

    current
}

#[cfg(test)]
mod tests {
    use dx_parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the input and drives it to its simplification fixpoint, returning the canonical
    /// text.
    fn simplified(input: &str) -> String {
        let tree = Parser::new(input).parse().unwrap();
        simplify_full(&tree).to_string()
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("1+2"), "3");
        assert_eq!(simplified("5-2"), "3");
        assert_eq!(simplified("4*2"), "8");
        assert_eq!(simplified("9/2"), "4.5");
        assert_eq!(simplified("2^10"), "1024");
    }

    #[test]
    fn additive_identities() {
        assert_eq!(simplified("0+x"), "x");
        assert_eq!(simplified("x+0"), "x");
        assert_eq!(simplified("x-0"), "x");
        assert_eq!(simplified("0-x"), "(-1*x)");
    }

    #[test]
    fn self_difference_and_quotient() {
        assert_eq!(simplified("sin(x)-sin(x)"), "0");
        assert_eq!(simplified("sin(x)/sin(x)"), "1");
        // not domain-checked: x/x is 1 even though it is undefined at x=0
        assert_eq!(simplified("x/x"), "1");
    }

    #[test]
    fn multiplicative_identities() {
        assert_eq!(simplified("0*x"), "0");
        assert_eq!(simplified("x*0"), "0");
        assert_eq!(simplified("1*x"), "x");
        assert_eq!(simplified("x*1"), "x");
        assert_eq!(simplified("x/1"), "x");
        assert_eq!(simplified("0/x"), "0");
    }

    #[test]
    fn constant_factors_move_left() {
        assert_eq!(simplified("x*5"), "(5*x)");
        assert_eq!(simplified("sin(x)*2"), "(2*sin(x))");
    }

    #[test]
    fn power_identities() {
        assert_eq!(simplified("0^x"), "0");
        assert_eq!(simplified("x^0"), "1");
        assert_eq!(simplified("x^1"), "x");
        assert_eq!(simplified("1^x"), "1");
        assert_eq!(simplified("e^ln(x)"), "x");
    }

    #[test]
    fn ln_identities() {
        assert_eq!(simplified("ln(e)"), "1");
        assert_eq!(simplified("ln(x^2)"), "(2*ln(x))");
    }

    #[test]
    fn trig_recurses_into_arguments() {
        assert_eq!(simplified("sin(x+0)"), "sin(x)");
        assert_eq!(simplified("cos(1*x)"), "cos(x)");
        assert_eq!(simplified("tan(x^1)"), "tan(x)");
        assert_eq!(simplified("abs(x*1)"), "abs(x)");
    }

    #[test]
    fn one_pass_is_not_a_fixpoint() {
        // ln(e^2) rewrites to 2*ln(e) in one pass; only the next pass folds ln(e) to 1
        let tree = Parser::new("ln(e^2)").parse().unwrap();
        let once = simplify(&tree);
        assert_eq!(once.to_string(), "(2*ln(e))");
        assert_eq!(simplify_full(&tree).to_string(), "2");
    }

    #[test]
    fn fixpoint_converges_quickly() {
        for input in [
            "x^2+5*x+6",
            "(x+0)*(1*x)",
            "sin(x)*cos(x)/(x+1)",
            "ln(e^x)*1+0",
            "2*(x+1)-2*(x+1)",
        ] {
            let mut current = Parser::new(input).parse().unwrap();
            let mut text = current.to_string();
            let mut passes = 0;
            loop {
                let next = simplify(&current);
                let next_text = next.to_string();
                passes += 1;
                assert!(passes <= 10, "{:?} did not settle within 10 passes", input);
                if next_text == text {
                    break;
                }
                current = next;
                text = next_text;
            }
        }
    }

    #[test]
    fn division_by_zero_folds_to_non_finite() {
        // callers must tolerate non-finite constants out of folding
        let tree = Parser::new("1/0").parse().unwrap();
        let folded = simplify_full(&tree);
        assert_eq!(folded.as_constant(), Some(f64::INFINITY));
    }
}
