//! Numerical evaluation of expression trees.
//!
//! This is what plotting front ends use to sample `f` and `f'`, and what the test suite uses to
//! check the symbolic derivative against a finite-difference approximation. Evaluation is total:
//! division by zero, `ln` of a negative number and the like follow IEEE semantics and produce
//! `inf` / `NaN` rather than failing.

use dx_parser::ast::Token;

/// Evaluates the expression at the given value of `x`.
pub fn eval(expr: &Token, x: f64) -> f64 {
    match expr {
        Token::Variable => x,
        Token::Pi => std::f64::consts::PI,
        Token::E => std::f64::consts::E,
        Token::Constant(value) => *value,
        Token::Add(left, right) => eval(left, x) + eval(right, x),
        Token::Subtract(left, right) => eval(left, x) - eval(right, x),
        Token::Multiply(left, right) => eval(left, x) * eval(right, x),
        Token::Divide(left, right) => eval(left, x) / eval(right, x),
        Token::Power(left, right) => eval(left, x).powf(eval(right, x)),
        Token::Sin(argument) => eval(argument, x).sin(),
        Token::Cos(argument) => eval(argument, x).cos(),
        Token::Tan(argument) => eval(argument, x).tan(),
        Token::Ln(argument) => eval(argument, x).ln(),
        Token::Abs(argument) => eval(argument, x).abs(),
    }
}

#[cfg(test)]
mod tests {
    use crate::derivative::differentiate;
    use crate::simplify::simplify_full;
    use assert_float_eq::assert_float_absolute_eq;
    use dx_parser::Parser;
    use super::*;

    #[test]
    fn evaluates_leaves_and_operators() {
        let tree = Parser::new("2x^2+1").parse().unwrap();
        assert_float_absolute_eq!(eval(&tree, 3.0), 19.0);

        let tree = Parser::new("sin(pi/2)").parse().unwrap();
        assert_float_absolute_eq!(eval(&tree, 0.0), 1.0);

        let tree = Parser::new("ln(e)").parse().unwrap();
        assert_float_absolute_eq!(eval(&tree, 0.0), 1.0);
    }

    #[test]
    fn division_by_zero_is_tolerated() {
        let tree = Parser::new("1/x").parse().unwrap();
        assert_eq!(eval(&tree, 0.0), f64::INFINITY);
    }

    /// Approximates the derivative of the expression at `x` by finite difference.
    fn finite_difference(expr: &Token, x: f64) -> f64 {
        const DX: f64 = 1e-5;
        (eval(expr, x + DX) - eval(expr, x)) / DX
    }

    /// Differentiates the function symbolically and checks it against the finite-difference
    /// approximation at every given point.
    fn check_derivative(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-3;

        let tree = Parser::new(function).parse().unwrap();
        let (derivative, _) = differentiate(&tree);
        let derivative = simplify_full(&derivative);

        for point in points {
            let symbolic = eval(&derivative, point);
            let numeric = finite_difference(&tree, point);
            assert!(
                (symbolic - numeric).abs() < TOL,
                "for {:?} at x={}, the symbolic derivative gave {} but finite difference gave {}",
                function,
                point,
                symbolic,
                numeric,
            );
        }
    }

    #[test]
    fn polynomial_derivative_matches_finite_difference() {
        check_derivative("x^2+5x+6", [0.0, 1.0, 2.0, 5.0, 8.0]);
    }

    #[test]
    fn trigonometric_derivative_matches_finite_difference() {
        check_derivative("sin(x)*cos(x)", [0.0, 0.5, 1.0, 2.0]);
        check_derivative("tan(x)", [0.0, 0.5, 1.0]);
    }

    #[test]
    fn logarithmic_derivative_matches_finite_difference() {
        check_derivative("ln(x^2+1)", [0.5, 1.0, 3.0]);
        check_derivative("x^x", [0.5, 1.0, 2.0]);
    }

    #[test]
    fn quotient_derivative_matches_finite_difference() {
        check_derivative("(x+1)/(x^2+1)", [0.0, 1.0, 2.0]);
    }
}
