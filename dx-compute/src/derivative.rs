//! The differentiation rule engine.
//!
//! [`derivative`] is total over all well-formed [`Token`]s: the match below covers every variant,
//! and adding a new variant without a rule fails to compile. Each rule appends a [`Step`]
//! describing itself **before** recursing into the subtrees, so the trace reads top-down in
//! pre-order; the step descriptions interpolate the canonical text of the pre-differentiation
//! subtrees, not the derivatives.

use crate::step_collector::StepCollector;
use dx_parser::ast::Token;

/// A single recorded differentiation rule application.
///
/// Steps are a byproduct of [`derivative`] and have no lifecycle of their own; the presentation
/// layer renders them and throws them away.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// A short name for the rule that was applied.
    pub title: String,

    /// The rule instantiated with the subtrees it was applied to.
    pub description: String,
}

impl Step {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

/// Computes the derivative of the given expression with respect to `x`, returning the derivative
/// tree together with the ordered trace of rules applied.
///
/// Both outputs come from one traversal. Callers that want the tree *and* the steps must use this
/// single call; recomputing one of them separately risks the two going out of sync.
pub fn differentiate(expr: &Token) -> (Token, Vec<Step>) {
    let mut steps = Vec::new();
    let derivative = derivative(expr, &mut steps);
    (derivative, steps)
}

/// Computes the derivative of the given expression with respect to `x`, pushing a [`Step`] into
/// the collector for each rule applied. Pass `&mut ()` to skip step construction entirely.
pub fn derivative(expr: &Token, steps: &mut dyn StepCollector<Step>) -> Token {
    match expr {
        Token::Variable => {
            steps.push(Step::new("Differentiate x", "d/dx(x) = 1"));
            Token::Constant(1.0)
        },
        Token::Constant(_) | Token::Pi | Token::E => {
            let name = match expr {
                Token::Pi => "pi",
                Token::E => "e",
                _ => "constant",
            };
            steps.push(Step::new(
                format!("Differentiate {name}"),
                format!("d/dx({expr}) = 0"),
            ));
            Token::Constant(0.0)
        },
        Token::Add(left, right) => {
            steps.push(Step::new(
                "Splitting the derivative across the addition",
                format!("d/dx({u} + {v}) = d/dx({u}) + d/dx({v})", u = left, v = right),
            ));
            let (du, dv) = (derivative(left, steps), derivative(right, steps));
            Token::Add(Box::new(du), Box::new(dv))
        },
        Token::Subtract(left, right) => {
            steps.push(Step::new(
                "Splitting the derivative across the subtraction",
                format!("d/dx({u} - {v}) = d/dx({u}) - d/dx({v})", u = left, v = right),
            ));
            let (du, dv) = (derivative(left, steps), derivative(right, steps));
            Token::Subtract(Box::new(du), Box::new(dv))
        },
        Token::Multiply(left, right) => {
            steps.push(Step::new(
                "Using product rule",
                format!("d/dx({u} * {v}) = d/dx({u}) * {v} + {u} * d/dx({v})", u = left, v = right),
            ));
            let (du, dv) = (derivative(left, steps), derivative(right, steps));
            // u*v' + u'*v
            Token::Add(
                Box::new(Token::Multiply(left.clone(), Box::new(dv))),
                Box::new(Token::Multiply(Box::new(du), right.clone())),
            )
        },
        Token::Divide(left, right) => {
            steps.push(Step::new(
                "Using quotient rule",
                format!("d/dx({u}/{v}) = (d/dx({u}) * {v} - {u} * d/dx({v})) / {v}^2", u = left, v = right),
            ));
            let (du, dv) = (derivative(left, steps), derivative(right, steps));
            // (u'*v - u*v') / v^2
            Token::Divide(
                Box::new(Token::Subtract(
                    Box::new(Token::Multiply(Box::new(du), right.clone())),
                    Box::new(Token::Multiply(left.clone(), Box::new(dv))),
                )),
                Box::new(Token::Power(right.clone(), Box::new(Token::Constant(2.0)))),
            )
        },
        Token::Sin(argument) => {
            steps.push(Step::new(
                "Differentiate sin + chain rule",
                format!("d/dx(sin({u})) = cos({u}) * d/dx({u})", u = argument),
            ));
            let du = derivative(argument, steps);
            Token::Multiply(Box::new(Token::Cos(argument.clone())), Box::new(du))
        },
        Token::Cos(argument) => {
            steps.push(Step::new(
                "Differentiate cos + chain rule",
                format!("d/dx(cos({u})) = -sin({u}) * d/dx({u})", u = argument),
            ));
            let du = derivative(argument, steps);
            Token::Multiply(
                Box::new(Token::Subtract(
                    Box::new(Token::Constant(0.0)),
                    Box::new(Token::Sin(argument.clone())),
                )),
                Box::new(du),
            )
        },
        Token::Tan(argument) => {
            // there is no secant variant, so sec(u)^2 is written cos(u)^-2
            steps.push(Step::new(
                "Differentiate tan + chain rule",
                format!("d/dx(tan({u})) = cos({u})^-2 * d/dx({u})", u = argument),
            ));
            let du = derivative(argument, steps);
            Token::Multiply(
                Box::new(Token::Power(
                    Box::new(Token::Cos(argument.clone())),
                    Box::new(Token::Constant(-2.0)),
                )),
                Box::new(du),
            )
        },
        Token::Ln(argument) => {
            steps.push(Step::new(
                "Differentiate ln + chain rule",
                format!("d/dx(ln({u})) = d/dx({u}) / {u}", u = argument),
            ));
            let du = derivative(argument, steps);
            Token::Divide(Box::new(du), argument.clone())
        },
        Token::Power(left, right) => power_rule(left, right, steps),

        // the derivative of the argument, with no sign factor applied; this is a known
        // approximation, wrong for negative arguments
        Token::Abs(argument) => derivative(argument, steps),
    }
}

/// `x^n` for constant `n` uses the monomial power rule; any other base / exponent combination
/// falls back to logarithmic differentiation.
fn power_rule(left: &Token, right: &Token, steps: &mut dyn StepCollector<Step>) -> Token {
    if let (Token::Variable, Token::Constant(n)) = (left, right) {
        steps.push(Step::new(
            "Differentiate power rule",
            format!("d/dx(x^{n}) = {n}x^{}", n - 1.0),
        ));
        return Token::Multiply(
            Box::new(Token::Constant(*n)),
            Box::new(Token::Power(
                Box::new(Token::Variable),
                Box::new(Token::Constant(n - 1.0)),
            )),
        );
    }

    // u^v = e^(v ln u), so (u^v)' = u^v * (v' ln(u) + (v/u) u')
    steps.push(Step::new(
        "Differentiate exponentiation rule",
        format!("d/dx({u}^{v}) = {u}^{v} * (d/dx({v}) * ln({u}) + {v}/{u} * d/dx({u}))", u = left, v = right),
    ));
    let (du, dv) = (derivative(left, steps), derivative(right, steps));
    Token::Multiply(
        Box::new(Token::Power(Box::new(left.clone()), Box::new(right.clone()))),
        Box::new(Token::Add(
            Box::new(Token::Multiply(Box::new(dv), Box::new(Token::Ln(Box::new(left.clone()))))),
            Box::new(Token::Multiply(
                Box::new(Token::Divide(Box::new(right.clone()), Box::new(left.clone()))),
                Box::new(du),
            )),
        )),
    )
}
