//! The recursive string-splitting parser.
//!
//! There is no tokenizer. After a small preprocessing step, each recursive call scans the current
//! substring for a binary operator sitting at bracket-nesting level 0 and splits there, trying
//! four precedence tiers in order:
//!
//! 1. `+` / `-`, scanned right-to-left: splitting at the **rightmost** occurrence and recursing
//!    on both halves yields left-associativity (`a-b-c` parses as `(a-b)-c`). A `-` that is the
//!    first character, or that directly follows an operator or `(`, is unary and is rewritten as
//!    `(-1) * rest`.
//! 2. `*` / `/`, same rightmost-split rule.
//! 3. `^`, scanned left-to-right: splitting at the **leftmost** occurrence yields the
//!    conventional right-associativity (`a^b^c` parses as `a^(b^c)`).
//! 4. The unary-function / atom tier: a reserved function prefix (`sin`, `cos`, `tan`, `abs`,
//!    `ln`) applied to the remainder, a parenthesized group, or one of the atoms `x`, `pi`, `e`
//!    and `digits(.digits)?`.
//!
//! Failures anywhere in the recursion surface as a single [`Error`] from [`Parser::parse`]; the
//! parser never panics on malformed input.

use crate::ast::Token;
use crate::error::{EmptyExpression, NestingTooDeep, UnrecognisedAtom};
use dx_error::Error;

/// The maximum recursion depth of [`Parser::parse`].
///
/// Tree depth is bounded by input length, so without a limit an adversarial input like
/// `((((((...))))))` could exhaust the stack. Exceeding the limit is an ordinary parse error.
pub const MAX_DEPTH: usize = 256;

/// Rewrites the input into the form the tier scans expect: whitespace is stripped, implicit
/// multiplication between a digit and a following `e` / `pi` / `x` becomes explicit (`2x` →
/// `2*x`), and so does implied multiplication against an opening bracket (`2(` → `2*(`, `)(` →
/// `)*(`).
///
/// Spans carried by parse errors refer to this rewritten text, not the raw input.
pub fn preprocess(input: &str) -> String {
    let chars = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<Vec<_>>();

    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let Some(&next) = chars.get(i + 1) else { break };
        if c.is_ascii_digit() && matches!(next, 'e' | 'p' | 'x') {
            out.push('*');
        } else if (c.is_ascii_digit() || c == ')') && next == '(' {
            out.push('*');
        }
    }

    out
}

/// A parser for a single expression. This is the type to use to turn a piece of text into a
/// [`Token`] tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source text this parser will parse.
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Parses the source into a [`Token`] tree.
    pub fn parse(&self) -> Result<Token, Error> {
        let scrubbed = preprocess(self.source);
        expr(&scrubbed, 0, 0)
    }
}

/// Parses one substring of the preprocessed source. `offset` is the byte position of `s` within
/// the preprocessed text, used for error spans; `depth` counts recursive calls.
fn expr(s: &str, offset: usize, depth: usize) -> Result<Token, Error> {
    if depth > MAX_DEPTH {
        return Err(Error::new(
            vec![offset..offset + s.len()],
            NestingTooDeep { limit: MAX_DEPTH },
        ));
    }

    let bytes = s.as_bytes();

    // tier 1: rightmost level-0 `+` or `-`
    //
    // scanning backwards, `(` raises the level and `)` lowers it, so the inside of a bracket
    // group sits at a negative level and is skipped
    let mut level = 0i32;
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'(' => level += 1,
            b')' => level -= 1,
            _ => (),
        }
        if level != 0 {
            continue;
        }

        match bytes[i] {
            b'+' => {
                return Ok(Token::Add(
                    Box::new(expr(&s[..i], offset, depth + 1)?),
                    Box::new(expr(&s[i + 1..], offset + i + 1, depth + 1)?),
                ));
            },
            b'-' => {
                // a `-` at the start, or directly after an operator or `(`, negates what follows
                if i == 0 || matches!(bytes[i - 1], b'-' | b'*' | b'/' | b'^' | b'(') {
                    return Ok(Token::Multiply(
                        Box::new(Token::Constant(-1.0)),
                        Box::new(expr(&s[i + 1..], offset + i + 1, depth + 1)?),
                    ));
                }
                return Ok(Token::Subtract(
                    Box::new(expr(&s[..i], offset, depth + 1)?),
                    Box::new(expr(&s[i + 1..], offset + i + 1, depth + 1)?),
                ));
            },
            _ => (),
        }
    }

    // tier 2: rightmost level-0 `*` or `/`
    level = 0;
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'(' => level += 1,
            b')' => level -= 1,
            _ => (),
        }
        if level != 0 {
            continue;
        }

        match bytes[i] {
            b'*' => {
                return Ok(Token::Multiply(
                    Box::new(expr(&s[..i], offset, depth + 1)?),
                    Box::new(expr(&s[i + 1..], offset + i + 1, depth + 1)?),
                ));
            },
            b'/' => {
                return Ok(Token::Divide(
                    Box::new(expr(&s[..i], offset, depth + 1)?),
                    Box::new(expr(&s[i + 1..], offset + i + 1, depth + 1)?),
                ));
            },
            _ => (),
        }
    }

    // tier 3: leftmost level-0 `^`, giving `a^b^c` = `a^(b^c)`
    level = 0;
    for i in 0..bytes.len() {
        match bytes[i] {
            b'(' => level += 1,
            b')' => level -= 1,
            b'^' if level == 0 => {
                return Ok(Token::Power(
                    Box::new(expr(&s[..i], offset, depth + 1)?),
                    Box::new(expr(&s[i + 1..], offset + i + 1, depth + 1)?),
                ));
            },
            _ => (),
        }
    }

    // tier 4: function application, bracketed group, or atom
    for (name, build) in FUNCTIONS {
        if let Some(rest) = s.strip_prefix(name) {
            let argument = expr(rest, offset + name.len(), depth + 1)?;
            return Ok(build(Box::new(argument)));
        }
    }

    if s.starts_with('(') && s.ends_with(')') {
        return expr(&s[1..s.len() - 1], offset + 1, depth + 1);
    }

    match s {
        "x" => Ok(Token::Variable),
        "pi" => Ok(Token::Pi),
        "e" => Ok(Token::E),
        "" => Err(Error::new(vec![offset..offset], EmptyExpression)),
        _ if is_numeric_literal(s) => s
            .parse()
            .map(Token::Constant)
            .map_err(|_| Error::new(vec![offset..offset + s.len()], UnrecognisedAtom)),
        _ => Err(Error::new(vec![offset..offset + s.len()], UnrecognisedAtom)),
    }
}

/// The reserved function prefixes, tried in order against the start of the remaining text.
const FUNCTIONS: &[(&str, fn(Box<Token>) -> Token)] = &[
    ("sin", Token::Sin),
    ("cos", Token::Cos),
    ("tan", Token::Tan),
    ("abs", Token::Abs),
    ("ln", Token::Ln),
];

/// Returns true if `s` matches `digits(.digits)?`.
fn is_numeric_literal(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (s, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use crate::error::*;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the input, panicking with the error kind on failure.
    fn parse(input: &str) -> Token {
        Parser::new(input)
            .parse()
            .unwrap_or_else(|err| panic!("{:?} should parse: {:?}", input, err.kind))
    }

    /// Parses the input and asserts that it fails with the error kind `K`.
    fn assert_parse_fails<K: 'static>(input: &str) {
        let err = Parser::new(input).parse().expect_err("input should fail to parse");
        assert!(
            err.kind.as_any().downcast_ref::<K>().is_some(),
            "wrong error kind for {:?}: {:?}",
            input,
            err.kind,
        );
    }

    #[test]
    fn atoms() {
        assert_eq!(parse("x"), Token::Variable);
        assert_eq!(parse("pi"), Token::Pi);
        assert_eq!(parse("e"), Token::E);
        assert_eq!(parse("42"), Token::Constant(42.0));
        assert_eq!(parse("3.14"), Token::Constant(3.14));
    }

    #[test]
    fn simple_power() {
        assert_eq!(parse("x^2"), Token::Power(
            Box::new(Token::Variable),
            Box::new(Token::Constant(2.0)),
        ));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(parse("x-1-2").to_string(), "((x-1)-2)");
        assert_eq!(parse("x/2/3").to_string(), "((x/2)/3)");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(parse("x^2^3").to_string(), "(x^(2^3))");
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("1+2*x^2").to_string(), "(1+(2*(x^2)))");
        assert_eq!(parse("x^2*2+1").to_string(), "(((x^2)*2)+1)");
    }

    #[test]
    fn unary_minus() {
        assert_eq!(parse("-x"), Token::Multiply(
            Box::new(Token::Constant(-1.0)),
            Box::new(Token::Variable),
        ));
        // the `-` after `(` is unary; the one after `2` is binary
        assert_eq!(parse("2-(-x)").to_string(), "(2-(-1*x))");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(parse("2x").to_string(), "(2*x)");
        assert_eq!(parse("2pi").to_string(), "(2*pi)");
        assert_eq!(parse("3e").to_string(), "(3*e)");
        assert_eq!(parse("2(x+1)").to_string(), parse("2*(x+1)").to_string());
        assert_eq!(parse("(x)(x)").to_string(), parse("x*x").to_string());
    }

    #[test]
    fn functions() {
        assert_eq!(parse("sin(x)"), Token::Sin(Box::new(Token::Variable)));
        assert_eq!(parse("cos(2x)").to_string(), "cos((2*x))");
        assert_eq!(parse("tan(x^2)").to_string(), "tan((x^2))");
        assert_eq!(parse("ln(abs(x))"), Token::Ln(Box::new(Token::Abs(Box::new(Token::Variable)))));
    }

    #[test]
    fn whitespace_is_ignored(){
        assert_eq!(parse(" x ^ 2 + 1 "), parse("x^2+1"));
    }

    #[test]
    fn function_argument_binds_tighter_than_addition() {
        // the `+` splits first, so only `x` is the sine argument
        assert_eq!(parse("sin(x)+1").to_string(), "(sin(x)+1)");
    }

    #[test]
    fn malformed_input() {
        assert_parse_fails::<EmptyExpression>("");
        assert_parse_fails::<EmptyExpression>("x+");
        assert_parse_fails::<EmptyExpression>("()");
        assert_parse_fails::<UnrecognisedAtom>("x2");
        assert_parse_fails::<UnrecognisedAtom>("foo");
        assert_parse_fails::<UnrecognisedAtom>("1.2.3");
    }

    #[test]
    fn nesting_limit() {
        let deep = format!("{}x{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_parse_fails::<NestingTooDeep>(&deep);

        let fine = format!("{}x{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(parse(&fine), Token::Variable);
    }

    #[test]
    fn round_trip_is_stable() {
        for input in ["x^2+5*x+6", "sin(2x)*cos(x)", "2.5x/(x-1)", "ln(x)/x^x", "abs(x-pi)"] {
            let once = parse(input).to_string();
            let twice = parse(&once).to_string();
            assert_eq!(once, twice, "round trip of {:?} is not stable", input);
        }
    }
}
