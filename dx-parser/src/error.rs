//! Error kinds produced by the validator and the parser.
//!
//! Each kind derives [`ErrorKind`](dx_error::ErrorKind) via `dx-attrs`, which builds the
//! [`ariadne`] report shown to the user. Validator kinds carry spans into the raw input; parser
//! kinds carry spans into the preprocessed text (see
//! [`preprocess`](crate::parser::preprocess)).

use dx_attrs::ErrorKind;
use dx_error::ErrorKind;

/// The brackets of the expression do not balance.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "misarranged brackets",
    label = if *unclosed {
        "this bracket is never closed"
    } else {
        "this bracket closes nothing"
    },
)]
pub struct MisarrangedBrackets {
    /// The error is an opening bracket with no matching closing bracket. (Otherwise, it is a
    /// closing bracket with no matching opening bracket.)
    pub unclosed: bool,
}

/// A character outside the accepted alphabet was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unrecognised character(s)",
    label = format!("`{}` is not allowed here", offending),
    help = "expressions may only contain digits, `.x+-*/^() ` and the words `sin cos tan ln abs pi e`",
)]
pub struct UnrecognisedCharacters {
    /// The first character that is not part of the accepted alphabet.
    pub offending: char,
}

/// Two or more operator characters appear consecutively.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "incorrect use of operators",
    label = "two or more operators in a row",
)]
pub struct MisusedOperators;

/// A decimal point is missing a digit on either side, or a numeric run contains two of them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "incorrect decimal point(s)",
    label = "this decimal point",
    help = "a decimal point must have a digit immediately before and after it",
)]
pub struct MisplacedDecimalPoint;

/// A sub-expression turned out to be empty, such as the right-hand side of `x+`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    label = "there should be an expression here",
)]
pub struct EmptyExpression;

/// The remaining text is not a number, `x`, `pi`, `e`, a function application or a bracketed
/// group.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unrecognised expression",
    label = "I could not understand this",
    help = "expected a number, `x`, `pi`, `e`, or one of `sin cos tan ln abs` applied to an argument",
)]
pub struct UnrecognisedAtom;

/// The expression nests deeper than the parser is willing to recurse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    label = "this expression",
    help = format!("the maximum nesting depth is {}", limit),
)]
pub struct NestingTooDeep {
    /// The depth limit that was exceeded.
    pub limit: usize,
}
