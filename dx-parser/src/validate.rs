//! Tree-free sanity checks on raw input.
//!
//! [`validate`] catches the common slips a user makes while typing an expression and reports them
//! with a descriptive, recoverable error, without ever building a tree. It is **not** a
//! substitute for the parser: the two are independent checks, and passing one does not guarantee
//! passing the other. Callers should run [`validate`] first for its friendlier diagnostics, then
//! [`Parser::parse`](crate::parser::Parser::parse).

use crate::error::{
    MisarrangedBrackets,
    MisplacedDecimalPoint,
    MisusedOperators,
    UnrecognisedCharacters,
};
use dx_error::Error;

/// The reserved words of the grammar, skipped over by the character whitelist check.
pub const RESERVED_WORDS: &[&str] = &["sin", "cos", "tan", "abs", "ln", "pi", "e"];

/// Every character allowed outside of the reserved words.
const VALID_CHARACTERS: &str = "0123456789.x+-*/^() ";

/// The binary operator characters, used by the adjacency check.
const OPERATORS: &[u8] = b"^*/+-";

/// Checks the given input for misarranged brackets, unrecognised characters, adjacent operators
/// and misplaced decimal points, in that order. Returns the first problem found.
pub fn validate(input: &str) -> Result<(), Error> {
    check_brackets(input)?;
    check_characters(input)?;
    check_operators(input)?;
    check_decimal_points(input)
}

/// Every `(` must have a matching `)` after it, and vice versa.
fn check_brackets(input: &str) -> Result<(), Error> {
    let mut open_spans = Vec::new();
    for (i, byte) in input.bytes().enumerate() {
        match byte {
            b'(' => open_spans.push(i),
            b')' => {
                if open_spans.pop().is_none() {
                    return Err(Error::new(vec![i..i + 1], MisarrangedBrackets { unclosed: false }));
                }
            },
            _ => (),
        }
    }

    match open_spans.pop() {
        Some(i) => Err(Error::new(vec![i..i + 1], MisarrangedBrackets { unclosed: true })),
        None => Ok(()),
    }
}

/// Walks the input, skipping over reserved words, and rejects the first character outside the
/// whitelist.
fn check_characters(input: &str) -> Result<(), Error> {
    let mut i = 0;
    'input: while i < input.len() {
        let rest = &input[i..];
        for word in RESERVED_WORDS {
            if rest.starts_with(word) {
                i += word.len();
                continue 'input;
            }
        }

        let Some(c) = rest.chars().next() else { break };
        if !VALID_CHARACTERS.contains(c) {
            return Err(Error::new(
                vec![i..i + c.len_utf8()],
                UnrecognisedCharacters { offending: c },
            ));
        }
        i += c.len_utf8();
    }

    Ok(())
}

/// Two or more of `^*/+-` in a row is always a mistake.
fn check_operators(input: &str) -> Result<(), Error> {
    let bytes = input.as_bytes();
    for i in 1..bytes.len() {
        if OPERATORS.contains(&bytes[i - 1]) && OPERATORS.contains(&bytes[i]) {
            return Err(Error::new(vec![i - 1..i + 1], MisusedOperators));
        }
    }

    Ok(())
}

/// A `.` must have a digit immediately before and after it, and a single numeric run may contain
/// at most one of them.
fn check_decimal_points(input: &str) -> Result<(), Error> {
    let bytes = input.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] != b'.' {
            continue;
        }

        let digit_before = i.checked_sub(1).is_some_and(|j| bytes[j].is_ascii_digit());
        let digit_after = bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
        if !digit_before || !digit_after {
            return Err(Error::new(vec![i..i + 1], MisplacedDecimalPoint));
        }
    }

    // two dots within one numeric run, such as `1.2.3`
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'.' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'.' {
                return Err(Error::new(vec![i..j + 1], MisplacedDecimalPoint));
            }
            i = j;
        } else {
            i += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::*;
    use super::*;

    /// Validates the input and asserts that it fails with the error kind `K`.
    fn assert_invalid<K: 'static>(input: &str) {
        let err = validate(input).expect_err("input should be invalid");
        assert!(
            err.kind.as_any().downcast_ref::<K>().is_some(),
            "wrong error kind for {:?}: {:?}",
            input,
            err.kind,
        );
    }

    #[test]
    fn accepts_reasonable_input() {
        for input in [
            "x^2 + 5x + 6",
            "sin(x) * cos(x)",
            "2pi",
            "ln(abs(x))",
            "2.5x / (x - 1)",
            "e^x",
        ] {
            assert!(validate(input).is_ok(), "{:?} should validate", input);
        }
    }

    #[test]
    fn misarranged_brackets() {
        assert_invalid::<MisarrangedBrackets>("(x+1");
        assert_invalid::<MisarrangedBrackets>("x+1)");
        assert_invalid::<MisarrangedBrackets>(")(");
        assert_invalid::<MisarrangedBrackets>("((x)");
    }

    #[test]
    fn unrecognised_characters() {
        assert_invalid::<UnrecognisedCharacters>("x + y");
        assert_invalid::<UnrecognisedCharacters>("2x!");
        assert_invalid::<UnrecognisedCharacters>("sec(x)");
    }

    #[test]
    fn abs_is_reserved() {
        // `a`, `b` and `s` are not whitelisted characters, so this only passes because the word
        // `abs` is skipped as a unit
        assert!(validate("abs(x)").is_ok());
    }

    #[test]
    fn incorrect_operators() {
        assert_invalid::<MisusedOperators>("x++1");
        assert_invalid::<MisusedOperators>("x*-1");
        assert_invalid::<MisusedOperators>("x^/2");
    }

    #[test]
    fn incorrect_decimal_points() {
        assert_invalid::<MisplacedDecimalPoint>(".5");
        assert_invalid::<MisplacedDecimalPoint>("5.");
        assert_invalid::<MisplacedDecimalPoint>("1..2");
        assert_invalid::<MisplacedDecimalPoint>("1.2.3");
        assert_invalid::<MisplacedDecimalPoint>("x + . + 1");
    }
}
