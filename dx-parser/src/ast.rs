//! The [`Token`] tree shared by every component of the kernel.
//!
//! # Immutability and sharing
//!
//! A [`Token`] tree is never mutated after construction. Every transformation (differentiation,
//! simplification) builds new nodes, cloning the subtrees it leaves untouched. Because there is no
//! write path, independent trees (even trees cloned from common subtrees) can be processed from
//! multiple threads without locking.
//!
//! # Strict equality
//!
//! The derived [`PartialEq`] implements structural equality, which is convenient for tests. The
//! simplification engine does **not** use it: its equality oracle is the canonical stringified
//! text (see the [`Display`](std::fmt::Display) impl), which is unambiguous because every binary
//! node is parenthesized unconditionally.

/// A node of the expression tree, one variant per construct.
///
/// The five binary variants own exactly two children and the five unary function variants own
/// exactly one; a well-formed tree is finite and acyclic by construction. [`Token::Constant`]
/// holds a finite IEEE double for any tree built by the parser, though constant folding of
/// `Divide` / `Power` can legally produce `inf` or `NaN`, and consumers must tolerate this.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// The variable of the function, always written `x`.
    Variable,

    /// The constant `pi`.
    Pi,

    /// Euler's number `e`.
    E,

    /// A numeric literal, such as `2` or `3.14`.
    Constant(f64),

    /// The sum of two subtrees.
    Add(Box<Token>, Box<Token>),

    /// The difference of two subtrees.
    Subtract(Box<Token>, Box<Token>),

    /// The product of two subtrees.
    Multiply(Box<Token>, Box<Token>),

    /// The quotient of two subtrees.
    Divide(Box<Token>, Box<Token>),

    /// The left subtree raised to the power of the right subtree.
    Power(Box<Token>, Box<Token>),

    /// The sine of the argument.
    Sin(Box<Token>),

    /// The cosine of the argument.
    Cos(Box<Token>),

    /// The tangent of the argument.
    Tan(Box<Token>),

    /// The natural logarithm of the argument.
    Ln(Box<Token>),

    /// The absolute value of the argument.
    Abs(Box<Token>),
}

impl Token {
    /// If this node is a [`Token::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Token::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this node is a [`Token::Constant`] with exactly the given value.
    pub fn is_constant(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }
}
