//! Symbolic manipulation of [`Token`](dx_parser::Token) trees.
//!
//! # Differentiation
//!
//! [`differentiate`] computes the derivative of an expression with respect to `x` and, in the
//! same single traversal, records a human-readable trail of the rules it applied:
//!
//! ```
//! use dx_compute::{differentiate, simplify_full};
//! use dx_parser::Parser;
//!
//! let tree = Parser::new("x^2").parse().unwrap();
//! let (derivative, steps) = differentiate(&tree);
//!
//! assert_eq!(simplify_full(&derivative).to_string(), "(2*x)");
//! assert_eq!(steps.len(), 1);
//! ```
//!
//! The derivative tree and the step trace are two views of one computation; callers that need
//! both must call [`differentiate`] once rather than recomputing.
//!
//! # Simplification
//!
//! [`simplify`] performs **one** rewrite pass over a tree. A single pass can produce a tree on
//! which further rules now apply, so the canonical way to fully reduce an expression is
//! [`simplify_full`], which drives [`simplify`] to a fixpoint: it stops once two consecutive
//! results render to the same canonical text, then applies one extra pass. Both the fixpoint
//! driver and the simplifier's self-difference / self-quotient rules compare trees by their
//! canonical stringified text, never structurally.
//!
//! Everything in this crate is a pure, deterministic function over immutable trees; nothing here
//! performs I/O, blocks, or shares mutable state between invocations.

pub mod derivative;
pub mod eval;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, differentiate, Step};
pub use eval::eval;
pub use simplify::{simplify, simplify_full};
pub use step_collector::StepCollector;
