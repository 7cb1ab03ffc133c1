//! Expression representation, validation and parsing for the dx-rs calculus kernel.
//!
//! The central type of this crate (and the crates built on top of it) is [`Token`](ast::Token), a
//! tree representing a single-variable real function such as `x^2 + sin(2x)`. This crate provides
//! the three components that move expressions between text and trees:
//!
//! - [`validate`](validate::validate) performs cheap, tree-free sanity checks on raw input
//!   (bracket balance, character whitelist, operator adjacency, decimal placement) and produces
//!   descriptive, recoverable errors.
//! - [`Parser`](parser::Parser) turns text into a [`Token`](ast::Token) tree using a
//!   precedence-tiered, bracket-level-aware string-splitting strategy (there is no separate
//!   tokenizer).
//! - The [`Display`](std::fmt::Display) implementation on [`Token`](ast::Token) renders the
//!   canonical, fully-parenthesized text form, which doubles as the equality oracle used by the
//!   simplification fixpoint driver in `dx-compute`.
//!
//! The validator and the parser are deliberately independent: passing one does not guarantee
//! passing the other, and callers are expected to run both.

pub mod ast;
pub mod error;
mod fmt;
pub mod parser;
pub mod validate;

pub use ast::Token;
pub use parser::Parser;
