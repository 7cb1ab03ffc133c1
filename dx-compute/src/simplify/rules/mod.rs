//! The per-variant rewrite rules applied by [`simplify`](super::simplify).
//!
//! Each function here handles one binary (or `ln`) variant: it tries that variant's algebraic
//! identities in a fixed order and, if none fire, rebuilds the node around its simplified
//! children. The functions re-enter [`simplify`](super::simplify) on subtrees, so the order of
//! the checks within each function is observable behavior.

pub mod add;
pub mod multiply;
pub mod power;
