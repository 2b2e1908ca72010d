//! Thompson's construction over postfix regular expressions, one symbol at a time.
//!
//! A postfix expression such as `a b . *` is a sequence of [`Symbol`]s: literals and the
//! operators `.` (concatenation), `+` (one or more) and `*` (zero or more).
//! The [`ConstructionEngine`] keeps a stack of [`Fragment`]s, and reports a [`Snapshot`]
//! of the fragment affected by every symbol it consumes.

use thiserror::Error;

mod builder;
mod engine;
mod fragment;
mod stack;
mod symbol;

pub use builder::FragmentBuilder;
pub use engine::{
    construct, Construction, ConstructionEngine, EngineState, Snapshot, SnapshotKind,
};
pub use fragment::{Edge, Fragment, Label, NodeId};
pub use stack::ConstructionStack;
pub use symbol::{Operator, Symbol};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("`{operator}` at position {position} needs {required} fragment(s), but the stack holds {depth}")]
    Underflow {
        operator: Operator,
        position: usize,
        depth: usize,
        required: usize,
    },
    #[error("malformed postfix expression: {depth} fragments left on the stack instead of 1")]
    Malformed { depth: usize },
}

/// Splits whitespace separated tokens into symbols.
///
/// ```
/// # use postfix_nfa_construction::*;
/// assert_eq!(postfix("a 12 +"), [Symbol::from("a"), Symbol::from("12"), Symbol::from("+")]);
/// ```
pub fn postfix(input: impl AsRef<str>) -> Vec<Symbol> {
    input.as_ref().split_whitespace().map(Symbol::from).collect()
}
