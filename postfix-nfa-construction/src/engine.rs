//! Drives Thompson's construction over a postfix expression.
//!
//! The [`ConstructionEngine`] consumes one symbol per step and yields a [`Snapshot`] of the
//! fragment that step touched. Snapshots are plain values; rendering them is up to the caller.

use crate::stack::ConstructionStack;
use crate::symbol::{Operator, Symbol};
use crate::{ConstructionError, Fragment, FragmentBuilder};

/// What produced a [`Snapshot`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SnapshotKind {
    Literal,
    Plus,
    Star,
    Concat,
}

/// The fragment affected by a single construction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Position of the step, starting at 0.
    pub index: usize,
    pub kind: SnapshotKind,
    pub title: String,
    pub fragment: Fragment,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Processing,
    Done,
}

/// A single construction run over a sequence of symbols.
///
/// Iterating the engine performs one step per symbol. After the first error,
/// the engine is done and yields nothing else.
///
/// ```
/// # use postfix_nfa_construction::*;
/// let symbols = postfix("a b . *");
/// let mut engine = ConstructionEngine::new(&symbols);
///
/// let titles: Vec<_> = engine
///     .by_ref()
///     .map(|step| step.map(|s| s.title))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(titles, ["Graph for a", "Graph for b", "Concat operation", "Graph for ."]);
///
/// let nfa = engine.finish().unwrap();
/// assert_eq!(nfa.node_count(), 7);
/// ```
pub struct ConstructionEngine<'s> {
    symbols: &'s [Symbol],
    position: usize,
    stack: ConstructionStack,
    state: EngineState,
    error: Option<ConstructionError>,
}

impl<'s> ConstructionEngine<'s> {
    pub fn new(symbols: &'s [Symbol]) -> Self {
        Self {
            symbols,
            position: 0,
            stack: ConstructionStack::new(),
            state: EngineState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of symbols processed so far.
    pub fn step_index(&self) -> usize {
        self.position
    }

    pub fn stack(&self) -> &ConstructionStack {
        &self.stack
    }

    /// Runs the remaining steps and returns the NFA for the whole expression.
    pub fn finish(mut self) -> Result<Fragment, ConstructionError> {
        for step in self.by_ref() {
            step?;
        }
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        self.stack
            .into_single()
            .map_err(|depth| ConstructionError::Malformed { depth })
    }

    fn step(&mut self, symbol: &Symbol) -> Result<Snapshot, ConstructionError> {
        let index = self.position;
        let symbols = self.symbols;

        let (kind, title, fragment) = match symbol.operator() {
            None => {
                let fragment = FragmentBuilder::literal(symbol);
                self.stack.push(fragment.clone());
                (SnapshotKind::Literal, graph_title(symbol), fragment)
            }
            Some(op @ (Operator::Plus | Operator::Star)) => {
                let previous = index
                    .checked_sub(1)
                    .and_then(|i| symbols.get(i))
                    .ok_or_else(|| self.underflow(op, 1))?;
                let depth = self.stack.depth();
                let top = self
                    .stack
                    .peek_mut()
                    .ok_or(ConstructionError::Underflow {
                        operator: op,
                        position: index,
                        depth,
                        required: 1,
                    })?;

                let kind = if op == Operator::Plus {
                    FragmentBuilder::plus(top);
                    SnapshotKind::Plus
                } else {
                    FragmentBuilder::star(top);
                    SnapshotKind::Star
                };
                (kind, graph_title(previous), top.clone())
            }
            Some(Operator::Concat) => {
                let (lower, upper) = self
                    .stack
                    .pop_pair()
                    .ok_or_else(|| self.underflow(Operator::Concat, 2))?;
                let fragment = FragmentBuilder::concat(lower, upper);
                self.stack.push(fragment.clone());
                (SnapshotKind::Concat, "Concat operation".to_string(), fragment)
            }
        };

        log::debug!(
            "step {index}: `{symbol}` -> {kind:?} fragment with {} nodes, {} edges (stack depth {})",
            fragment.node_count(),
            fragment.edges().len(),
            self.stack.depth()
        );

        Ok(Snapshot {
            index,
            kind,
            title,
            fragment,
        })
    }

    fn underflow(&self, operator: Operator, required: usize) -> ConstructionError {
        ConstructionError::Underflow {
            operator,
            position: self.position,
            depth: self.stack.depth(),
            required,
        }
    }
}

fn graph_title(symbol: &Symbol) -> String {
    format!("Graph for {}", symbol.text())
}

impl Iterator for ConstructionEngine<'_> {
    type Item = Result<Snapshot, ConstructionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == EngineState::Done {
            return None;
        }

        let symbols = self.symbols;
        let Some(symbol) = symbols.get(self.position) else {
            self.state = EngineState::Done;
            return None;
        };
        self.state = EngineState::Processing;

        match self.step(symbol) {
            Ok(snapshot) => {
                self.position += 1;
                Some(Ok(snapshot))
            }
            Err(e) => {
                log::debug!("construction failed: {e}");
                self.state = EngineState::Done;
                self.error = Some(e.clone());
                Some(Err(e))
            }
        }
    }
}

/// The outcome of a complete construction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// One snapshot per symbol, in processing order.
    pub snapshots: Vec<Snapshot>,
    /// The NFA for the whole expression.
    pub nfa: Fragment,
}

/// Runs Thompson's construction over `symbols` to completion.
pub fn construct(symbols: &[Symbol]) -> Result<Construction, ConstructionError> {
    let mut engine = ConstructionEngine::new(symbols);
    let snapshots = engine.by_ref().collect::<Result<Vec<_>, _>>()?;
    let nfa = engine.finish()?;

    log::info!(
        "constructed NFA with {} nodes from {} symbols",
        nfa.node_count(),
        symbols.len()
    );

    Ok(Construction { snapshots, nfa })
}
