//! Creation and composition of [`Fragment`]s.
//!
//! A literal `s` becomes the fragment
//!
//! ```text
//!      ε      s      ε
//!   1 ---> 2 ---> 3 ---> 4
//! ```
//!
//! Operators then either add edges to an existing fragment (`+`, `*`)
//! or merge two fragments into one (`.`).

use crate::fragment::{Edge, Fragment};
use crate::Symbol;

/// Builds and combines fragments following Thompson's construction.
pub struct FragmentBuilder;

impl FragmentBuilder {
    /// The canonical fragment for a literal: four nodes, three edges.
    pub fn literal(symbol: &Symbol) -> Fragment {
        Fragment::from_parts(
            vec![1, 2, 3, 4],
            vec![
                Edge::epsilon(1, 2),
                Edge::literal(2, 3, symbol.text()),
                Edge::epsilon(3, 4),
            ],
        )
    }

    /// One or more: loop from the inner exit back to the inner entry.
    ///
    /// Every fragment enters its core through `start -> start + 1` and leaves it through
    /// `accept - 1 -> accept`, so for a literal this adds `3 -> 2`.
    pub fn plus(fragment: &mut Fragment) -> &mut Fragment {
        let entry = fragment.start() + 1;
        let exit = fragment.accept() - 1;
        fragment.edges.push(Edge::epsilon(exit, entry));
        fragment.debug_check();
        fragment
    }

    /// Zero or more: [`plus`](FragmentBuilder::plus) and a bypass from start to accept.
    /// For a literal this adds `3 -> 2` and `1 -> 4`.
    pub fn star(fragment: &mut Fragment) -> &mut Fragment {
        Self::plus(fragment);
        let bypass = Edge::epsilon(fragment.start(), fragment.accept());
        fragment.edges.push(bypass);
        fragment.debug_check();
        fragment
    }

    /// Concatenates `upper` after `lower`.
    ///
    /// Lower's accept node is dropped. With `k` the remaining number of lower nodes,
    /// an ε-edge `k -> k + 1` is added and all of upper's nodes and edges are shifted by `k`.
    pub fn concat(lower: Fragment, upper: Fragment) -> Fragment {
        let Fragment {
            mut nodes,
            mut edges,
        } = lower;

        nodes.pop();
        let offset = nodes.len();

        edges.push(Edge::epsilon(offset, offset + 1));
        edges.extend(upper.edges.iter().map(|e| e.shifted(offset)));
        nodes.extend(upper.nodes.iter().map(|n| n + offset));

        Fragment::from_parts(nodes, edges)
    }
}
