use std::fmt::{Display, Formatter};

/// Identifies a node within a single [`Fragment`]. Ids start at 1.
pub type NodeId = usize;

/// What an edge consumes.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// A free transition.
    Epsilon,
    /// A transition consuming the literal.
    Literal(String),
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Literal(l) => write!(f, "{l}"),
        }
    }
}

/// A directed, labeled edge between two nodes of the same fragment.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub origin: NodeId,
    pub dest: NodeId,
    pub label: Label,
}

impl Edge {
    pub fn new(origin: NodeId, dest: NodeId, label: Label) -> Self {
        Self {
            origin,
            dest,
            label,
        }
    }

    pub fn epsilon(origin: NodeId, dest: NodeId) -> Self {
        Self::new(origin, dest, Label::Epsilon)
    }

    pub fn literal(origin: NodeId, dest: NodeId, text: impl Into<String>) -> Self {
        Self::new(origin, dest, Label::Literal(text.into()))
    }

    /// Returns this edge with both endpoints shifted by `offset`.
    pub(crate) fn shifted(&self, offset: usize) -> Self {
        Self::new(self.origin + offset, self.dest + offset, self.label.clone())
    }
}

/// A piece of an NFA: nodes numbered `1..=n` and the edges between them.
///
/// Node `1` is the only start state and node `n` the only accept state.
/// Fragments are created and combined by [`FragmentBuilder`](crate::FragmentBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) edges: Vec<Edge>,
}

impl Fragment {
    pub(crate) fn from_parts(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
        let fragment = Self { nodes, edges };
        fragment.debug_check();
        fragment
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn accept(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns true if the node ids are exactly `1..=n`, in order,
    /// and every edge stays within them.
    pub fn is_dense(&self) -> bool {
        self.nodes.iter().copied().eq(1..=self.nodes.len())
            && self.edges.iter().all(|e| {
                (1..=self.nodes.len()).contains(&e.origin)
                    && (1..=self.nodes.len()).contains(&e.dest)
            })
    }

    pub(crate) fn debug_check(&self) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.nodes.is_empty(), "fragment without nodes");
            assert!(self.is_dense(), "fragment node ids are not dense: {self:?}");
        }
    }
}
