use crate::graph::{NodeId, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a shortest-path query.
///
/// `Unreachable` is a first-class value and is never encoded as a cost. The
/// trivial path from a node to itself is `Valid` with one node and cost 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Path {
    Valid { nodes: Vec<NodeId>, cost: Weight },
    Unreachable,
}

impl Path {
    #[inline]
    #[must_use]
    pub fn trivial(id: NodeId) -> Self {
        Path::Valid {
            nodes: vec![id],
            cost: 0,
        }
    }

    /// Copy of this path with `id` appended over an edge of `weight`.
    /// Extending `Unreachable` yields `Unreachable`.
    #[must_use]
    pub fn extend(&self, id: NodeId, weight: Weight) -> Self {
        match self {
            Path::Valid { nodes, cost } => {
                let mut nodes = nodes.clone();
                nodes.push(id);
                Path::Valid {
                    nodes,
                    cost: cost + weight,
                }
            }
            Path::Unreachable => Path::Unreachable,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Path::Valid { .. })
    }

    /// Node sequence; empty for `Unreachable`
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        match self {
            Path::Valid { nodes, .. } => nodes,
            Path::Unreachable => &[],
        }
    }

    #[inline]
    #[must_use]
    pub fn cost(&self) -> Option<Weight> {
        match self {
            Path::Valid { cost, .. } => Some(*cost),
            Path::Unreachable => None,
        }
    }

    /// Number of edges traversed
    #[must_use]
    pub fn hops(&self) -> Option<usize> {
        match self {
            Path::Valid { nodes, .. } => Some(nodes.len().saturating_sub(1)),
            Path::Unreachable => None,
        }
    }

    /// True when the last node already occurs earlier in the sequence.
    ///
    /// Linear in the path length; only ever asked right after an extension.
    #[must_use]
    pub fn revisits_last(&self) -> bool {
        match self.nodes().split_last() {
            Some((last, rest)) => rest.contains(last),
            None => false,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Unreachable => write!(f, "No path exists."),
            Path::Valid { nodes, cost } => {
                let ids: Vec<String> = nodes.iter().map(ToString::to_string).collect();
                write!(f, "{} (cost {})", ids.join(", "), cost)
            }
        }
    }
}
