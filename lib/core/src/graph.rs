// Dense weighted digraph with per-node predecessor lists
use crate::{Error, Result};

pub type NodeId = usize;
pub type Weight = i64;

/// Weight stored in the table for "no edge".
pub const NO_EDGE: Weight = 0;

/// A directed, weighted graph backed by a dense N×N weight table.
///
/// Alongside the table every node keeps the list of its predecessors, i.e. the
/// nodes with a nonzero-weight edge pointing into it. Predecessors are recorded
/// while scanning the matrix row by row, so each list is in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    predecessors: Vec<Vec<NodeId>>,
    weights: Vec<Weight>,
}

impl Graph {
    /// Build a graph from a flattened, row-major N×N weight matrix.
    pub fn from_matrix(node_count: usize, weights: Vec<Weight>) -> Result<Self> {
        let expected = node_count
            .checked_mul(node_count)
            .ok_or_else(|| Error::InvalidMatrix(format!("node count {} is too large", node_count)))?;
        if weights.len() != expected {
            return Err(Error::InvalidMatrix(format!(
                "expected {} weights for {} nodes, got {}",
                expected,
                node_count,
                weights.len()
            )));
        }

        let mut predecessors = vec![Vec::new(); node_count];
        for from in 0..node_count {
            let row = &weights[from * node_count..(from + 1) * node_count];
            for (to, &weight) in row.iter().enumerate() {
                if weight != NO_EDGE {
                    predecessors[to].push(from);
                }
            }
        }

        Ok(Self {
            node_count,
            predecessors,
            weights,
        })
    }

    /// Build a graph from matrix rows. Every row must have one entry per row.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let node_count = rows.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != node_count) {
            return Err(Error::InvalidMatrix(format!(
                "row {} has {} entries, expected {}",
                index,
                row.len(),
                node_count
            )));
        }
        Self::from_matrix(node_count, rows.into_iter().flatten().collect())
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of nonzero entries in the weight table
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.predecessors.iter().map(Vec::len).sum()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.node_count
    }

    /// Nodes with a direct nonzero-weight edge into `id`, in recording order.
    #[inline]
    pub fn predecessors(&self, id: NodeId) -> Result<&[NodeId]> {
        self.check(id)?;
        Ok(&self.predecessors[id])
    }

    /// Weight of the edge `from -> to`, or [`NO_EDGE`] when there is none.
    #[inline]
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Result<Weight> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.weights[from * self.node_count + to])
    }

    #[inline]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> Result<bool> {
        Ok(self.edge_weight(from, to)? != NO_EDGE)
    }

    #[inline]
    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                id,
                node_count: self.node_count,
            })
        }
    }
}
