use crate::graph::{Graph, NodeId, Weight};
use crate::path::Path;
use crate::{Error, Result};
use tracing::{debug, trace, warn};

/// Configuration for a shortest-path engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fail with `CycleDetected` when the recursion re-enters a node that is
    /// still being solved. Without it a cycle reachable backwards from the
    /// destination recurses until the stack is exhausted.
    pub visitation_guard: bool,
    /// Treat a computed path that revisits a node as a failure instead of a
    /// logged diagnostic.
    pub strict_cycles: bool,
    /// Upper bound on recursion depth, counted from the destination.
    pub max_depth: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visitation_guard: true,
            strict_cycles: false,
            max_depth: None,
        }
    }
}

impl EngineConfig {
    /// Settings reproducing the unguarded recursion
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            visitation_guard: false,
            ..Self::default()
        }
    }
}

/// Best known path from one fixed source to every node solved so far.
///
/// Entries are written once; a later insert for the same node keeps the
/// existing value. Only meaningful for the query that created it.
struct PathCache {
    entries: Vec<Option<Path>>,
    on_stack: Vec<bool>,
    stack: Vec<NodeId>,
}

impl PathCache {
    fn new(node_count: usize) -> Self {
        Self {
            entries: vec![None; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
        }
    }

    #[inline]
    fn get(&self, id: NodeId) -> Option<&Path> {
        self.entries[id].as_ref()
    }

    #[inline]
    fn insert(&mut self, id: NodeId, path: Path) -> &Path {
        self.entries[id].get_or_insert(path)
    }

    fn take(&mut self, id: NodeId) -> Option<Path> {
        self.entries[id].take()
    }

    /// Mark `id` as in progress. Returns false if it already was.
    fn enter(&mut self, id: NodeId) -> bool {
        if self.on_stack[id] {
            return false;
        }
        self.on_stack[id] = true;
        self.stack.push(id);
        true
    }

    fn leave(&mut self, id: NodeId) {
        self.on_stack[id] = false;
        if self.stack.last() == Some(&id) {
            self.stack.pop();
        }
    }

    /// In-progress chain from the first visit of `id` back to `id`
    fn cycle_through(&self, id: NodeId) -> Vec<NodeId> {
        let start = self.stack.iter().position(|&n| n == id).unwrap_or(0);
        let mut cycle = self.stack[start..].to_vec();
        cycle.push(id);
        cycle
    }
}

/// Memoized backward search over predecessor lists.
///
/// The best path to a node is the best path to one of its predecessors plus the
/// connecting edge. Predecessors are solved recursively on demand and memoized
/// per query. Among equally cheap predecessors the first in list order wins.
///
/// Correct for graphs where no cycle is reachable backwards from the
/// destination. Cycles are not corrected for: with the visitation guard they
/// are reported as `CycleDetected`, without it the recursion does not
/// terminate.
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
    config: EngineConfig,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, EngineConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: EngineConfig) -> Self {
        Self { graph, config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Minimum-weight path from `source` to `dest`, or `Path::Unreachable`.
    pub fn find_shortest(&self, source: NodeId, dest: NodeId) -> Result<Path> {
        self.graph.check(source)?;
        self.graph.check(dest)?;
        debug!("Finding shortest path from {} to {}", source, dest);

        let mut cache = PathCache::new(self.graph.node_count());
        self.solve(source, dest, &mut cache, 0)?;
        let path = cache.take(dest).unwrap_or(Path::Unreachable);

        debug!("Shortest path from {} to {}: {}", source, dest, path);
        Ok(path)
    }

    /// Solve `node` relative to `source`, caching the result. Returns the
    /// cost of the cached path, `None` when `node` is unreachable.
    fn solve(
        &self,
        source: NodeId,
        node: NodeId,
        cache: &mut PathCache,
        depth: usize,
    ) -> Result<Option<Weight>> {
        if node == source {
            return Ok(cache.insert(node, Path::trivial(source)).cost());
        }
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(Error::DepthExceeded { limit });
            }
        }
        if self.config.visitation_guard && !cache.enter(node) {
            let path = cache.cycle_through(node);
            warn!("Recursion re-entered node {} along {:?}", node, path);
            return Err(Error::CycleDetected { path });
        }

        let mut best: Option<(NodeId, Weight)> = None;
        for &pred in self.graph.predecessors(node)? {
            let cached = cache.get(pred).map(Path::cost);
            let pred_cost = match cached {
                Some(cost) => cost,
                None => self.solve(source, pred, cache, depth + 1)?,
            };
            let Some(pred_cost) = pred_cost else {
                continue;
            };
            let total = pred_cost + self.graph.edge_weight(pred, node)?;
            if best.map_or(true, |(_, best_total)| total < best_total) {
                best = Some((pred, total));
            }
        }

        let path = match best {
            None => Path::Unreachable,
            Some((pred, _)) => {
                let weight = self.graph.edge_weight(pred, node)?;
                let path = cache
                    .get(pred)
                    .map_or(Path::Unreachable, |p| p.extend(node, weight));
                if path.revisits_last() {
                    warn!(
                        "Path to node {} revisits it, a negative cycle is reachable: {:?}",
                        node,
                        path.nodes()
                    );
                    if self.config.strict_cycles {
                        return Err(Error::CycleDetected {
                            path: path.nodes().to_vec(),
                        });
                    }
                }
                path
            }
        };

        if self.config.visitation_guard {
            cache.leave(node);
        }
        trace!("Solved node {}: {}", node, path);
        Ok(cache.insert(node, path).cost())
    }
}

/// Shortest path from `source` to `dest` with the default engine settings.
pub fn find_shortest(graph: &Graph, source: NodeId, dest: NodeId) -> Result<Path> {
    ShortestPathEngine::new(graph).find_shortest(source, dest)
}
