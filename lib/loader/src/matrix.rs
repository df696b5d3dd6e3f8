use shortpath_core::{Error, Graph, Result, Weight};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// Guards the initial allocation against absurd node counts in the header
const MAX_PREALLOCATED_WEIGHTS: usize = 1 << 16;

/// A graph stored as a text weight matrix.
///
/// The file holds whitespace-separated integers: the node count `N`, then the
/// `N × N` edge weights in row-major order, `0` meaning "no edge".
pub struct MatrixFile {
    path: PathBuf,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file into a graph
    pub fn load(&self) -> Result<Graph> {
        let data = std::fs::read_to_string(&self.path)?;
        let graph = parse_matrix(&data)?;
        info!(
            "Loaded graph from {:?}: {} nodes, {} edges",
            self.path,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Shorthand for `MatrixFile::new(path).load()`
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    MatrixFile::new(path).load()
}

/// Parse a weight matrix from text. Tokens after the `N × N` block are ignored.
pub fn parse_matrix(input: &str) -> Result<Graph> {
    let mut tokens = input.split_whitespace().enumerate();

    let (position, first) = tokens
        .next()
        .ok_or_else(|| Error::InvalidMatrix("missing node count".to_string()))?;
    let node_count: usize = first.parse().map_err(|_| Error::Parse {
        position,
        token: first.to_string(),
    })?;
    let expected = node_count.checked_mul(node_count).ok_or_else(|| {
        Error::InvalidMatrix(format!("node count {} is too large", node_count))
    })?;

    let mut weights = Vec::with_capacity(expected.min(MAX_PREALLOCATED_WEIGHTS));
    for (position, token) in tokens.by_ref().take(expected) {
        let weight = token.parse::<Weight>().map_err(|_| Error::Parse {
            position,
            token: token.to_string(),
        })?;
        weights.push(weight);
    }
    if weights.len() < expected {
        return Err(Error::Truncated {
            expected,
            found: weights.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(
            "Ignoring {} trailing tokens after the {}x{} weight matrix",
            trailing, node_count, node_count
        );
    }

    debug!("Parsed {}x{} weight matrix", node_count, node_count);
    Graph::from_matrix(node_count, weights)
}
