//! # shortpath
//!
//! Minimum-weight path queries over a directed graph given as a dense weight
//! matrix.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! shortpath graph.txt 0 2
//! ```
//!
//! where `graph.txt` holds the node count followed by the weight matrix:
//!
//! ```text
//! 3
//! 0 2 10
//! 0 0 3
//! 0 0 0
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use shortpath::prelude::*;
//!
//! let graph = parse_matrix("3  0 2 10  0 0 3  0 0 0").unwrap();
//! let path = ShortestPathEngine::new(&graph).find_shortest(0, 2).unwrap();
//! assert_eq!(path.to_string(), "0, 1, 2 (cost 5)");
//! ```
//!
//! ## Crate Structure
//!
//! - `shortpath-core` - Graph model, path values and the shortest-path engine
//! - `shortpath-loader` - Text weight-matrix parsing

pub mod output;

// Re-export core types
pub use shortpath_core::{
    find_shortest, EngineConfig, Error, Graph, NodeId, Path, Result, ShortestPathEngine, Weight,
    NO_EDGE,
};

// Re-export loading
pub use shortpath_loader::{load_graph, parse_matrix, MatrixFile};

pub use output::{render, OutputFormat};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        find_shortest, load_graph, parse_matrix, EngineConfig, Error, Graph, MatrixFile, NodeId,
        Path, Result, ShortestPathEngine, Weight,
    };
}
