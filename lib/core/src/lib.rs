//! # shortpath Core
//!
//! Core library for the shortpath query tool.
//!
//! This crate provides the graph model and the search:
//!
//! - [`Graph`] - Dense weight table with per-node predecessor lists
//! - [`Path`] - Query result, either a valid node sequence with its cost or `Unreachable`
//! - [`ShortestPathEngine`] - Predecessor-driven memoized shortest-path search
//!
//! ## Example
//!
//! ```rust
//! use shortpath_core::{find_shortest, Graph};
//!
//! let graph = Graph::from_rows(vec![
//!     vec![0, 2, 10],
//!     vec![0, 0, 3],
//!     vec![0, 0, 0],
//! ])
//! .unwrap();
//!
//! let path = find_shortest(&graph, 0, 2).unwrap();
//! assert_eq!(path.nodes(), &[0, 1, 2]);
//! assert_eq!(path.cost(), Some(5));
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod path;

pub use engine::{find_shortest, EngineConfig, ShortestPathEngine};
pub use error::{Error, Result};
pub use graph::{Graph, NodeId, Weight, NO_EDGE};
pub use path::Path;
