pub mod matrix;

pub use matrix::{load_graph, parse_matrix, MatrixFile};
