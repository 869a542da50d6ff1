//! undigraph — generic in-memory undirected, unweighted graph.
//!
//! Vertices hold caller-supplied values and live in a flat owned arena;
//! edges are symmetric id pairs recorded in both endpoints' adjacency
//! lists. On top of the mutation operations the crate offers value-based
//! lookup, depth-first reachability testing, and whole-graph undirected
//! cycle detection.
//!
//! ```
//! use undigraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//!
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//!
//! assert!(graph.path_exists(a, c));
//! assert!(!graph.has_cycle());
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{has_cycle, path_exists, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Vertex, VertexId};
