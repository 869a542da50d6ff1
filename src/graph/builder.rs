//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`] in one shot.
///
/// Vertices are staged first and hand back the ids the built graph will
/// use; edges may reference any staged id. [`build`](Self::build) validates
/// every staged edge endpoint and fails atomically if one is unknown.
pub struct GraphBuilder<T> {
    values: Vec<T>,
    edges: Vec<(VertexId, VertexId)>,
    next_id: u64,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            edges: Vec::new(),
            next_id: 0,
        }
    }

    /// Stage a vertex, returning the id it will hold in the built graph.
    pub fn vertex(&mut self, value: T) -> VertexId {
        // Mirrors the graph's own assignment order, so staged ids line up
        // with from_parts.
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.values.push(value);
        id
    }

    /// Stage an undirected edge between two staged vertices.
    pub fn edge(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final graph. Fails with
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
    /// if a staged edge names an unknown id.
    pub fn build(self) -> GraphResult<Graph<T>> {
        Graph::from_parts(self.values, self.edges)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
