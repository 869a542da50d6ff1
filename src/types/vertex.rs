//! Vertex identity and the core vertex struct.

use std::fmt;

/// Opaque identifier for a vertex within one [`Graph`](crate::Graph).
///
/// Ids are assigned monotonically by the graph and never reused within a
/// graph instance, so an id stays valid across unrelated mutations and
/// identifies the same vertex for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    /// The raw numeric form of this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A graph vertex: a caller-supplied value plus its adjacency list.
///
/// The adjacency list is insertion-ordered and not deduplicated — parallel
/// edges appear once per copy, and a self-loop appears as two entries of the
/// vertex's own id. Vertices are created only by [`Graph::add_vertex`] and
/// leave the graph only through `remove_vertex`/`remove_vertex_by_value`,
/// which return the detached vertex with its final adjacency snapshot.
///
/// [`Graph::add_vertex`]: crate::Graph::add_vertex
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub(crate) id: VertexId,
    pub(crate) value: T,
    pub(crate) neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with an empty adjacency list (graph-internal).
    pub(crate) fn new(id: VertexId, value: T) -> Self {
        Self {
            id,
            value,
            neighbors: Vec::new(),
        }
    }

    /// The id this vertex is known by in its graph.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The caller-supplied payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload. Adjacency and identity stay intact.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The adjacency list, in edge-insertion order.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Degree: the number of adjacency entries. A self-loop counts twice,
    /// parallel edges once per copy.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Consume a detached vertex and take its payload.
    pub fn into_value(self) -> T {
        self.value
    }
}
