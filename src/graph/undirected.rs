//! Core graph structure — an owned vertex arena with id-pair edges.

use std::ops::{Index, IndexMut};

use log::debug;

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

use super::traversal;

/// A generic, in-memory, undirected, unweighted graph.
///
/// Vertices live in a flat owned collection; an edge is a pair of id
/// entries, one in each endpoint's adjacency list. Self-loops and parallel
/// edges are permitted. All operations are synchronous and single-threaded;
/// traversals take `&self` and keep their marking state call-local, so the
/// graph is never left with traversal residue.
#[derive(Debug)]
pub struct Graph<T> {
    /// All vertices, in insertion order.
    vertices: Vec<Vertex<T>>,
    /// Next id to assign. Never decreases, even across removals.
    next_id: u64,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            next_id: 0,
        }
    }

    /// Bulk construction: one vertex per value (ids assigned in order,
    /// starting at zero), then every edge in `edges`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if an edge names an id that
    /// no value produced; nothing is returned in that case.
    pub fn from_parts(values: Vec<T>, edges: Vec<(VertexId, VertexId)>) -> GraphResult<Self> {
        let mut graph = Self::new();
        for value in values {
            graph.add_vertex(value);
        }
        for (a, b) in edges {
            if !graph.contains(a) {
                return Err(GraphError::VertexNotFound(a));
            }
            if !graph.contains(b) {
                return Err(GraphError::VertexNotFound(b));
            }
            graph.add_edge(a, b);
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges. Each undirected edge counts once, as does each
    /// self-loop; parallel edges count once per copy.
    pub fn edge_count(&self) -> usize {
        // Every edge contributes exactly two adjacency entries: one per
        // endpoint list, or two in the same list for a self-loop.
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Position of `id` in the vertex collection.
    fn position(&self, id: VertexId) -> Option<usize> {
        // Fast path: until something is removed, slot index == id.
        let idx = id.0 as usize;
        if idx < self.vertices.len() && self.vertices[idx].id == id {
            return Some(idx);
        }
        // Fallback: linear scan (needed after remove_vertex)
        self.vertices.iter().position(|v| v.id == id)
    }

    /// Get a vertex by id (immutable).
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.position(id).map(|i| &self.vertices[i])
    }

    /// Get a vertex by id (mutable). Only the payload is mutable through
    /// the returned reference; identity and adjacency are not.
    pub fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.position(id).map(|i| &mut self.vertices[i])
    }

    /// True if `id` is a current member of the graph.
    pub fn contains(&self, id: VertexId) -> bool {
        self.position(id).is_some()
    }

    /// The adjacency list of `id`, or `None` if it is not a member.
    pub fn neighbors(&self, id: VertexId) -> Option<&[VertexId]> {
        self.get(id).map(Vertex::neighbors)
    }

    /// All vertices, in insertion order (immutable slice).
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Iterate over all vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// Add a fresh vertex holding `value`, returns the assigned id.
    ///
    /// The new vertex is appended at the end of the collection with an
    /// empty adjacency list.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.push(Vertex::new(id, value));
        debug!("added vertex {id}");
        id
    }

    /// Re-admit a previously removed vertex under its original id.
    ///
    /// Fails with [`GraphError::HasNeighbors`] if the vertex still carries
    /// its old adjacency snapshot (edges must be re-added after insertion),
    /// and with [`GraphError::DuplicateVertex`] if a vertex with the same
    /// id is already a member. No mutation is committed on failure.
    pub fn insert_vertex(&mut self, vertex: Vertex<T>) -> GraphResult<VertexId> {
        let id = vertex.id;
        if !vertex.neighbors.is_empty() {
            return Err(GraphError::HasNeighbors(id));
        }
        if self.contains(id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        // Keep the watermark above every id ever admitted so add_vertex
        // can never collide with a re-admitted one.
        self.next_id = self.next_id.max(id.0 + 1);
        self.vertices.push(vertex);
        debug!("re-admitted vertex {id}");
        Ok(id)
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Returns the detached vertex with its adjacency list as it stood at
    /// removal time, or `None` if `id` is not a member. Afterwards no
    /// remaining adjacency list mentions `id` — parallel copies and
    /// self-loops included.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let pos = self.position(id)?;
        let vertex = self.vertices.remove(pos);

        // The removed vertex's own list is the snapshot of its incident
        // edges; walking it (rather than the shrinking neighbor lists)
        // guarantees none are skipped.
        for &neighbor in &vertex.neighbors {
            if neighbor == id {
                continue; // self-loop entries left with the vertex
            }
            if let Some(other) = self.get_mut(neighbor) {
                other.neighbors.retain(|&n| n != id);
            }
        }

        debug!("removed vertex {id} with {} incident entries", vertex.degree());
        Some(vertex)
    }

    /// Drop all vertices and edges. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl<T: PartialEq> Graph<T> {
    /// Find the first vertex (in insertion order) whose value equals
    /// `value`, or `None` if no member matches.
    pub fn search(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertices.iter().find(|v| v.value == *value)
    }

    /// Remove the first vertex whose value equals `value`, plus every edge
    /// incident to it.
    ///
    /// Unlike [`remove_vertex`](Self::remove_vertex), a miss here is an
    /// error, not a silent no-op: fails with [`GraphError::ValueNotFound`].
    pub fn remove_vertex_by_value(&mut self, value: &T) -> GraphResult<Vertex<T>> {
        let id = self
            .search(value)
            .map(Vertex::id)
            .ok_or(GraphError::ValueNotFound)?;
        self.remove_vertex(id).ok_or(GraphError::ValueNotFound)
    }

    /// Add an edge between the first vertices holding `a` and `b`.
    ///
    /// A lookup miss on either value behaves as "not a member": returns
    /// false without mutating anything.
    pub fn add_edge_by_value(&mut self, a: &T, b: &T) -> bool {
        match (self.search(a).map(Vertex::id), self.search(b).map(Vertex::id)) {
            (Some(a), Some(b)) => self.add_edge(a, b),
            _ => false,
        }
    }

    /// Remove one edge between the first vertices holding `a` and `b`.
    /// Returns false on a lookup miss, a non-member, or a missing edge.
    pub fn remove_edge_by_value(&mut self, a: &T, b: &T) -> bool {
        match (self.search(a).map(Vertex::id), self.search(b).map(Vertex::id)) {
            (Some(a), Some(b)) => self.remove_edge(a, b),
            _ => false,
        }
    }
}

impl<T> Graph<T> {
    /// Add an undirected edge between `a` and `b`.
    ///
    /// Returns false (no-op) if either endpoint is not a member. On
    /// success each id is appended to the other's adjacency list — for a
    /// self-loop, twice to the one list — and duplicates are not checked:
    /// calling twice records a parallel edge.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }

        if let Some(vertex) = self.get_mut(a) {
            vertex.neighbors.push(b);
        }
        if let Some(vertex) = self.get_mut(b) {
            vertex.neighbors.push(a);
        }

        debug!("added edge {a} -- {b}");
        true
    }

    /// Remove one edge between `a` and `b`.
    ///
    /// Returns false if either endpoint is not a member or `b` is not
    /// currently in `a`'s adjacency list. On success exactly one
    /// occurrence is removed from each side, so one copy of a parallel
    /// edge survives; a self-loop loses both of its entries.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }

        let removed_from_a = match self.get_mut(a) {
            Some(vertex) => match vertex.neighbors.iter().position(|&n| n == b) {
                Some(pos) => {
                    vertex.neighbors.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        };
        if !removed_from_a {
            return false;
        }

        // Symmetry invariant: the mirror entry always exists once the
        // forward entry did.
        if let Some(vertex) = self.get_mut(b) {
            if let Some(pos) = vertex.neighbors.iter().position(|&n| n == a) {
                vertex.neighbors.remove(pos);
            }
        }

        debug!("removed edge {a} -- {b}");
        true
    }

    /// True iff `end` is reachable from `start` via edges.
    /// See [`traversal::path_exists`].
    pub fn path_exists(&self, start: VertexId, end: VertexId) -> bool {
        traversal::path_exists(self, start, end)
    }

    /// True iff the graph contains a cycle, in any component.
    /// See [`traversal::has_cycle`].
    pub fn has_cycle(&self) -> bool {
        traversal::has_cycle(self)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Positional access into the vertex collection, in insertion order.
impl<T> Index<usize> for Graph<T> {
    type Output = Vertex<T>;

    fn index(&self, index: usize) -> &Vertex<T> {
        &self.vertices[index]
    }
}

/// Positional mutable access. Only the payload is mutable through a
/// `&mut Vertex<T>`; ids and adjacency lists cannot be touched, so
/// positional writes cannot break the edge-symmetry invariant.
impl<T> IndexMut<usize> for Graph<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vertex<T> {
        &mut self.vertices[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_watermark_survives_removal_and_reinsert() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");

        let removed = graph.remove_vertex(a).unwrap();
        graph.insert_vertex(removed).unwrap();

        // A fresh vertex must not collide with either existing id.
        let c = graph.add_vertex("c");
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn position_fallback_after_removal() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);

        // Removing the first vertex shifts the others off the fast path.
        graph.remove_vertex(a).unwrap();
        assert_eq!(graph.get(b).map(|v| *v.value()), Some(2));
        assert_eq!(graph.get(c).map(|v| *v.value()), Some(3));
        assert!(graph.get(a).is_none());
    }
}
