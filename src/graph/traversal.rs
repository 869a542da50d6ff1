//! Graph traversal algorithms: reachability (DFS) and cycle detection.
//!
//! Both algorithms keep their marking state in a call-local set keyed by
//! [`VertexId`], so they take `&self` graphs, are reentrant, and leave no
//! residue on the vertices between calls.

use std::collections::HashSet;

use log::trace;

use crate::types::VertexId;

use super::Graph;

/// Depth-first reachability test with an explicit stack.
///
/// Returns true iff `end` is reachable from `start` via edges; `start ==
/// end` is trivially reachable. Either endpoint missing from the graph
/// means no path. Vertices are marked visited when pushed, so each is
/// stacked at most once and the walk is O(V + E).
pub fn path_exists<T>(graph: &Graph<T>, start: VertexId, end: VertexId) -> bool {
    if !graph.contains(start) || !graph.contains(end) {
        return false;
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        if current == end {
            return true;
        }
        trace!("dfs visiting {current}");

        if let Some(neighbors) = graph.neighbors(current) {
            for &neighbor in neighbors {
                // insert() is false for already-marked vertices, which
                // also swallows duplicate adjacency entries.
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    false
}

/// Whether the graph contains a cycle: a simple closed path of length >= 3
/// on distinct vertices using distinct edges.
///
/// Every component is inspected, so a cycle in a disconnected part of the
/// graph is still found. Under the length >= 3 definition a lone self-loop
/// and a lone parallel-edge pair are NOT cycles; detection therefore runs
/// on the underlying simple graph (duplicate adjacency entries and own-id
/// entries are ignored).
pub fn has_cycle<T>(graph: &Graph<T>) -> bool {
    let mut visited: HashSet<VertexId> = HashSet::new();

    for vertex in graph.vertices() {
        if visited.contains(&vertex.id()) {
            continue;
        }
        if component_has_cycle(graph, vertex.id(), &mut visited) {
            return true;
        }
    }

    false
}

/// DFS one component from `root`, tracking each vertex's tree parent.
/// A visited neighbor that is neither the parent nor a duplicate sighting
/// closes a path of length >= 3 back into the tree.
fn component_has_cycle<T>(
    graph: &Graph<T>,
    root: VertexId,
    visited: &mut HashSet<VertexId>,
) -> bool {
    let mut stack: Vec<(VertexId, Option<VertexId>)> = vec![(root, None)];
    visited.insert(root);

    while let Some((current, parent)) = stack.pop() {
        trace!("cycle check at {current}");

        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };

        // Collapse to the simple graph: each distinct neighbor once.
        let mut seen_here: HashSet<VertexId> = HashSet::new();
        for &neighbor in neighbors {
            if neighbor == current || !seen_here.insert(neighbor) {
                continue; // self-loop or parallel copy
            }
            if Some(neighbor) == parent {
                continue; // the edge we arrived on
            }
            if visited.insert(neighbor) {
                stack.push((neighbor, Some(current)));
            } else {
                // Already reached another way: a back edge.
                return true;
            }
        }
    }

    false
}
