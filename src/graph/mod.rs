//! Directed weighted graph representations and construction

pub mod adjacency;
pub mod builder;
pub mod matrix;

pub use adjacency::AdjacencyListGraph;
pub use builder::GraphBuilder;
pub use matrix::AdjacencyMatrixGraph;

use std::collections::{HashMap, VecDeque};

use crate::error::GraphError;
use crate::Result;

/// Construction-time choice of graph storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Successor maps per vertex; O(V+E) space, in-degree by scan
    AdjacencyList,
    /// Dense boolean matrix; O(V²) space, O(1) edge lookup
    AdjacencyMatrix,
}

/// Create an empty graph with `vertex_count` vertices in the chosen representation
pub fn new_graph(representation: Representation, vertex_count: usize) -> Result<Box<dyn Graph>> {
    Ok(match representation {
        Representation::AdjacencyList => Box::new(AdjacencyListGraph::new(vertex_count)?),
        Representation::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::new(vertex_count)?),
    })
}

/// Contract shared by every graph representation.
///
/// Vertices are dense ids in `[0, vertex_count)`, fixed at construction. Edges
/// are directed, simple (no self-loops, at most one per ordered pair), and
/// carry an `f64` weight that defaults to 0.0. All algorithm code works
/// against `&dyn Graph`; the representation stays invisible past construction.
pub trait Graph: Send + Sync + std::fmt::Debug {
    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Whether the edge (u, v) exists
    fn has_edge(&self, u: usize, v: usize) -> Result<bool>;

    /// Insert the edge (u, v) with weight 0.0; a no-op if already present
    fn add_edge(&mut self, u: usize, v: usize) -> Result<()>;

    /// Remove the edge (u, v) and reset its weight; a no-op if absent
    fn remove_edge(&mut self, u: usize, v: usize) -> Result<()>;

    fn in_degree(&self, u: usize) -> Result<usize>;

    fn out_degree(&self, u: usize) -> Result<usize>;

    /// Set the weight of (u, v), creating the edge if absent
    fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64) -> Result<()>;

    /// Weight of (u, v), or 0.0 when the edge is absent
    fn edge_weight(&self, u: usize, v: usize) -> Result<f64>;

    /// Targets of edges leaving `v`, in ascending id order
    fn successors(&self, v: usize) -> Result<Vec<usize>>;

    /// Sources of edges entering `v`, in ascending id order
    fn predecessors(&self, v: usize) -> Result<Vec<usize>>;

    fn set_vertex_label(&mut self, v: usize, label: &str) -> Result<()>;

    /// Display label of `v`, defaulting to `"V<id>"`
    fn vertex_label(&self, v: usize) -> Result<String>;

    fn set_vertex_weight(&mut self, v: usize, weight: f64) -> Result<()>;

    /// Scalar weight of `v`, defaulting to 0.0
    fn vertex_weight(&self, v: usize) -> Result<f64>;

    fn is_successor(&self, u: usize, v: usize) -> Result<bool> {
        self.has_edge(u, v)
    }

    fn is_predecessor(&self, u: usize, v: usize) -> Result<bool> {
        self.has_edge(v, u)
    }

    /// Whether (u1, v1) and (u2, v2) are present, share their source, and
    /// diverge to distinct targets
    fn is_divergent(&self, u1: usize, v1: usize, u2: usize, v2: usize) -> Result<bool> {
        for id in [u1, v1, u2, v2] {
            check_vertex(id, self.vertex_count())?;
        }
        Ok(u1 == u2 && v1 != v2 && self.has_edge(u1, v1)? && self.has_edge(u2, v2)?)
    }

    /// Whether (u1, v1) and (u2, v2) are present, share their target, and
    /// converge from distinct sources
    fn is_convergent(&self, u1: usize, v1: usize, u2: usize, v2: usize) -> Result<bool> {
        for id in [u1, v1, u2, v2] {
            check_vertex(id, self.vertex_count())?;
        }
        Ok(v1 == v2 && u1 != u2 && self.has_edge(u1, v1)? && self.has_edge(u2, v2)?)
    }

    /// Whether the edge (u, v) exists and touches vertex `x`
    fn is_incident(&self, u: usize, v: usize, x: usize) -> Result<bool> {
        check_vertex(x, self.vertex_count())?;
        Ok(self.has_edge(u, v)? && (u == x || v == x))
    }

    /// Weak connectivity: every vertex reachable from vertex 0 when edge
    /// direction is ignored. An edgeless graph is vacuously connected.
    fn is_connected(&self) -> Result<bool> {
        if self.edge_count() == 0 {
            return Ok(true);
        }
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);
        while let Some(v) = queue.pop_front() {
            for u in self.successors(v)?.into_iter().chain(self.predecessors(v)?) {
                if !visited[u] {
                    visited[u] = true;
                    queue.push_back(u);
                }
            }
        }
        Ok(visited.into_iter().all(|seen| seen))
    }

    fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    /// Whether every ordered pair of distinct vertices carries an edge
    fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.edge_count() == n * (n - 1)
    }
}

/// Labels and scalar weights shared by both representations
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexData {
    labels: HashMap<usize, String>,
    weights: HashMap<usize, f64>,
}

impl VertexData {
    pub(crate) fn label(&self, v: usize) -> String {
        self.labels
            .get(&v)
            .cloned()
            .unwrap_or_else(|| format!("V{v}"))
    }

    pub(crate) fn set_label(&mut self, v: usize, label: &str) {
        self.labels.insert(v, label.to_string());
    }

    pub(crate) fn weight(&self, v: usize) -> f64 {
        self.weights.get(&v).copied().unwrap_or(0.0)
    }

    pub(crate) fn set_weight(&mut self, v: usize, weight: f64) {
        self.weights.insert(v, weight);
    }
}

pub(crate) fn check_count(vertex_count: usize) -> Result<()> {
    if vertex_count == 0 {
        return Err(GraphError::InvalidConfiguration);
    }
    Ok(())
}

pub(crate) fn check_vertex(v: usize, vertex_count: usize) -> Result<()> {
    if v >= vertex_count {
        return Err(GraphError::InvalidVertex {
            vertex: v,
            vertex_count,
        });
    }
    Ok(())
}

/// Validate both endpoints and reject self-loops
pub(crate) fn check_edge(u: usize, v: usize, vertex_count: usize) -> Result<()> {
    check_vertex(u, vertex_count)?;
    check_vertex(v, vertex_count)?;
    if u == v {
        return Err(GraphError::InvalidEdge(u));
    }
    Ok(())
}
