//! Dense graph representation backed by adjacency and weight matrices

use ndarray::Array2;

use crate::graph::{check_count, check_edge, check_vertex, Graph, VertexData};
use crate::Result;

/// Adjacency-matrix graph: existence and weights in separate V×V arrays.
///
/// O(V²) space, O(1) edge lookup. Weight storage is independent of edge
/// existence; removing an edge zeroes its weight slot.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Array2<bool>,
    weights: Array2<f64>,
    vertex_data: VertexData,
}

impl AdjacencyMatrixGraph {
    pub fn new(vertex_count: usize) -> Result<Self> {
        check_count(vertex_count)?;
        Ok(Self {
            vertex_count,
            edge_count: 0,
            adjacency: Array2::from_elem((vertex_count, vertex_count), false),
            weights: Array2::zeros((vertex_count, vertex_count)),
            vertex_data: VertexData::default(),
        })
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        Ok(self.adjacency[[u, v]])
    }

    fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_edge(u, v, self.vertex_count)?;
        if !self.adjacency[[u, v]] {
            self.adjacency[[u, v]] = true;
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_edge(u, v, self.vertex_count)?;
        if self.adjacency[[u, v]] {
            self.adjacency[[u, v]] = false;
            self.weights[[u, v]] = 0.0;
            self.edge_count -= 1;
        }
        Ok(())
    }

    fn in_degree(&self, u: usize) -> Result<usize> {
        check_vertex(u, self.vertex_count)?;
        Ok(self.adjacency.column(u).iter().filter(|&&e| e).count())
    }

    fn out_degree(&self, u: usize) -> Result<usize> {
        check_vertex(u, self.vertex_count)?;
        Ok(self.adjacency.row(u).iter().filter(|&&e| e).count())
    }

    fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        check_edge(u, v, self.vertex_count)?;
        if !self.adjacency[[u, v]] {
            self.adjacency[[u, v]] = true;
            self.edge_count += 1;
        }
        self.weights[[u, v]] = weight;
        Ok(())
    }

    fn edge_weight(&self, u: usize, v: usize) -> Result<f64> {
        check_edge(u, v, self.vertex_count)?;
        if !self.adjacency[[u, v]] {
            return Ok(0.0);
        }
        Ok(self.weights[[u, v]])
    }

    fn successors(&self, v: usize) -> Result<Vec<usize>> {
        check_vertex(v, self.vertex_count)?;
        Ok(self
            .adjacency
            .row(v)
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(target, _)| target)
            .collect())
    }

    fn predecessors(&self, v: usize) -> Result<Vec<usize>> {
        check_vertex(v, self.vertex_count)?;
        Ok(self
            .adjacency
            .column(v)
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(source, _)| source)
            .collect())
    }

    fn set_vertex_label(&mut self, v: usize, label: &str) -> Result<()> {
        check_vertex(v, self.vertex_count)?;
        self.vertex_data.set_label(v, label);
        Ok(())
    }

    fn vertex_label(&self, v: usize) -> Result<String> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.vertex_data.label(v))
    }

    fn set_vertex_weight(&mut self, v: usize, weight: f64) -> Result<()> {
        check_vertex(v, self.vertex_count)?;
        self.vertex_data.set_weight(v, weight);
        Ok(())
    }

    fn vertex_weight(&self, v: usize) -> Result<f64> {
        check_vertex(v, self.vertex_count)?;
        Ok(self.vertex_data.weight(v))
    }
}
