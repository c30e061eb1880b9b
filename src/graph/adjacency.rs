//! Sparse graph representation backed by per-vertex successor maps

use std::collections::HashMap;

use crate::graph::{check_count, check_edge, check_vertex, Graph, VertexData};
use crate::Result;

/// Adjacency-list graph: one successor→weight map per vertex.
///
/// O(V+E) space. Out-degree and successor queries read a single map;
/// in-degree and predecessor queries scan every vertex.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<HashMap<usize, f64>>,
    vertex_data: VertexData,
}

impl AdjacencyListGraph {
    pub fn new(vertex_count: usize) -> Result<Self> {
        check_count(vertex_count)?;
        Ok(Self {
            vertex_count,
            edge_count: 0,
            adjacency: vec![HashMap::new(); vertex_count],
            vertex_data: VertexData::default(),
        })
    }
}

impl Graph for AdjacencyListGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        check_vertex(u, self.vertex_count)?;
        check_vertex(v, self.vertex_count)?;
        Ok(self.adjacency[u].contains_key(&v))
    }

    fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_edge(u, v, self.vertex_count)?;
        if !self.adjacency[u].contains_key(&v) {
            self.adjacency[u].insert(v, 0.0);
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_edge(u, v, self.vertex_count)?;
        if self.adjacency[u].remove(&v).is_some() {
            self.edge_count -= 1;
        }
        Ok(())
    }

    fn in_degree(&self, u: usize) -> Result<usize> {
        check_vertex(u, self.vertex_count)?;
        Ok(self
            .adjacency
            .iter()
            .filter(|targets| targets.contains_key(&u))
            .count())
    }

    fn out_degree(&self, u: usize) -> Result<usize> {
        check_vertex(u, self.vertex_count)?;
        Ok(self.adjacency[u].len())
    }

    fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        check_edge(u, v, self.vertex_count)?;
        if !self.adjacency[u].contains_key(&v) {
            self.edge_count += 1;
        }
        self.adjacency[u].insert(v, weight);
        Ok(())
    }

    fn edge_weight(&self, u: usize, v: usize) -> Result<f64> {
        check_edge(u, v, self.vertex_count)?;
        Ok(self.adjacency[u].get(&v).copied().unwrap_or(0.0))
    }

    fn successors(&self, v: usize) -> Result<Vec<usize>> {
        check_vertex(v, self.vertex_count)?;
        let mut targets: Vec<usize> = self.adjacency[v].keys().copied().collect();
        targets.sort_unstable();
        Ok(targets)
    }

    fn predecessors(&self, v: usize) -> Result<Vec<usize>> {
        check_vertex(v, self.vertex_count)?;
        Ok((0..self.vertex_count)
            .filter(|&u| self.adjacency[u].contains_key(&v))
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
