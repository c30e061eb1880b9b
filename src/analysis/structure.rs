//! Structural statistics over a read-only graph snapshot

use std::collections::{HashMap, VecDeque};

use itertools::Itertools;

use crate::graph::Graph;
use crate::Result;

/// Computes density, clustering, distance, and mixing statistics
pub struct StructuralAnalyzer<'a> {
    graph: &'a dyn Graph,
}

impl<'a> StructuralAnalyzer<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Self { graph }
    }

    /// |E| / (V·(V−1)); 0.0 for a single-vertex graph
    pub fn density(&self) -> f64 {
        let n = self.graph.vertex_count();
        if n <= 1 {
            return 0.0;
        }
        let max_edges = n * (n - 1);
        self.graph.edge_count() as f64 / max_edges as f64
    }

    /// Mean of the local clustering coefficients over all vertices; vertices
    /// with fewer than two neighbors contribute 0.0 and stay in the mean
    pub fn clustering_coefficient(&self) -> Result<f64> {
        let n = self.graph.vertex_count();
        let mut total = 0.0;
        for v in 0..n {
            total += self.local_clustering_coefficient(v)?;
        }
        Ok(total / n as f64)
    }

    /// Fraction of neighbor pairs of `v` connected by an edge in either
    /// direction, over C(k, 2) pairs of the deduplicated neighbor set
    pub fn local_clustering_coefficient(&self, v: usize) -> Result<f64> {
        let neighbors = self.neighbors(v)?;
        let k = neighbors.len();
        if k < 2 {
            return Ok(0.0);
        }

        let mut connected = 0usize;
        for (&u, &w) in neighbors.iter().tuple_combinations() {
            if self.graph.has_edge(u, w)? || self.graph.has_edge(w, u)? {
                connected += 1;
            }
        }

        let max_connections = k * (k - 1) / 2;
        Ok(connected as f64 / max_connections as f64)
    }

    /// Histogram of total degree (in + out) to vertex count
    pub fn degree_distribution(&self) -> Result<HashMap<usize, usize>> {
        let mut distribution = HashMap::new();
        for v in 0..self.graph.vertex_count() {
            let degree = self.graph.in_degree(v)? + self.graph.out_degree(v)?;
            *distribution.entry(degree).or_insert(0) += 1;
        }
        Ok(distribution)
    }

    /// Longest finite directed BFS distance over all source vertices;
    /// unreachable pairs are ignored, never treated as infinite
    pub fn diameter(&self) -> Result<usize> {
        let mut diameter = 0;
        for v in 0..self.graph.vertex_count() {
            for distance in self.bfs_distances(v)?.into_iter().flatten() {
                if distance > diameter {
                    diameter = distance;
                }
            }
        }
        Ok(diameter)
    }

    /// Mean over all finite positive directed distances; 0.0 when no vertex
    /// reaches another
    pub fn average_distance(&self) -> Result<f64> {
        let mut total = 0usize;
        let mut count = 0usize;
        for v in 0..self.graph.vertex_count() {
            for distance in self.bfs_distances(v)?.into_iter().flatten() {
                if distance > 0 {
                    total += distance;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return Ok(0.0);
        }
        Ok(total as f64 / count as f64)
    }

    /// Pearson correlation of (source degree, target degree) with one
    /// observation per directed edge; 0.0 on an edgeless graph or when either
    /// variance term vanishes
    pub fn assortativity(&self) -> Result<f64> {
        let n = self.graph.vertex_count();
        if self.graph.edge_count() == 0 {
            return Ok(0.0);
        }

        let mut degrees = vec![0usize; n];
        for v in 0..n {
            degrees[v] = self.graph.in_degree(v)? + self.graph.out_degree(v)?;
        }

        let mut sum_jk = 0.0;
        let mut sum_j = 0.0;
        let mut sum_k = 0.0;
        let mut sum_j2 = 0.0;
        let mut sum_k2 = 0.0;
        let mut edge_count = 0usize;

        for source in 0..n {
            for target in self.graph.successors(source)? {
                let j = degrees[source] as f64;
                let k = degrees[target] as f64;
                sum_jk += j * k;
                sum_j += j;
                sum_k += k;
                sum_j2 += j * j;
                sum_k2 += k * k;
                edge_count += 1;
            }
        }

        if edge_count == 0 {
            return Ok(0.0);
        }

        let m = edge_count as f64;
        let numerator = m * sum_jk - sum_j * sum_k;
        let variance_j = m * sum_j2 - sum_j * sum_j;
        let variance_k = m * sum_k2 - sum_k * sum_k;
        if variance_j <= 0.0 || variance_k <= 0.0 {
            return Ok(0.0);
        }

        let denominator = (variance_j * variance_k).sqrt();
        if denominator == 0.0 {
            return Ok(0.0);
        }
        Ok(numerator / denominator)
    }

    /// Deduplicated union of predecessors and successors, ascending
    fn neighbors(&self, v: usize) -> Result<Vec<usize>> {
        let mut neighbors = self.graph.successors(v)?;
        neighbors.extend(self.graph.predecessors(v)?);
        neighbors.sort_unstable();
        neighbors.dedup();
        Ok(neighbors)
    }

    /// Directed BFS distances from `source`; `None` marks unreachable vertices
    fn bfs_distances(&self, source: usize) -> Result<Vec<Option<usize>>> {
        let n = self.graph.vertex_count();
        let mut distances = vec![None; n];
        distances[source] = Some(0);

        let mut queue = VecDeque::new();
        queue.push_back((source, 0));
        while let Some((v, distance)) = queue.pop_front() {
            for u in self.graph.successors(v)? {
                if distances[u].is_none() {
                    distances[u] = Some(distance + 1);
                    queue.push_back((u, distance + 1));
                }
            }
        }

        Ok(distances)
    }
}
