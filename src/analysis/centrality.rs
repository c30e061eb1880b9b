//! Vertex importance measures: degree, betweenness, closeness, PageRank

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::Result;

/// Centrality computations over one read-only snapshot.
///
/// In- and out-degree vectors are gathered once at construction so the
/// iterative algorithms never re-scan the graph for degrees.
pub struct CentralitySuite<'a> {
    graph: &'a dyn Graph,
    in_degrees: Vec<usize>,
    out_degrees: Vec<usize>,
}

impl<'a> CentralitySuite<'a> {
    pub fn new(graph: &'a dyn Graph) -> Result<Self> {
        let n = graph.vertex_count();
        let mut in_degrees = vec![0; n];
        let mut out_degrees = vec![0; n];
        for v in 0..n {
            in_degrees[v] = graph.in_degree(v)?;
            out_degrees[v] = graph.out_degree(v)?;
        }
        Ok(Self {
            graph,
            in_degrees,
            out_degrees,
        })
    }

    /// Total degree normalized by 2·(V−1); all zeros for a 1-vertex graph
    pub fn degree_centrality(&self) -> Vec<f64> {
        let n = self.graph.vertex_count();
        if n < 2 {
            return vec![0.0; n];
        }
        let norm = 2.0 * (n - 1) as f64;
        (0..n)
            .map(|v| (self.in_degrees[v] + self.out_degrees[v]) as f64 / norm)
            .collect()
    }

    /// Brandes betweenness over unweighted shortest paths, normalized by
    /// (V−1)(V−2) when V ≥ 3
    pub fn betweenness_centrality(&self) -> Result<Vec<f64>> {
        let n = self.graph.vertex_count();
        let mut centrality = vec![0.0; n];

        for s in 0..n {
            let mut stack = Vec::with_capacity(n);
            let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
            let mut path_counts = vec![0u64; n];
            let mut distances: Vec<Option<usize>> = vec![None; n];

            path_counts[s] = 1;
            distances[s] = Some(0);
            let mut queue = VecDeque::new();
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                stack.push(v);
                for w in self.graph.successors(v)? {
                    let next = distances[v].map(|d| d + 1);
                    if distances[w].is_none() {
                        distances[w] = next;
                        queue.push_back(w);
                    }
                    if distances[w] == next {
                        path_counts[w] += path_counts[v];
                        predecessors[w].push(v);
                    }
                }
            }

            // Dependency accumulation in reverse BFS order
            let mut dependency = vec![0.0; n];
            while let Some(w) = stack.pop() {
                for &v in &predecessors[w] {
                    let ratio = path_counts[v] as f64 / path_counts[w] as f64;
                    dependency[v] += ratio * (1.0 + dependency[w]);
                }
                if w != s {
                    centrality[w] += dependency[w];
                }
            }
        }

        if n >= 3 {
            let norm = ((n - 1) * (n - 2)) as f64;
            for score in &mut centrality {
                *score /= norm;
            }
        }

        Ok(centrality)
    }

    /// Reachability-weighted closeness: with R reachable vertices at summed
    /// distance S, the score is (R/S)·(R/(V−1)), and 0.0 when nothing is
    /// reachable. Intentionally not the classical (V−1)/S, which overrates
    /// vertices in small fragments.
    pub fn closeness_centrality(&self) -> Result<Vec<f64>> {
        let n = self.graph.vertex_count();
        let mut centrality = vec![0.0; n];

        for v in 0..n {
            let mut reachable = 0usize;
            let mut total_distance = 0usize;
            for distance in self.bfs_distances(v)?.into_iter().flatten() {
                if distance > 0 {
                    reachable += 1;
                    total_distance += distance;
                }
            }

            if total_distance > 0 && reachable > 0 {
                let closeness = reachable as f64 / total_distance as f64;
                centrality[v] = closeness * (reachable as f64 / (n - 1) as f64);
            }
        }

        Ok(centrality)
    }

    /// Synchronous PageRank: each pass reads only the previous pass's vector,
    /// and exactly `max_iterations` passes run. `tolerance` is accepted for
    /// convergence-minded callers but never stops iteration early. Vertices
    /// with no out-edges contribute nothing, so their mass drains rather than
    /// being redistributed.
    pub fn pagerank(
        &self,
        damping: f64,
        max_iterations: usize,
        _tolerance: f64,
    ) -> Result<Vec<f64>> {
        let n = self.graph.vertex_count();
        let mut ranks = vec![1.0 / n as f64; n];

        // Predecessor lists are stable across passes; gather them once.
        let incoming: Vec<Vec<usize>> = (0..n)
            .map(|v| self.graph.predecessors(v))
            .collect::<Result<_>>()?;

        for _ in 0..max_iterations {
            let mut next = vec![0.0; n];
            for v in 0..n {
                let mut sum = 0.0;
                for &u in &incoming[v] {
                    let out_degree = self.out_degrees[u];
                    if out_degree > 0 {
                        sum += ranks[u] / out_degree as f64;
                    }
                }
                next[v] = (1.0 - damping) / n as f64 + damping * sum;
            }
            ranks = next;
        }

        Ok(ranks)
    }

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

/// Rank vertices by score, descending, ties keeping ascending vertex order;
/// at most `n` entries
pub fn top_n(scores: &[f64], n: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}
