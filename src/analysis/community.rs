//! Greedy single-level community detection and partition quality measures

use std::collections::{HashMap, HashSet};

use crate::graph::Graph;
use crate::Result;

/// Minimum fraction of inter-community edge endpoints for a bridging tie
const BRIDGING_RATIO: f64 = 0.3;

/// Single-level greedy modularity optimizer.
///
/// Not two-phase Louvain: there is no aggregation step, and the gain formula
/// carries no term for the cost of leaving the current community. It
/// over-fragments sparse graphs, may keep shuffling dense symmetric
/// structures until the pass ceiling, and can report negative modularity.
pub struct CommunityDetector<'a> {
    graph: &'a dyn Graph,
    degrees: Vec<usize>,
}

impl<'a> CommunityDetector<'a> {
    pub fn new(graph: &'a dyn Graph) -> Result<Self> {
        let n = graph.vertex_count();
        let mut degrees = vec![0; n];
        for v in 0..n {
            degrees[v] = graph.in_degree(v)? + graph.out_degree(v)?;
        }
        Ok(Self { graph, degrees })
    }

    /// Detect communities with up to `max_passes` greedy passes.
    ///
    /// Every vertex starts in its own community. Each pass visits vertices in
    /// increasing id order and moves each to the strictly-best positive-gain
    /// neighbor community (candidates in first-seen order, successors before
    /// predecessors); moves apply immediately and are visible to later
    /// vertices in the same pass. Detection stops early once a full pass
    /// produces no move. Final ids are renumbered by first appearance.
    pub fn detect(&self, max_passes: usize) -> Result<Vec<usize>> {
        let n = self.graph.vertex_count();
        let mut communities: Vec<usize> = (0..n).collect();

        let mut improved = true;
        let mut passes = 0;
        while improved && passes < max_passes {
            improved = false;
            passes += 1;

            for v in 0..n {
                let current = communities[v];

                let mut candidates = Vec::new();
                let mut seen = HashSet::new();
                for u in self
                    .graph
                    .successors(v)?
                    .into_iter()
                    .chain(self.graph.predecessors(v)?)
                {
                    let community = communities[u];
                    if community != current && seen.insert(community) {
                        candidates.push(community);
                    }
                }

                let mut best = current;
                let mut best_gain = 0.0;
                for candidate in candidates {
                    let gain = self.modularity_gain(v, candidate, &communities)?;
                    if gain > best_gain {
                        best_gain = gain;
                        best = candidate;
                        improved = true;
                    }
                }

                communities[v] = best;
            }
        }

        log::debug!(
            "community detection settled after {} passes over {} vertices",
            passes,
            n
        );

        Ok(renumber(communities))
    }

    /// ΔQ for moving `vertex` into `target`:
    /// k_in/(2m) − (Σtot·k_v)/(2m)², where k_in counts the vertex's edges in
    /// both directions into the target's current members and Σtot sums the
    /// members' total degrees
    fn modularity_gain(&self, vertex: usize, target: usize, communities: &[usize]) -> Result<f64> {
        let m = self.graph.edge_count();
        if m == 0 {
            return Ok(0.0);
        }
        let two_m = 2.0 * m as f64;

        let k_v = self.degrees[vertex] as f64;

        let mut k_in = 0usize;
        for u in self.graph.successors(vertex)? {
            if communities[u] == target {
                k_in += 1;
            }
        }
        for u in self.graph.predecessors(vertex)? {
            if communities[u] == target {
                k_in += 1;
            }
        }

        let sigma_tot: usize = communities
            .iter()
            .enumerate()
            .filter(|&(_, &community)| community == target)
            .map(|(u, _)| self.degrees[u])
            .sum();

        Ok(k_in as f64 / two_m - (sigma_tot as f64 * k_v) / (two_m * two_m))
    }

    /// Newman modularity of a partition: Q = (1/2m)·Σ(A_ij − k_i·k_j/2m) over
    /// every ordered same-community pair, including i = j; 0.0 on an edgeless
    /// graph
    pub fn modularity(&self, communities: &[usize]) -> Result<f64> {
        let n = self.graph.vertex_count();
        let m = self.graph.edge_count();
        if m == 0 {
            return Ok(0.0);
        }
        let two_m = 2.0 * m as f64;

        let mut q = 0.0;
        for i in 0..n {
            for j in 0..n {
                if communities[i] != communities[j] {
                    continue;
                }
                let adjacency = if self.graph.has_edge(i, j)? { 1.0 } else { 0.0 };
                let expected = (self.degrees[i] * self.degrees[j]) as f64 / two_m;
                q += adjacency - expected;
            }
        }

        Ok(q / two_m)
    }

    /// Vertices that touch at least two distinct foreign communities with at
    /// least 30% of their edge endpoints crossing community lines
    pub fn bridging_ties(&self, communities: &[usize]) -> Result<Vec<usize>> {
        let mut bridges = Vec::new();
        for v in 0..self.graph.vertex_count() {
            let (foreign, total, inter) = self.crossing_profile(v, communities)?;
            if foreign.len() >= 2 && total > 0 {
                let ratio = inter as f64 / total as f64;
                if ratio >= BRIDGING_RATIO {
                    bridges.push(v);
                }
            }
        }
        Ok(bridges)
    }

    /// Per-vertex bridging strength: distinct foreign communities touched
    /// times the inter-community edge fraction; 0.0 for neighborless vertices
    pub fn bridging_strength(&self, communities: &[usize]) -> Result<Vec<f64>> {
        let n = self.graph.vertex_count();
        let mut strength = vec![0.0; n];
        for v in 0..n {
            let (foreign, total, inter) = self.crossing_profile(v, communities)?;
            if total > 0 {
                let ratio = inter as f64 / total as f64;
                strength[v] = foreign.len() as f64 * ratio;
            }
        }
        Ok(strength)
    }

    /// Foreign communities touched by `v`, counting each edge endpoint once
    /// per direction list
    fn crossing_profile(
        &self,
        v: usize,
        communities: &[usize],
    ) -> Result<(HashSet<usize>, usize, usize)> {
        let own = communities[v];
        let mut foreign = HashSet::new();
        let mut total = 0usize;
        let mut inter = 0usize;

        for u in self
            .graph
            .successors(v)?
            .into_iter()
            .chain(self.graph.predecessors(v)?)
        {
            total += 1;
            if communities[u] != own {
                foreign.insert(communities[u]);
                inter += 1;
            }
        }

        Ok((foreign, total, inter))
    }
}

/// Number of distinct communities in a partition
pub fn community_count(communities: &[usize]) -> usize {
    communities.iter().collect::<HashSet<_>>().len()
}

/// Community id to member vertices, members in ascending order
pub fn community_members(communities: &[usize]) -> HashMap<usize, Vec<usize>> {
    let mut members: HashMap<usize, Vec<usize>> = HashMap::new();
    for (vertex, &community) in communities.iter().enumerate() {
        members.entry(community).or_default().push(vertex);
    }
    members
}

/// Relabel community ids contiguously from 0 in order of first appearance
fn renumber(communities: Vec<usize>) -> Vec<usize> {
    let mut mapping = HashMap::new();
    let mut next_id = 0;
    communities
        .into_iter()
        .map(|community| {
            *mapping.entry(community).or_insert_with(|| {
                let id = next_id;
                next_id += 1;
                id
            })
        })
        .collect()
}
