//! Configuration for the analysis run

/// Tunable parameters shared by the analyzers
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// PageRank damping factor
    pub damping_factor: f64,

    /// Number of PageRank passes; iteration always runs this exact count
    pub pagerank_iterations: usize,

    /// Convergence threshold recorded for PageRank callers; it never cuts
    /// the iteration schedule short
    pub pagerank_tolerance: f64,

    /// Ceiling on community-detection passes over the vertex set
    pub community_passes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            pagerank_iterations: 100,
            pagerank_tolerance: 1e-6,
            community_passes: 100,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with custom values
    pub fn new(
        damping_factor: f64,
        pagerank_iterations: usize,
        pagerank_tolerance: f64,
        community_passes: usize,
    ) -> Self {
        Self {
            damping_factor,
            pagerank_iterations,
            pagerank_tolerance,
            community_passes,
        }
    }
}
