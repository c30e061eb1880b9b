//! Analysis orchestration over one read-only graph snapshot

pub mod centrality;
pub mod community;
pub mod structure;

pub use centrality::{top_n, CentralitySuite};
pub use community::{community_count, community_members, CommunityDetector};
pub use structure::StructuralAnalyzer;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::graph::Graph;
use crate::Result;

/// Immutable aggregate of every metric computed for one graph snapshot.
///
/// Per-vertex vectors are indexed by vertex id. The aggregate is
/// self-contained: labels and the connectivity flag ride along so export
/// collaborators never need the graph itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub connected: bool,
    pub vertex_labels: Vec<String>,

    // Structural metrics
    pub density: f64,
    pub clustering_coefficient: f64,
    pub diameter: usize,
    pub average_distance: f64,
    pub degree_distribution: HashMap<usize, usize>,
    pub assortativity: f64,

    // Centrality metrics
    pub degree_centrality: Vec<f64>,
    pub betweenness_centrality: Vec<f64>,
    pub closeness_centrality: Vec<f64>,
    pub pagerank: Vec<f64>,

    // Community analysis
    pub communities: Vec<usize>,
    pub community_count: usize,
    pub community_members: HashMap<usize, Vec<usize>>,
    pub modularity: f64,
    pub bridging_ties: Vec<usize>,
    pub bridging_strength: Vec<f64>,
}

struct StructuralReport {
    density: f64,
    clustering_coefficient: f64,
    diameter: usize,
    average_distance: f64,
    degree_distribution: HashMap<usize, usize>,
    assortativity: f64,
}

struct CentralityReport {
    degree: Vec<f64>,
    betweenness: Vec<f64>,
    closeness: Vec<f64>,
    pagerank: Vec<f64>,
}

struct CommunityReport {
    communities: Vec<usize>,
    modularity: f64,
    bridging_ties: Vec<usize>,
    bridging_strength: Vec<f64>,
}

/// Run the structural, centrality, and community analyzers over `graph` and
/// assemble the combined result.
///
/// The three analyzer families only read the snapshot, so they fan out across
/// rayon workers; each family still runs its own algorithms to completion in
/// order.
pub fn run_complete_analysis(graph: &dyn Graph, config: &AnalysisConfig) -> Result<AnalysisResult> {
    log::info!(
        "analyzing graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let (structural, (centrality, community)) = rayon::join(
        || run_structural(graph),
        || {
            rayon::join(
                || run_centrality(graph, config),
                || run_community(graph, config),
            )
        },
    );
    let structural = structural?;
    let centrality = centrality?;
    let community = community?;

    let mut vertex_labels = Vec::with_capacity(graph.vertex_count());
    for v in 0..graph.vertex_count() {
        vertex_labels.push(graph.vertex_label(v)?);
    }

    let community_count = community::community_count(&community.communities);
    let community_members = community::community_members(&community.communities);

    log::info!(
        "analysis complete: {} communities, modularity {:.4}",
        community_count,
        community.modularity
    );

    Ok(AnalysisResult {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        connected: graph.is_connected()?,
        vertex_labels,
        density: structural.density,
        clustering_coefficient: structural.clustering_coefficient,
        diameter: structural.diameter,
        average_distance: structural.average_distance,
        degree_distribution: structural.degree_distribution,
        assortativity: structural.assortativity,
        degree_centrality: centrality.degree,
        betweenness_centrality: centrality.betweenness,
        closeness_centrality: centrality.closeness,
        pagerank: centrality.pagerank,
        communities: community.communities,
        community_count,
        community_members,
        modularity: community.modularity,
        bridging_ties: community.bridging_ties,
        bridging_strength: community.bridging_strength,
    })
}

fn run_structural(graph: &dyn Graph) -> Result<StructuralReport> {
    let analyzer = StructuralAnalyzer::new(graph);
    Ok(StructuralReport {
        density: analyzer.density(),
        clustering_coefficient: analyzer.clustering_coefficient()?,
        diameter: analyzer.diameter()?,
        average_distance: analyzer.average_distance()?,
        degree_distribution: analyzer.degree_distribution()?,
        assortativity: analyzer.assortativity()?,
    })
}

fn run_centrality(graph: &dyn Graph, config: &AnalysisConfig) -> Result<CentralityReport> {
    let suite = CentralitySuite::new(graph)?;
    Ok(CentralityReport {
        degree: suite.degree_centrality(),
        betweenness: suite.betweenness_centrality()?,
        closeness: suite.closeness_centrality()?,
        pagerank: suite.pagerank(
            config.damping_factor,
            config.pagerank_iterations,
            config.pagerank_tolerance,
        )?,
    })
}

fn run_community(graph: &dyn Graph, config: &AnalysisConfig) -> Result<CommunityReport> {
    let detector = CommunityDetector::new(graph)?;
    let communities = detector.detect(config.community_passes)?;
    let modularity = detector.modularity(&communities)?;
    let bridging_ties = detector.bridging_ties(&communities)?;
    let bridging_strength = detector.bridging_strength(&communities)?;
    Ok(CommunityReport {
        communities,
        modularity,
        bridging_ties,
        bridging_strength,
    })
}
