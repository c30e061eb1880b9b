//! Centrality suite tests: degree, betweenness, closeness, PageRank, top-N.

use collab_graph_analyzer::analysis::{top_n, CentralitySuite};
use collab_graph_analyzer::{new_graph, Graph, Representation};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn graph_with_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Box<dyn Graph> {
    let mut graph = new_graph(Representation::AdjacencyList, vertex_count).unwrap();
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

fn complete_digraph(vertex_count: usize) -> Box<dyn Graph> {
    let mut graph = new_graph(Representation::AdjacencyMatrix, vertex_count).unwrap();
    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v {
                graph.add_edge(u, v).unwrap();
            }
        }
    }
    graph
}

#[test]
fn degree_centrality_is_one_on_the_complete_digraph() {
    let graph = complete_digraph(5);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    for score in suite.degree_centrality() {
        assert!(close(score, 1.0));
    }
}

#[test]
fn degree_centrality_of_a_single_vertex_is_zero() {
    let graph = graph_with_edges(1, &[]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    assert_eq!(suite.degree_centrality(), vec![0.0]);
}

#[test]
fn degree_centrality_normalizes_total_degree() {
    let graph = graph_with_edges(3, &[(0, 1), (1, 2)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let scores = suite.degree_centrality();
    assert!(close(scores[0], 0.25));
    assert!(close(scores[1], 0.5));
    assert!(close(scores[2], 0.25));
}

#[test]
fn betweenness_peaks_at_the_middle_of_a_path() {
    let graph = graph_with_edges(3, &[(0, 1), (1, 2)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let scores = suite.betweenness_centrality().unwrap();
    assert_eq!(scores[0], 0.0);
    assert_eq!(scores[2], 0.0);
    // The single 0 -> 2 path routes through 1; normalization is (V-1)(V-2)
    assert!(close(scores[1], 0.5));
    assert!(scores[1] > scores[0] && scores[1] > scores[2]);
}

#[test]
fn betweenness_splits_across_parallel_shortest_paths() {
    // Two equal-length routes from 0 to 3, one through 1 and one through 2
    let graph = graph_with_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let scores = suite.betweenness_centrality().unwrap();
    assert!(close(scores[1], 0.5 / 6.0));
    assert!(close(scores[2], 0.5 / 6.0));
    assert_eq!(scores[0], 0.0);
    assert_eq!(scores[3], 0.0);
}

#[test]
fn closeness_is_zero_without_reachable_successors() {
    let graph = graph_with_edges(3, &[(0, 1), (1, 2)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let scores = suite.closeness_centrality().unwrap();
    assert_eq!(scores[2], 0.0);
}

#[test]
fn closeness_weights_reach_by_coverage() {
    let graph = graph_with_edges(3, &[(0, 1), (1, 2)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let scores = suite.closeness_centrality().unwrap();
    // Vertex 0 reaches both others at summed distance 3: (2/3) * (2/2)
    assert!(close(scores[0], 2.0 / 3.0));
    // Vertex 1 reaches one vertex at distance 1: (1/1) * (1/2)
    assert!(close(scores[1], 0.5));
}

#[test]
fn pagerank_mass_is_conserved_on_a_cycle() {
    let graph = graph_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let ranks = suite.pagerank(0.85, 50, 1e-6).unwrap();
    let total: f64 = ranks.iter().sum();
    assert!(close(total, 1.0));
    for rank in ranks {
        assert!(close(rank, 1.0 / 3.0));
    }
}

#[test]
fn dangling_vertices_drain_pagerank_mass() {
    // 0 -> 1 with 1 dangling and 2 isolated: nothing redistributes the
    // mass parked on out-degree-0 vertices
    let graph = graph_with_edges(3, &[(0, 1)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    let ranks = suite.pagerank(0.85, 10, 1e-6).unwrap();
    let total: f64 = ranks.iter().sum();
    assert!(total < 1.0);
    assert!(ranks[1] > ranks[0]);
    // Sourceless vertices settle at the teleport floor
    assert!(close(ranks[0], 0.05));
    assert!(close(ranks[2], 0.05));
}

#[test]
fn pagerank_runs_the_full_iteration_schedule() {
    let graph = graph_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    let suite = CentralitySuite::new(graph.as_ref()).unwrap();
    // A huge tolerance must not shorten the schedule: results match a run
    // configured with a zero tolerance exactly
    let loose = suite.pagerank(0.85, 25, 1e6).unwrap();
    let strict = suite.pagerank(0.85, 25, 0.0).unwrap();
    assert_eq!(loose, strict);

    // Zero passes leave the uniform initial vector untouched
    let untouched = suite.pagerank(0.85, 0, 1e-6).unwrap();
    for rank in untouched {
        assert!(close(rank, 1.0 / 3.0));
    }
}

#[test]
fn top_n_sorts_descending_with_stable_ties() {
    let scores = [0.3, 0.5, 0.5, 0.1];
    let ranked = top_n(&scores, 3);
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0], (1, 0.5));
    assert_eq!(ranked[1], (2, 0.5));
    assert_eq!(ranked[2], (0, 0.3));

    // Requests past the vector length return everything
    assert_eq!(top_n(&scores, 10).len(), 4);
    assert!(top_n(&scores, 0).is_empty());
}
