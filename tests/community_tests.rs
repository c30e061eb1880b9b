//! Community detector tests: greedy detection, modularity, bridging ties.

use collab_graph_analyzer::analysis::{community_count, community_members, CommunityDetector};
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

fn add_mutual(edges: &mut Vec<(usize, usize)>, u: usize, v: usize) {
    edges.push((u, v));
    edges.push((v, u));
}

/// Four disjoint mutually-linked pairs: 0-1, 2-3, 4-5, 6-7
fn disjoint_pairs() -> Box<dyn Graph> {
    let mut edges = Vec::new();
    for base in [0, 2, 4, 6] {
        add_mutual(&mut edges, base, base + 1);
    }
    graph_with_edges(8, &edges)
}

/// Two complete directed graphs on {0..4} and {4..8}, no cross edges
fn two_cliques() -> Box<dyn Graph> {
    let mut edges = Vec::new();
    for offset in [0, 4] {
        for u in offset..offset + 4 {
            for v in offset..offset + 4 {
                if u != v {
                    edges.push((u, v));
                }
            }
        }
    }
    graph_with_edges(8, &edges)
}

#[test]
fn disjoint_pairs_converge_to_one_community_each() {
    let graph = disjoint_pairs();
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let communities = detector.detect(100).unwrap();

    assert_eq!(communities, vec![0, 0, 1, 1, 2, 2, 3, 3]);
    assert_eq!(community_count(&communities), 4);
    assert!(close(detector.modularity(&communities).unwrap(), 0.25));
    assert!(detector.bridging_ties(&communities).unwrap().is_empty());
}

#[test]
fn mutual_star_collapses_into_a_single_community() {
    let mut edges = Vec::new();
    for leaf in 1..5 {
        add_mutual(&mut edges, 0, leaf);
    }
    let graph = graph_with_edges(5, &edges);
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let communities = detector.detect(100).unwrap();
    assert_eq!(communities, vec![0; 5]);
}

#[test]
fn detection_never_merges_across_disconnected_cliques() {
    // The single-level heuristic keeps shuffling vertices inside a dense
    // clique, but a community can only ever recruit along edges, so no
    // community spans the two components.
    let graph = two_cliques();
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let communities = detector.detect(100).unwrap();

    for (vertex, &community) in communities.iter().enumerate() {
        for (other, &other_community) in communities.iter().enumerate() {
            if community == other_community {
                assert_eq!(
                    vertex < 4,
                    other < 4,
                    "community {community} spans both cliques"
                );
            }
        }
    }
    assert!(community_count(&communities) >= 2);
    assert!(detector.bridging_ties(&communities).unwrap().is_empty());

    // Renumbering is contiguous from zero in first-appearance order
    assert_eq!(communities[0], 0);
    let max = communities.iter().copied().max().unwrap();
    assert_eq!(community_count(&communities), max + 1);
}

#[test]
fn modularity_of_the_clean_two_clique_split_is_exactly_zero() {
    // With the degree-product term summed over ordered pairs including i = j,
    // two equal cliques in two communities land exactly on the random
    // baseline.
    let graph = two_cliques();
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let split: Vec<usize> = (0..8).map(|v| usize::from(v >= 4)).collect();
    assert!(close(detector.modularity(&split).unwrap(), 0.0));
}

#[test]
fn modularity_of_an_edgeless_graph_is_zero() {
    let graph = graph_with_edges(4, &[]);
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let singletons: Vec<usize> = (0..4).collect();
    assert_eq!(detector.modularity(&singletons).unwrap(), 0.0);
}

#[test]
fn lumping_everything_together_can_go_negative() {
    let graph = disjoint_pairs();
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let lumped = vec![0; 8];
    assert!(detector.modularity(&lumped).unwrap() < 0.0);
}

#[test]
fn spider_vertex_is_the_only_bridging_tie() {
    // Three mutual pairs, each wired to hub 4: (0,1), (2,3), (5,6)
    let mut edges = Vec::new();
    add_mutual(&mut edges, 0, 1);
    add_mutual(&mut edges, 2, 3);
    add_mutual(&mut edges, 5, 6);
    add_mutual(&mut edges, 4, 0);
    add_mutual(&mut edges, 4, 2);
    add_mutual(&mut edges, 4, 5);
    let graph = graph_with_edges(7, &edges);
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();

    let partition = vec![0, 0, 1, 1, 2, 3, 3];
    assert_eq!(detector.bridging_ties(&partition).unwrap(), vec![4]);

    let strength = detector.bridging_strength(&partition).unwrap();
    // Hub: three foreign communities, every edge crosses
    assert!(close(strength[4], 3.0));
    // Pair member touching the hub: one foreign community, half its edges cross
    assert!(close(strength[0], 0.5));
    // Pair member with no outside contact
    assert_eq!(strength[1], 0.0);
}

#[test]
fn bridging_needs_at_least_two_foreign_communities() {
    let mut edges = Vec::new();
    add_mutual(&mut edges, 0, 1);
    add_mutual(&mut edges, 1, 2);
    let graph = graph_with_edges(3, &edges);
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();

    // Vertex 1 sits between two vertices of the same foreign community
    let partition = vec![0, 1, 0];
    assert!(detector.bridging_ties(&partition).unwrap().is_empty());
    let strength = detector.bridging_strength(&partition).unwrap();
    assert!(close(strength[1], 1.0));
}

#[test]
fn neighborless_vertices_have_zero_bridging_strength() {
    let graph = graph_with_edges(3, &[(0, 1)]);
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let partition = vec![0, 1, 2];
    let strength = detector.bridging_strength(&partition).unwrap();
    assert_eq!(strength[2], 0.0);
}

#[test]
fn membership_lists_mirror_the_partition() {
    let communities = vec![0, 0, 1, 0, 1];
    let members = community_members(&communities);
    assert_eq!(members.len(), 2);
    assert_eq!(members[&0], vec![0, 1, 3]);
    assert_eq!(members[&1], vec![2, 4]);
    assert_eq!(community_count(&communities), 2);
}

#[test]
fn detection_on_an_edgeless_graph_keeps_singletons() {
    let graph = graph_with_edges(4, &[]);
    let detector = CommunityDetector::new(graph.as_ref()).unwrap();
    let communities = detector.detect(100).unwrap();
    assert_eq!(communities, vec![0, 1, 2, 3]);
}
