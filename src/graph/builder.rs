//! Graph construction from aggregated interaction records

use std::collections::HashMap;

use crate::error::GraphError;
use crate::graph::{new_graph, Graph, Representation};
use crate::interaction::{Contributor, Interaction, InteractionKind};
use crate::Result;

/// Aggregates interaction records into a populated graph.
///
/// Two modes: the weighted view sums per-kind weights into each directed
/// edge; the presence view counts matching records, optionally restricted to
/// one or more interaction kinds. Building is deterministic: identical input
/// always yields an identical graph.
pub struct GraphBuilder {
    representation: Representation,
    weighted: bool,
    kinds: Option<Vec<InteractionKind>>,
}

impl GraphBuilder {
    /// Integrated view: edge weight is the summed kind weight of every record
    /// for that ordered pair
    pub fn weighted(representation: Representation) -> Self {
        Self {
            representation,
            weighted: true,
            kinds: None,
        }
    }

    /// Presence view over a single interaction kind: edge weight is the
    /// matching record count
    pub fn by_kind(representation: Representation, kind: InteractionKind) -> Self {
        Self {
            representation,
            weighted: false,
            kinds: Some(vec![kind]),
        }
    }

    /// Presence view over a set of interaction kinds
    pub fn by_kinds(representation: Representation, kinds: &[InteractionKind]) -> Self {
        Self {
            representation,
            weighted: false,
            kinds: Some(kinds.to_vec()),
        }
    }

    /// Build a graph over the roster's vertices from the given records.
    ///
    /// The roster must map every login appearing in a kept record, with dense
    /// vertex ids `0..roster.len()`. Labels are assigned before any edge is
    /// inserted.
    pub fn build(
        &self,
        interactions: &[Interaction],
        roster: &HashMap<String, Contributor>,
    ) -> Result<Box<dyn Graph>> {
        let mut graph = new_graph(self.representation, roster.len())?;

        for contributor in roster.values() {
            graph.set_vertex_label(contributor.vertex_id, &contributor.login)?;
        }

        let mut edge_weights: HashMap<(usize, usize), f64> = HashMap::new();
        let mut kept = 0usize;
        for interaction in interactions {
            if let Some(kinds) = &self.kinds {
                if !kinds.contains(&interaction.kind) {
                    continue;
                }
            }
            kept += 1;
            let source = self.resolve(roster, &interaction.source)?;
            let target = self.resolve(roster, &interaction.target)?;
            let contribution = if self.weighted {
                interaction.weight()
            } else {
                1.0
            };
            *edge_weights.entry((source, target)).or_insert(0.0) += contribution;
        }

        for (&(source, target), &weight) in &edge_weights {
            graph.add_edge(source, target)?;
            graph.set_edge_weight(source, target, weight)?;
        }

        log::debug!(
            "built graph with {} vertices and {} edges from {} of {} interactions",
            graph.vertex_count(),
            graph.edge_count(),
            kept,
            interactions.len()
        );

        Ok(graph)
    }

    fn resolve(&self, roster: &HashMap<String, Contributor>, login: &str) -> Result<usize> {
        roster
            .get(login)
            .map(|contributor| contributor.vertex_id)
            .ok_or_else(|| GraphError::UnknownIdentity(login.to_string()))
    }
}
