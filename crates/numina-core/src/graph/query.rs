//! Breadth-first traversal over the correspondence graph.
//!
//! Discovery is breadth-first, not weight-optimal: a node is claimed by the
//! first path that reaches it (fewest hops), even if a heavier path of the same
//! or greater length exists.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CorrespondenceGraph;
use crate::config::TraversalConfig;
use crate::config::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_WEIGHT};
use crate::ontology::{GraphEdge, GraphNode, NodeKey, NodeKind, Relationship};

/// Weight assigned to every seed in the result.
pub const SEED_WEIGHT: u32 = 10;

/// Parameters of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalQuery {
    pub seeds: Vec<NodeKey>,
    pub max_depth: usize,
    /// Edges lighter than this are never followed.
    pub min_weight: u8,
    /// Only follow these relationships, if set.
    pub edge_types: Option<BTreeSet<Relationship>>,
    /// Only discover nodes of these kinds, if set. Seeds are always included.
    pub target_kinds: Option<BTreeSet<NodeKind>>,
}

impl Default for TraversalQuery {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            min_weight: DEFAULT_MIN_WEIGHT,
            edge_types: None,
            target_kinds: None,
        }
    }
}

impl TraversalQuery {
    pub fn new(seeds: impl IntoIterator<Item = NodeKey>) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A query using the configured depth and weight defaults.
    pub fn from_config(config: &TraversalConfig, seeds: impl IntoIterator<Item = NodeKey>) -> Self {
        Self::new(seeds)
            .max_depth(config.max_depth)
            .min_weight(config.min_weight)
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn min_weight(mut self, weight: u8) -> Self {
        self.min_weight = weight;
        self
    }

    pub fn edge_types(mut self, types: impl IntoIterator<Item = Relationship>) -> Self {
        self.edge_types = Some(types.into_iter().collect());
        self
    }

    pub fn target_kinds(mut self, kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        self.target_kinds = Some(kinds.into_iter().collect());
        self
    }

    fn follows(&self, edge: &GraphEdge) -> bool {
        edge.weight >= self.min_weight
            && self
                .edge_types
                .as_ref()
                .map_or(true, |types| types.contains(&edge.relationship))
    }

    fn admits(&self, kind: NodeKind) -> bool {
        self.target_kinds
            .as_ref()
            .map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// How a node in the result was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalPath {
    pub node: NodeKey,
    /// Hops from the nearest seed
    pub depth: usize,
    /// Edge ids from the seed, in traversal order. Empty for seeds.
    pub edges: Vec<String>,
    /// Sum of traversed edge weights; [`SEED_WEIGHT`] for seeds.
    pub weight: u32,
}

/// Nodes, edges and paths produced by a traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalResult {
    /// Seeds first, then discovered nodes in discovery order
    pub nodes: Vec<GraphNode>,
    /// Each traversed edge once
    pub edges: Vec<GraphEdge>,
    /// One path per entry in `nodes`, same order
    pub paths: Vec<TraversalPath>,
}

impl TraversalResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.paths.iter().any(|p| &p.node == key)
    }

    pub fn path_to(&self, key: &NodeKey) -> Option<&TraversalPath> {
        self.paths.iter().find(|p| &p.node == key)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }
}

/// The endpoint reached by following `edge` from `current`.
///
/// Returns `None` if `current` is not an endpoint of `edge`, or if the edge is
/// directional and `current` is its target.
pub fn resolve_other_endpoint<'a>(edge: &'a GraphEdge, current: &NodeKey) -> Option<&'a NodeKey> {
    if &edge.source == current {
        Some(&edge.target)
    } else if &edge.target == current && edge.bidirectional {
        Some(&edge.source)
    } else {
        None
    }
}

struct Frontier {
    key: NodeKey,
    depth: usize,
    edges: Vec<String>,
    weight: u32,
}

impl CorrespondenceGraph {
    /// Run a multi-source breadth-first traversal.
    ///
    /// Seeds missing from the graph are skipped. Every edge recorded in the
    /// result connects two nodes that are also in the result.
    pub fn traverse(&self, query: &TraversalQuery) -> TraversalResult {
        let mut result = TraversalResult::default();
        let mut visited: HashSet<NodeKey> = HashSet::new();
        let mut recorded_edges: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<Frontier> = VecDeque::new();

        for seed in &query.seeds {
            let Some(node) = self.node(seed) else {
                debug!(seed = %seed, "skipping unknown seed");
                continue;
            };
            if !visited.insert(seed.clone()) {
                continue;
            }
            result.nodes.push(node.clone());
            result.paths.push(TraversalPath {
                node: seed.clone(),
                depth: 0,
                edges: Vec::new(),
                weight: SEED_WEIGHT,
            });
            queue.push_back(Frontier {
                key: seed.clone(),
                depth: 0,
                edges: Vec::new(),
                weight: 0,
            });
        }

        while let Some(current) = queue.pop_front() {
            if current.depth >= query.max_depth {
                continue;
            }

            for edge in self.edges_from(&current.key) {
                if !query.follows(edge) {
                    continue;
                }
                let Some(other) = resolve_other_endpoint(edge, &current.key) else {
                    continue;
                };
                if !query.admits(other.kind) {
                    continue;
                }
                let Some(node) = self.node(other) else {
                    continue;
                };

                if recorded_edges.insert(edge.id.as_str()) {
                    result.edges.push(edge.clone());
                }
                if !visited.insert(other.clone()) {
                    continue;
                }

                let mut edges = current.edges.clone();
                edges.push(edge.id.clone());
                let weight = current.weight + u32::from(edge.weight);
                let depth = current.depth + 1;

                result.nodes.push(node.clone());
                result.paths.push(TraversalPath {
                    node: other.clone(),
                    depth,
                    edges: edges.clone(),
                    weight,
                });
                queue.push_back(Frontier {
                    key: other.clone(),
                    depth,
                    edges,
                    weight,
                });
            }
        }

        debug!(
            seeds = query.seeds.len(),
            nodes = result.nodes.len(),
            edges = result.edges.len(),
            max_depth = query.max_depth,
            "traversal complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_sun_leo() -> GraphEdge {
        GraphEdge::new(
            Relationship::Rules,
            NodeKey::planet("sun"),
            NodeKey::sign("leo"),
            10,
        )
        .directional()
    }

    #[test]
    fn test_resolve_from_source() {
        let edge = rules_sun_leo();
        assert_eq!(
            resolve_other_endpoint(&edge, &NodeKey::planet("sun")),
            Some(&NodeKey::sign("leo"))
        );
    }

    #[test]
    fn test_resolve_directional_from_target_is_blocked() {
        let edge = rules_sun_leo();
        assert_eq!(resolve_other_endpoint(&edge, &NodeKey::sign("leo")), None);
    }

    #[test]
    fn test_resolve_bidirectional_from_target() {
        let edge = GraphEdge::new(
            Relationship::BelongsToElement,
            NodeKey::sign("leo"),
            NodeKey::element("fire"),
            9,
        );
        assert_eq!(
            resolve_other_endpoint(&edge, &NodeKey::element("fire")),
            Some(&NodeKey::sign("leo"))
        );
    }

    #[test]
    fn test_resolve_unrelated_node() {
        let edge = rules_sun_leo();
        assert_eq!(resolve_other_endpoint(&edge, &NodeKey::planet("moon")), None);
    }

    #[test]
    fn test_query_defaults() {
        let query = TraversalQuery::new([NodeKey::number(1)]);
        assert_eq!(query.max_depth, 2);
        assert_eq!(query.min_weight, 5);
        assert!(query.edge_types.is_none());
        assert!(query.target_kinds.is_none());
    }
}
