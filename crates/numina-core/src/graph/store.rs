//! Adjacency-list storage for the correspondence graph.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::ontology::{GraphEdge, GraphNode, NodeKey, NodeKind, Relationship};

/// Node table, edge table and the two adjacency indexes.
///
/// A bidirectional edge appears in the forward list of both endpoints. A
/// directional edge appears in the source's forward list and the target's
/// reverse list only.
#[derive(Debug, Clone, Default)]
pub struct CorrespondenceGraph {
    nodes: HashMap<NodeKey, GraphNode>,
    node_order: Vec<NodeKey>,
    edges: HashMap<String, GraphEdge>,
    edge_order: Vec<String>,
    forward: HashMap<NodeKey, Vec<String>>,
    reverse: HashMap<NodeKey, Vec<String>>,
}

/// Node and edge counts broken down by kind and relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_kind: BTreeMap<NodeKind, usize>,
    pub edges_by_relationship: BTreeMap<Relationship, usize>,
}

impl CorrespondenceGraph {
    /// An empty graph. See [`CorrespondenceGraph::build`] for the populated one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Re-adding the same key replaces the stored node.
    pub fn add_node(&mut self, node: GraphNode) {
        let key = node.key();
        if self.nodes.insert(key.clone(), node).is_none() {
            self.node_order.push(key);
        }
    }

    /// Insert an edge and index it.
    ///
    /// An edge with an existing id replaces the stored one in place and is
    /// re-indexed from its own flags. Endpoints are not validated; callers add
    /// all nodes first.
    pub fn add_edge(&mut self, edge: GraphEdge) {
        let id = edge.id.clone();
        match self.edges.remove(&id) {
            Some(old) => {
                debug!(edge = %id, "replacing existing edge");
                self.unindex(&old);
            }
            None => self.edge_order.push(id.clone()),
        }

        self.forward
            .entry(edge.source.clone())
            .or_default()
            .push(id.clone());
        if edge.bidirectional {
            self.forward
                .entry(edge.target.clone())
                .or_default()
                .push(id.clone());
        } else {
            self.reverse
                .entry(edge.target.clone())
                .or_default()
                .push(id.clone());
        }

        self.edges.insert(id, edge);
    }

    fn unindex(&mut self, edge: &GraphEdge) {
        for key in [&edge.source, &edge.target] {
            if let Some(ids) = self.forward.get_mut(key) {
                ids.retain(|id| id != &edge.id);
            }
        }
        if let Some(ids) = self.reverse.get_mut(&edge.target) {
            ids.retain(|id| id != &edge.id);
        }
    }

    pub fn node(&self, key: &NodeKey) -> Option<&GraphNode> {
        self.nodes.get(key)
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.get(id)
    }

    /// Edges that may be traversed starting at `key`, in insertion order.
    pub fn edges_from(&self, key: &NodeKey) -> Vec<&GraphEdge> {
        self.resolve(self.forward.get(key))
    }

    /// Directional edges arriving at `key`. These cannot be traversed from `key`.
    pub fn edges_into(&self, key: &NodeKey) -> Vec<&GraphEdge> {
        self.resolve(self.reverse.get(key))
    }

    fn resolve(&self, ids: Option<&Vec<String>>) -> Vec<&GraphEdge> {
        ids.map(|ids| ids.iter().filter_map(|id| self.edges.get(id)).collect())
            .unwrap_or_default()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.node_order.iter().filter_map(|k| self.nodes.get(k))
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edge_order.iter().filter_map(|id| self.edges.get(id))
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes().filter(move |n| n.kind() == kind)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn stats(&self) -> GraphStats {
        let mut nodes_by_kind = BTreeMap::new();
        for node in self.nodes.values() {
            *nodes_by_kind.entry(node.kind()).or_insert(0) += 1;
        }

        let mut edges_by_relationship = BTreeMap::new();
        for edge in self.edges.values() {
            *edges_by_relationship.entry(edge.relationship).or_insert(0) += 1;
        }

        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            nodes_by_kind,
            edges_by_relationship,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::{ElementNode, GeometryNode};

    fn element(id: &str) -> GraphNode {
        GraphNode::Element(ElementNode {
            id: id.to_string(),
            name: id.to_string(),
            symbol: String::new(),
            qualities: Vec::new(),
            geometry: String::new(),
        })
    }

    fn solid(id: &str) -> GraphNode {
        GraphNode::Geometry(GeometryNode {
            id: id.to_string(),
            name: id.to_string(),
            faces: 4,
            face_shape: "triangle".to_string(),
            element: "fire".to_string(),
        })
    }

    #[test]
    fn test_add_node_is_idempotent_on_key() {
        let mut graph = CorrespondenceGraph::new();
        graph.add_node(element("fire"));
        graph.add_node(element("fire"));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes().count(), 1);
    }

    #[test]
    fn test_bidirectional_edge_indexed_from_both_ends() {
        let mut graph = CorrespondenceGraph::new();
        graph.add_node(element("fire"));
        graph.add_node(solid("tetrahedron"));
        graph.add_edge(GraphEdge::new(
            Relationship::ManifestsAs,
            NodeKey::element("fire"),
            NodeKey::geometry("tetrahedron"),
            10,
        ));

        assert_eq!(graph.edges_from(&NodeKey::element("fire")).len(), 1);
        assert_eq!(graph.edges_from(&NodeKey::geometry("tetrahedron")).len(), 1);
        assert!(graph.edges_into(&NodeKey::geometry("tetrahedron")).is_empty());
    }

    #[test]
    fn test_directional_edge_only_forward_from_source() {
        let mut graph = CorrespondenceGraph::new();
        graph.add_node(element("fire"));
        graph.add_node(solid("tetrahedron"));
        graph.add_edge(
            GraphEdge::new(
                Relationship::ManifestsAs,
                NodeKey::element("fire"),
                NodeKey::geometry("tetrahedron"),
                10,
            )
            .directional(),
        );

        assert_eq!(graph.edges_from(&NodeKey::element("fire")).len(), 1);
        assert!(graph.edges_from(&NodeKey::geometry("tetrahedron")).is_empty());
        assert_eq!(graph.edges_into(&NodeKey::geometry("tetrahedron")).len(), 1);
    }

    #[test]
    fn test_duplicate_edge_id_not_double_indexed() {
        let mut graph = CorrespondenceGraph::new();
        let edge = GraphEdge::new(
            Relationship::ManifestsAs,
            NodeKey::element("fire"),
            NodeKey::geometry("tetrahedron"),
            10,
        );
        graph.add_edge(edge.clone());
        graph.add_edge(edge);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges_from(&NodeKey::element("fire")).len(), 1);
    }

    fn fire_to_tetrahedron() -> GraphEdge {
        GraphEdge::new(
            Relationship::ManifestsAs,
            NodeKey::element("fire"),
            NodeKey::geometry("tetrahedron"),
            10,
        )
    }

    #[test]
    fn test_replacing_directional_with_bidirectional_reindexes() {
        let mut graph = CorrespondenceGraph::new();
        graph.add_node(element("fire"));
        graph.add_node(solid("tetrahedron"));
        graph.add_edge(fire_to_tetrahedron().directional());
        graph.add_edge(fire_to_tetrahedron());

        let fire = NodeKey::element("fire");
        let tetrahedron = NodeKey::geometry("tetrahedron");
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges().all(|e| e.bidirectional));
        assert_eq!(graph.edges_from(&fire).len(), 1);
        assert_eq!(graph.edges_from(&tetrahedron).len(), 1);
        assert!(graph.edges_into(&tetrahedron).is_empty());
        assert!(graph.edges_into(&fire).is_empty());
    }

    #[test]
    fn test_replacing_bidirectional_with_directional_reindexes() {
        let mut graph = CorrespondenceGraph::new();
        graph.add_node(element("fire"));
        graph.add_node(solid("tetrahedron"));
        graph.add_edge(fire_to_tetrahedron());
        graph.add_edge(fire_to_tetrahedron().directional());

        let fire = NodeKey::element("fire");
        let tetrahedron = NodeKey::geometry("tetrahedron");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.edges_from(&fire).len(), 1);
        assert!(graph.edges_from(&tetrahedron).is_empty());
        assert_eq!(graph.edges_into(&tetrahedron).len(), 1);
    }

    #[test]
    fn test_missing_node_lookups_are_empty() {
        let graph = CorrespondenceGraph::new();
        assert!(graph.node(&NodeKey::planet("vulcan")).is_none());
        assert!(graph.edges_from(&NodeKey::planet("vulcan")).is_empty());
    }
}
