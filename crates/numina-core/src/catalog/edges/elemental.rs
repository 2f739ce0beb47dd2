//! Elemental edges: each element manifests as its Platonic solid.
//!
//! This is the foundational correspondence, always at full weight.

use crate::ontology::{GraphEdge, NodeKey, Relationship};
use crate::tables::{platonic_solid_for, Element};

pub const ELEMENT_GEOMETRY_WEIGHT: u8 = 10;

pub fn element_geometry_edges() -> Vec<GraphEdge> {
    Element::ALL
        .iter()
        .map(|element| {
            let solid = platonic_solid_for(*element);
            GraphEdge::new(
                Relationship::ManifestsAs,
                NodeKey::element(element.id()),
                NodeKey::geometry(solid.id),
                ELEMENT_GEOMETRY_WEIGHT,
            )
            .with_context(format!(
                "{} takes form as the {} of {} {} faces",
                element.display_name(),
                solid.name,
                solid.faces,
                solid.face_shape
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_full_weight_edge_per_element() {
        let edges = element_geometry_edges();
        assert_eq!(edges.len(), Element::ALL.len());
        assert!(edges.iter().all(|e| e.weight == 10 && e.bidirectional));
        assert!(edges
            .iter()
            .any(|e| e.source == NodeKey::element("earth") && e.target == NodeKey::geometry("cube")));
    }
}
