//! Zodiacal edges: each sign's element, modality and natural house.
//!
//! Exactly one edge of each kind per sign, read straight from the sign table.

use crate::ontology::{GraphEdge, NodeKey, Relationship};
use crate::tables::{zodiac::natural_house, zodiac_signs};

pub const SIGN_ELEMENT_WEIGHT: u8 = 9;
pub const SIGN_MODALITY_WEIGHT: u8 = 8;
pub const SIGN_HOUSE_WEIGHT: u8 = 8;

pub fn sign_element_edges() -> Vec<GraphEdge> {
    zodiac_signs()
        .iter()
        .map(|sign| {
            GraphEdge::new(
                Relationship::BelongsToElement,
                NodeKey::sign(sign.id),
                NodeKey::element(sign.element.id()),
                SIGN_ELEMENT_WEIGHT,
            )
        })
        .collect()
}

pub fn sign_modality_edges() -> Vec<GraphEdge> {
    zodiac_signs()
        .iter()
        .map(|sign| {
            GraphEdge::new(
                Relationship::HasModality,
                NodeKey::sign(sign.id),
                NodeKey::modality(sign.modality.id()),
                SIGN_MODALITY_WEIGHT,
            )
        })
        .collect()
}

pub fn sign_house_edges() -> Vec<GraphEdge> {
    zodiac_signs()
        .iter()
        .filter_map(|sign| {
            let house = natural_house(sign.id)?;
            Some(
                GraphEdge::new(
                    Relationship::NaturallyRules,
                    NodeKey::sign(sign.id),
                    NodeKey::house(house),
                    SIGN_HOUSE_WEIGHT,
                )
                .with_context(format!("{} is the natural ruler of house {}", sign.name, house)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_edge_per_sign_per_family() {
        for edges in [sign_element_edges(), sign_modality_edges(), sign_house_edges()] {
            assert_eq!(edges.len(), 12);
        }
    }

    #[test]
    fn test_house_order() {
        let edges = sign_house_edges();
        assert_eq!(edges[0].source, NodeKey::sign("aries"));
        assert_eq!(edges[0].target, NodeKey::house(1));
        assert_eq!(edges[11].source, NodeKey::sign("pisces"));
        assert_eq!(edges[11].target, NodeKey::house(12));
    }

    #[test]
    fn test_leo_is_fixed_fire() {
        assert!(sign_element_edges()
            .iter()
            .any(|e| e.source == NodeKey::sign("leo") && e.target == NodeKey::element("fire")));
        assert!(sign_modality_edges()
            .iter()
            .any(|e| e.source == NodeKey::sign("leo") && e.target == NodeKey::modality("fixed")));
    }
}
