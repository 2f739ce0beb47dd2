//! Numeric edges: digits to their planets and elements.
//!
//! Weight follows the digit's confidence tier (very-high 10, high 9, moderate 7).
//! Zero sits outside the 1-9 table: it has no planet edge and a hard-coded
//! ether edge.

use crate::ontology::{Confidence, GraphEdge, NodeKey, Relationship};
use crate::tables::{digit_correspondence, Element};

/// Weight of the hard-coded zero → ether edge.
pub const ZERO_ETHER_WEIGHT: u8 = 7;

// =============================================================================
// NUMBER ↔ PLANET
// =============================================================================

pub fn number_planet_edges() -> Vec<GraphEdge> {
    (1..=9)
        .filter_map(digit_correspondence)
        .map(|c| {
            GraphEdge::new(
                Relationship::ResonatesWith,
                NodeKey::number(c.digit),
                NodeKey::planet(c.planet),
                c.confidence.weight(),
            )
            .with_confidence(c.confidence)
            .with_context(format!(
                "{} carries the {} current of {}",
                c.digit,
                c.traits.first().copied().unwrap_or("planetary"),
                c.planet
            ))
        })
        .collect()
}

// =============================================================================
// NUMBER ↔ ELEMENT
// =============================================================================

pub fn number_element_edges() -> Vec<GraphEdge> {
    let zero = GraphEdge::new(
        Relationship::ExpressesElement,
        NodeKey::number(0),
        NodeKey::element(Element::Ether.id()),
        ZERO_ETHER_WEIGHT,
    )
    .with_confidence(Confidence::Moderate)
    .with_context("0 is the void from which every element arises");

    let mut edges = vec![zero];
    edges.extend((1..=9).filter_map(digit_correspondence).map(|c| {
        GraphEdge::new(
            Relationship::ExpressesElement,
            NodeKey::number(c.digit),
            NodeKey::element(c.element.id()),
            c.confidence.weight(),
        )
        .with_confidence(c.confidence)
    }));
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_follow_confidence_tier() {
        let edges = number_planet_edges();
        assert_eq!(edges.len(), 9);

        let weight_of = |digit: u8| {
            edges
                .iter()
                .find(|e| e.source == NodeKey::number(digit))
                .map(|e| e.weight)
        };
        assert_eq!(weight_of(1), Some(10)); // very-high
        assert_eq!(weight_of(3), Some(9)); // high
        assert_eq!(weight_of(4), Some(7)); // moderate
        assert_eq!(weight_of(0), None);
    }

    #[test]
    fn test_zero_expresses_ether() {
        let edges = number_element_edges();
        assert_eq!(edges.len(), 10);
        let zero = &edges[0];
        assert_eq!(zero.source, NodeKey::number(0));
        assert_eq!(zero.target, NodeKey::element("ether"));
        assert_eq!(zero.weight, ZERO_ETHER_WEIGHT);
        assert!(zero.bidirectional);
    }
}
