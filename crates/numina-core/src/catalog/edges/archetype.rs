//! Archetypal edges: each archetype to its planet, sign and element.
//!
//! An archetype gets up to three edges, one per correspondence it defines.
//! Weight follows the archetype's own confidence tier.

use crate::ontology::{GraphEdge, NodeKey, Relationship};
use crate::tables::{archetypes, ArchetypeInfo};

fn edges_for(archetype: &ArchetypeInfo) -> Vec<GraphEdge> {
    let source = NodeKey::archetype(archetype.slug);
    let weight = archetype.confidence.weight();

    let targets = [
        archetype
            .planet
            .map(|p| (Relationship::ArchetypeCorrespondsToPlanet, NodeKey::planet(p))),
        archetype
            .zodiac
            .map(|z| (Relationship::ArchetypeCorrespondsToZodiac, NodeKey::sign(z))),
        archetype
            .element
            .map(|e| (Relationship::ArchetypeCorrespondsToElement, NodeKey::element(e.id()))),
    ];

    targets
        .into_iter()
        .flatten()
        .map(|(relationship, target)| {
            GraphEdge::new(relationship, source.clone(), target, weight)
                .with_confidence(archetype.confidence)
        })
        .collect()
}

pub fn archetype_edges() -> Vec<GraphEdge> {
    archetypes().iter().flat_map(edges_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_of(slug: &str) -> Vec<GraphEdge> {
        archetype_edges()
            .into_iter()
            .filter(|e| e.source == NodeKey::archetype(slug))
            .collect()
    }

    #[test]
    fn test_fully_defined_archetype_has_three_edges() {
        let hero = edges_of("hero");
        assert_eq!(hero.len(), 3);
        assert!(hero.iter().all(|e| e.weight == 10));
    }

    #[test]
    fn test_missing_correspondences_are_omitted() {
        let innocent = edges_of("innocent");
        assert_eq!(innocent.len(), 1);
        assert_eq!(
            innocent[0].relationship,
            Relationship::ArchetypeCorrespondsToElement
        );

        let healer = edges_of("healer");
        assert_eq!(healer.len(), 1);
        assert_eq!(healer[0].target, NodeKey::sign("virgo"));
        assert_eq!(healer[0].weight, 7);
    }

    #[test]
    fn test_high_confidence_weight() {
        assert!(edges_of("sage").iter().all(|e| e.weight == 9));
    }
}
