//! Dignity edges: directional planet → sign relationships.
//!
//! Weights descend with traditional priority: rulership 10, exaltation 8,
//! detriment 6, fall 6. None of these edges may be followed from the sign back
//! to the planet.

use crate::ontology::{GraphEdge, NodeKey, Relationship};
use crate::tables::planets::{Dignity, DETRIMENTS, EXALTATIONS, FALLS, RULERSHIPS};

pub const RULERSHIP_WEIGHT: u8 = 10;
pub const EXALTATION_WEIGHT: u8 = 8;
pub const DETRIMENT_WEIGHT: u8 = 6;
pub const FALL_WEIGHT: u8 = 6;

fn dignity_edges(table: &[Dignity], relationship: Relationship, weight: u8) -> Vec<GraphEdge> {
    table
        .iter()
        .map(|d| {
            GraphEdge::new(
                relationship,
                NodeKey::planet(d.planet),
                NodeKey::sign(d.sign),
                weight,
            )
            .directional()
        })
        .collect()
}

pub fn planet_rulership_edges() -> Vec<GraphEdge> {
    dignity_edges(&RULERSHIPS, Relationship::Rules, RULERSHIP_WEIGHT)
}

pub fn planet_exaltation_edges() -> Vec<GraphEdge> {
    dignity_edges(&EXALTATIONS, Relationship::ExaltsIn, EXALTATION_WEIGHT)
}

pub fn planet_detriment_edges() -> Vec<GraphEdge> {
    dignity_edges(&DETRIMENTS, Relationship::DetrimentIn, DETRIMENT_WEIGHT)
}

pub fn planet_fall_edges() -> Vec<GraphEdge> {
    dignity_edges(&FALLS, Relationship::FallsIn, FALL_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Case {
        generate: fn() -> Vec<GraphEdge>,
        relationship: Relationship,
        weight: u8,
        count: usize,
    }

    const CASES: [Case; 4] = [
        Case {
            generate: planet_rulership_edges,
            relationship: Relationship::Rules,
            weight: 10,
            count: 14,
        },
        Case {
            generate: planet_exaltation_edges,
            relationship: Relationship::ExaltsIn,
            weight: 8,
            count: 7,
        },
        Case {
            generate: planet_detriment_edges,
            relationship: Relationship::DetrimentIn,
            weight: 6,
            count: 14,
        },
        Case {
            generate: planet_fall_edges,
            relationship: Relationship::FallsIn,
            weight: 6,
            count: 7,
        },
    ];

    #[test]
    fn test_dignity_families() {
        for case in &CASES {
            let edges = (case.generate)();
            assert_eq!(edges.len(), case.count, "{}", case.relationship);
            for edge in &edges {
                assert_eq!(edge.relationship, case.relationship);
                assert_eq!(edge.weight, case.weight);
                assert!(!edge.bidirectional, "{} must be directional", edge.id);
            }
        }
    }

    #[test]
    fn test_mercury_rules_two_signs() {
        let ruled: Vec<_> = planet_rulership_edges()
            .into_iter()
            .filter(|e| e.source == NodeKey::planet("mercury"))
            .map(|e| e.target.id)
            .collect();
        assert_eq!(ruled, vec!["gemini", "virgo"]);
    }
}
