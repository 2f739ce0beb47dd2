//! Node catalog: materializes every node of every domain from the static tables.
//!
//! Each `create_*_nodes` function is pure and returns the same list, in the
//! same order, on every call.

use crate::ontology::{
    ArchetypeNode, ElementNode, GeometryNode, GraphNode, HouseNode, ModalityNode, NumberNode,
    PlanetNode, ZodiacSignNode,
};
use crate::tables::{
    archetypes, digit_correspondence, houses, modalities, planets, platonic_solid_for,
    elements::PLATONIC_SOLIDS, zodiac::natural_house, zodiac_signs, Element,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Digits 0 through 9. Zero has no planet and belongs to ether.
pub fn create_number_nodes() -> Vec<GraphNode> {
    let zero = NumberNode {
        id: "0".to_string(),
        digit: 0,
        planet: None,
        element: Element::Ether.id().to_string(),
        confidence: None,
        traits: strings(&["potential", "void", "wholeness"]),
    };

    let mut nodes = vec![GraphNode::Number(zero)];
    nodes.extend((1..=9).filter_map(digit_correspondence).map(|c| {
        GraphNode::Number(NumberNode {
            id: c.digit.to_string(),
            digit: c.digit,
            planet: Some(c.planet.to_string()),
            element: c.element.id().to_string(),
            confidence: Some(c.confidence),
            traits: strings(c.traits),
        })
    }));
    nodes
}

pub fn create_planet_nodes() -> Vec<GraphNode> {
    planets()
        .iter()
        .map(|p| {
            GraphNode::Planet(PlanetNode {
                id: p.id.to_string(),
                name: p.name.to_string(),
                symbol: p.symbol.to_string(),
                element: p.element.id().to_string(),
                weekday: p.weekday.map(str::to_string),
                archetype: p.archetype.to_string(),
                nature: p.nature,
            })
        })
        .collect()
}

pub fn create_element_nodes() -> Vec<GraphNode> {
    Element::ALL
        .iter()
        .map(|e| {
            GraphNode::Element(ElementNode {
                id: e.id().to_string(),
                name: e.display_name().to_string(),
                symbol: e.symbol().to_string(),
                qualities: strings(&e.qualities()),
                geometry: platonic_solid_for(*e).id.to_string(),
            })
        })
        .collect()
}

pub fn create_geometry_nodes() -> Vec<GraphNode> {
    PLATONIC_SOLIDS
        .iter()
        .map(|s| {
            GraphNode::Geometry(GeometryNode {
                id: s.id.to_string(),
                name: s.name.to_string(),
                faces: s.faces,
                face_shape: s.face_shape.to_string(),
                element: s.element.id().to_string(),
            })
        })
        .collect()
}

pub fn create_zodiac_nodes() -> Vec<GraphNode> {
    zodiac_signs()
        .iter()
        .map(|z| {
            GraphNode::ZodiacSign(ZodiacSignNode {
                id: z.id.to_string(),
                name: z.name.to_string(),
                glyph: z.glyph.to_string(),
                element: z.element.id().to_string(),
                modality: z.modality.id().to_string(),
                ruler: z.ruler.to_string(),
                house: natural_house(z.id).unwrap_or_default(),
            })
        })
        .collect()
}

pub fn create_house_nodes() -> Vec<GraphNode> {
    houses()
        .iter()
        .map(|h| {
            GraphNode::House(HouseNode {
                id: h.number.to_string(),
                number: h.number,
                life_area: h.life_area.to_string(),
                keywords: strings(h.keywords),
            })
        })
        .collect()
}

pub fn create_archetype_nodes() -> Vec<GraphNode> {
    archetypes()
        .iter()
        .map(|a| {
            GraphNode::Archetype(ArchetypeNode {
                id: a.slug.to_string(),
                name: a.name.to_string(),
                number: a.number,
                element: a.element.map(|e| e.id().to_string()),
                planet: a.planet.map(str::to_string),
                zodiac: a.zodiac.map(str::to_string),
                confidence: a.confidence,
                keywords: strings(a.keywords),
            })
        })
        .collect()
}

pub fn create_modality_nodes() -> Vec<GraphNode> {
    modalities()
        .iter()
        .map(|m| {
            GraphNode::Modality(ModalityNode {
                id: m.id().to_string(),
                name: m.display_name().to_string(),
                meaning: m.meaning().to_string(),
                signs: zodiac_signs()
                    .iter()
                    .filter(|z| z.modality == *m)
                    .map(|z| z.id.to_string())
                    .collect(),
            })
        })
        .collect()
}

/// Every node of every domain, in a fixed order.
pub fn all_nodes() -> Vec<GraphNode> {
    let mut nodes = create_number_nodes();
    nodes.extend(create_planet_nodes());
    nodes.extend(create_element_nodes());
    nodes.extend(create_geometry_nodes());
    nodes.extend(create_zodiac_nodes());
    nodes.extend(create_house_nodes());
    nodes.extend(create_archetype_nodes());
    nodes.extend(create_modality_nodes());
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::NodeKind;
    use std::collections::HashSet;

    #[test]
    fn test_domain_sizes() {
        assert_eq!(create_number_nodes().len(), 10);
        assert_eq!(create_planet_nodes().len(), 9);
        assert_eq!(create_element_nodes().len(), 5);
        assert_eq!(create_geometry_nodes().len(), 5);
        assert_eq!(create_zodiac_nodes().len(), 12);
        assert_eq!(create_house_nodes().len(), 12);
        assert_eq!(create_modality_nodes().len(), 3);
    }

    #[test]
    fn test_zero_is_ether_without_planet() {
        let nodes = create_number_nodes();
        let GraphNode::Number(zero) = &nodes[0] else {
            panic!("first node should be a number");
        };
        assert_eq!(zero.digit, 0);
        assert_eq!(zero.planet, None);
        assert_eq!(zero.element, "ether");
    }

    #[test]
    fn test_keys_are_unique_and_deterministic() {
        let first: Vec<_> = all_nodes().iter().map(GraphNode::key).collect();
        let second: Vec<_> = all_nodes().iter().map(GraphNode::key).collect();
        assert_eq!(first, second);

        let unique: HashSet<_> = first.iter().collect();
        assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn test_sign_nodes_carry_natural_house() {
        let houses: Vec<u8> = create_zodiac_nodes()
            .into_iter()
            .filter_map(|n| match n {
                GraphNode::ZodiacSign(z) => Some(z.house),
                _ => None,
            })
            .collect();
        assert_eq!(houses, (1..=12).collect::<Vec<u8>>());
        assert!(create_zodiac_nodes()
            .iter()
            .all(|n| n.kind() == NodeKind::ZodiacSign));
    }
}
