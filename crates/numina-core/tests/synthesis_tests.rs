use numina_core::config::SynthesisConfig;
use numina_core::ontology::NodeKind;
use numina_core::synthesis::{synthesize_with_config, PatternShape, SpecialKind};
use numina_core::tables::Element;
use numina_core::{synthesize, ChartProfile, CorrespondenceGraph, ElementAlignment};

fn graph() -> CorrespondenceGraph {
    CorrespondenceGraph::build()
}

#[test]
fn test_dominant_digit_ties_go_to_first() {
    let graph = graph();
    assert_eq!(synthesize(&graph, "1221", None).metadata.dominant_digit, 1);

    let result = synthesize(&graph, "2211", None);
    assert_eq!(result.metadata.dominant_digit, 2);
    assert_eq!(result.metadata.primary_planet, "moon");
    assert_eq!(result.metadata.primary_element, Element::Water);
}

#[test]
fn test_sun_constant() {
    let result = synthesize(&graph(), "111", None);
    let metadata = &result.metadata;

    assert_eq!(metadata.primary_planet, "sun");
    assert_eq!(metadata.planet_symbol, "☉");
    assert_eq!(metadata.primary_element, Element::Fire);

    let special = metadata.special.as_ref().expect("111 is special");
    assert_eq!(special.kind, SpecialKind::MagicConstant);
    assert_eq!(special.planet, "sun");
    assert!(result.narrative.contains("Agrippa"));
}

#[test]
fn test_blended_planets() {
    let result = synthesize(&graph(), "1234", None);
    let planets = &result.metadata.planets;
    for planet in ["sun", "moon", "jupiter", "uranus"] {
        assert!(planets.contains(planet), "missing {}", planet);
    }
    assert_eq!(planets.len(), 4);
    assert_eq!(result.metadata.dominant_digit, 1);
    assert_eq!(result.metadata.analysis.shape, PatternShape::Ascending);
    assert!(result.metadata.special.is_none());
}

#[test]
fn test_special_number_ignores_separators() {
    let result = synthesize(&graph(), "1 1 1", None);
    let special = result.metadata.special.expect("digits spell 111");
    assert_eq!(special.planet, "sun");
    assert_eq!(special.kind, SpecialKind::MagicConstant);
    assert!(result.narrative.contains("Agrippa"));
}

#[test]
fn test_min_weight_applies_to_synthesis() {
    let graph = graph();
    let default = synthesize(&graph, "4", None);
    assert!(default.metadata.archetypes.contains(&"rebel".to_string()));

    // digit 4 only has weight-7 correspondences
    let strict = SynthesisConfig {
        min_weight: 8,
        ..SynthesisConfig::default()
    };
    let result = synthesize_with_config(&graph, "4", None, &strict);
    assert_eq!(result.traversal.nodes.len(), 1);
    assert!(result.metadata.archetypes.is_empty());
    assert!(result.traversal.edges.iter().all(|e| e.weight >= 8));
}

#[test]
fn test_all_zero_pattern() {
    let result = synthesize(&graph(), "0000", None);
    let metadata = &result.metadata;

    assert_eq!(metadata.dominant_digit, 0);
    assert_eq!(metadata.primary_planet, "sun");
    assert_eq!(metadata.primary_element, Element::Fire);
    assert!(metadata.planets.is_empty());
    assert!(metadata.elements.contains(&Element::Ether));
    assert!(metadata.geometry.is_none());
    assert!(!result.narrative.is_empty());
}

#[test]
fn test_empty_pattern_is_not_an_error() {
    let result = synthesize(&graph(), "", None);
    assert_eq!(result.metadata.dominant_digit, 0);
    assert!(result.traversal.is_empty());
    assert!(result.metadata.archetypes.is_empty());
}

#[test]
fn test_geometry_from_dominant_digit() {
    let result = synthesize(&graph(), "5515", None);
    assert_eq!(result.metadata.geometry.as_deref(), Some("dodecahedron"));
    assert!(result.narrative.contains("Dodecahedron"));
}

#[test]
fn test_archetypes_come_from_traversal() {
    let result = synthesize(&graph(), "1", None);
    assert!(result.metadata.archetypes.contains(&"hero".to_string()));
    assert!(result
        .traversal
        .nodes
        .iter()
        .all(|n| n.kind() != NodeKind::House));
}

#[test]
fn test_depth_limits_archetypes() {
    let shallow = SynthesisConfig {
        depth: 1,
        ..SynthesisConfig::default()
    };
    let result = synthesize_with_config(&graph(), "1", None, &shallow);
    assert!(result.metadata.archetypes.is_empty());
    assert!(result.traversal.paths.iter().all(|p| p.depth <= 1));
}

#[test]
fn test_personal_alignment() {
    let graph = graph();

    let fire = ChartProfile::new(Element::Fire).with_sun("leo");
    let personal = synthesize(&graph, "111", Some(&fire)).personal.unwrap();
    assert_eq!(personal.alignment, ElementAlignment::Harmonious);
    assert_eq!(personal.related_signs, vec!["leo".to_string()]);

    let water = ChartProfile::new(Element::Water);
    let personal = synthesize(&graph, "111", Some(&water)).personal.unwrap();
    assert_eq!(personal.alignment, ElementAlignment::Challenging);

    let air = ChartProfile::new(Element::Air);
    let result = synthesize(&graph, "111", Some(&air));
    assert_eq!(
        result.personal.unwrap().alignment,
        ElementAlignment::Complementary
    );
    assert!(result.narrative.contains("complementary"));
}

#[test]
fn test_no_profile_no_personal_section() {
    let result = synthesize(&graph(), "777", None);
    assert!(result.personal.is_none());
    assert!(!result.narrative.contains("Personal resonance"));
}

#[test]
fn test_synthesis_is_deterministic() {
    let graph = graph();
    let profile = ChartProfile::new(Element::Earth).with_moon("taurus");
    assert_eq!(
        synthesize(&graph, "86", Some(&profile)),
        synthesize(&graph, "86", Some(&profile))
    );
}

#[test]
fn test_result_serializes() {
    let result = synthesize(&graph(), "369", None);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["metadata"]["primary_planet"], "jupiter");
    assert!(json.get("personal").is_none());
    assert_eq!(json["metadata"]["special"]["kind"], "magic_constant");
}
