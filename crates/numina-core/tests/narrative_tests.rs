use numina_core::config::NarrativeConfig;
use numina_core::synthesis::{check_token_budget_with, Narrative, SectionKind};
use numina_core::tables::Element;
use numina_core::{check_token_budget, synthesize, ChartProfile, CorrespondenceGraph};

#[test]
fn test_typical_narrative_fits_default_budget() {
    let graph = CorrespondenceGraph::build();
    let profile = ChartProfile::new(Element::Air)
        .with_sun("gemini")
        .with_moon("pisces")
        .with_rising("virgo");

    for pattern in ["1", "111", "1234", "5515", "0000"] {
        let result = synthesize(&graph, pattern, Some(&profile));
        let budget = check_token_budget(&result.narrative);
        assert!(
            budget.within_budget,
            "{} used {} tokens",
            pattern,
            budget.estimated_tokens
        );
    }
}

#[test]
fn test_header_names_pattern_and_planet() {
    let graph = CorrespondenceGraph::build();
    let result = synthesize(&graph, "888", None);
    let first_line = result.narrative.lines().next().unwrap();
    assert!(first_line.contains("888"));
    assert!(first_line.contains("Saturn"));
    assert!(first_line.contains("Earth"));
}

#[test]
fn test_sections_follow_metadata() {
    let graph = CorrespondenceGraph::build();
    let metadata = synthesize(&graph, "1234", None).metadata;
    let narrative = Narrative::compose(&metadata, None);

    assert_eq!(narrative.sections[0].kind, SectionKind::Header);
    assert!(narrative.has_section(SectionKind::Blend));
    assert!(narrative.has_section(SectionKind::Energy));
    assert!(!narrative.has_section(SectionKind::Geometry));
    assert!(!narrative.has_section(SectionKind::Special));
    assert!(!narrative.has_section(SectionKind::Personal));
}

#[test]
fn test_single_planet_has_no_blend() {
    let graph = CorrespondenceGraph::build();
    let metadata = synthesize(&graph, "444", None).metadata;
    let narrative = Narrative::compose(&metadata, None);
    assert!(!narrative.has_section(SectionKind::Blend));
    assert!(narrative.has_section(SectionKind::Geometry));
}

#[test]
fn test_fit_to_budget_keeps_required_sections() {
    let graph = CorrespondenceGraph::build();
    let profile = ChartProfile::new(Element::Fire).with_sun("leo");
    let result = synthesize(&graph, "111", Some(&profile));
    let narrative = Narrative::compose(&result.metadata, result.personal.as_ref());

    let tight = NarrativeConfig {
        token_budget: 10,
        chars_per_token: 4,
    };
    let fitted = narrative.fit_to_budget(&tight);

    assert!(fitted.has_section(SectionKind::Header));
    assert!(fitted.has_section(SectionKind::Special));
    assert!(fitted.has_section(SectionKind::Personal));
    assert!(!fitted.has_section(SectionKind::Energy));
    assert!(!fitted.has_section(SectionKind::Archetypes));
}

#[test]
fn test_fit_to_budget_leaves_fitting_narrative_alone() {
    let graph = CorrespondenceGraph::build();
    let metadata = synthesize(&graph, "1234", None).metadata;
    let narrative = Narrative::compose(&metadata, None);
    let fitted = narrative.clone().fit_to_budget(&NarrativeConfig::default());
    assert_eq!(fitted, narrative);
}

#[test]
fn test_budget_with_custom_ratio() {
    let config = NarrativeConfig {
        token_budget: 5,
        chars_per_token: 2,
    };
    assert!(check_token_budget_with("0123456789", &config).within_budget);

    let over = check_token_budget_with("0123456789ab", &config);
    assert_eq!(over.estimated_tokens, 6);
    assert!(!over.within_budget);
}
