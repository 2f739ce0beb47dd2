//! Pattern synthesis: combine digit-level lookups with graph traversal.
//!
//! Digit facts (planet, element, geometry) come straight from the digit table;
//! multi-hop relationships (signs, solids, archetypes) come from a traversal
//! seeded with the pattern's digits. The combined [`SynthesisResult`] carries a
//! ready-made narrative.
//!
//! # Example
//!
//! ```
//! use numina_core::graph;
//! use numina_core::synthesis::{synthesize, ChartProfile};
//! use numina_core::tables::Element;
//!
//! let graph = graph::shared();
//! let profile = ChartProfile::new(Element::Fire).with_sun("leo");
//! let result = synthesize(&graph, "111", Some(&profile));
//! assert_eq!(result.metadata.primary_planet, "sun");
//! assert!(result.narrative.contains("Agrippa"));
//! ```

pub mod narrative;
pub mod pattern;
pub mod special;

pub use narrative::{
    build_narrative, check_token_budget, check_token_budget_with, estimate_tokens, Narrative,
    NarrativeSection, SectionKind, TokenBudget,
};
pub use pattern::{
    analyze, digits_of, dominant_digit, unique_digits, Pattern, PatternAnalysis, PatternShape,
};
pub use special::{special_number, SpecialKind, SpecialNumber};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::graph::{CorrespondenceGraph, TraversalQuery, TraversalResult};
use crate::ontology::{NodeKey, NodeKind};
use crate::tables::{digit_correspondence, Element};

/// Node kinds a synthesis traversal may discover.
pub const SYNTHESIS_TARGETS: [NodeKind; 5] = [
    NodeKind::Planet,
    NodeKind::Element,
    NodeKind::Geometry,
    NodeKind::ZodiacSign,
    NodeKind::Archetype,
];

/// Planet, symbol and element used when a pattern has no non-zero digit.
const DEFAULT_PRIMARY: (&str, &str, Element) = ("sun", "☉", Element::Fire);

// =============================================================================
// PERSONAL CHART
// =============================================================================

/// The parts of a personal chart that synthesis can relate to a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartProfile {
    pub dominant_element: Element,
    #[serde(default)]
    pub sun_sign: Option<String>,
    #[serde(default)]
    pub moon_sign: Option<String>,
    #[serde(default)]
    pub rising_sign: Option<String>,
}

impl ChartProfile {
    pub fn new(dominant_element: Element) -> Self {
        Self {
            dominant_element,
            sun_sign: None,
            moon_sign: None,
            rising_sign: None,
        }
    }

    pub fn with_sun(mut self, sign: impl Into<String>) -> Self {
        self.sun_sign = Some(sign.into());
        self
    }

    pub fn with_moon(mut self, sign: impl Into<String>) -> Self {
        self.moon_sign = Some(sign.into());
        self
    }

    pub fn with_rising(mut self, sign: impl Into<String>) -> Self {
        self.rising_sign = Some(sign.into());
        self
    }

    /// Named placements in sun, moon, rising order, without repeats.
    pub fn placements(&self) -> Vec<String> {
        let mut signs: Vec<String> = Vec::new();
        for sign in [&self.sun_sign, &self.moon_sign, &self.rising_sign]
            .into_iter()
            .flatten()
        {
            let sign = sign.trim().to_ascii_lowercase();
            if !sign.is_empty() && !signs.contains(&sign) {
                signs.push(sign);
            }
        }
        signs
    }
}

/// How a chart's dominant element sits with a pattern's primary element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementAlignment {
    /// Same element
    Harmonious,
    /// Neither the same nor opposed
    Complementary,
    /// Fire/water or air/earth
    Challenging,
}

impl ElementAlignment {
    pub fn between(pattern: Element, profile: Element) -> Self {
        if pattern == profile {
            ElementAlignment::Harmonious
        } else if pattern.opposite() == Some(profile) {
            ElementAlignment::Challenging
        } else {
            ElementAlignment::Complementary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementAlignment::Harmonious => "harmonious",
            ElementAlignment::Complementary => "complementary",
            ElementAlignment::Challenging => "challenging",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalConnection {
    pub alignment: ElementAlignment,
    pub profile_element: Element,
    pub related_signs: Vec<String>,
}

impl PersonalConnection {
    pub fn new(pattern_element: Element, profile: &ChartProfile) -> Self {
        Self {
            alignment: ElementAlignment::between(pattern_element, profile.dominant_element),
            profile_element: profile.dominant_element,
            related_signs: profile.placements(),
        }
    }
}

// =============================================================================
// SYNTHESIS RESULT
// =============================================================================

/// Everything derived about a pattern, independent of any chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub pattern: String,
    pub dominant_digit: u8,
    pub unique_digits: Vec<u8>,
    pub primary_planet: String,
    pub planet_symbol: String,
    pub primary_element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    pub elements: BTreeSet<Element>,
    pub planets: BTreeSet<String>,
    /// Archetype slugs reached by the traversal, in discovery order
    pub archetypes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<SpecialNumber>,
    pub analysis: PatternAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub metadata: PatternMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalConnection>,
    pub traversal: TraversalResult,
    pub narrative: String,
}

/// Synthesize a pattern with the default configuration.
///
/// Non-digit characters in `pattern` are ignored. Never fails; an empty or
/// all-zero pattern produces a minimal result around the Sun.
pub fn synthesize(
    graph: &CorrespondenceGraph,
    pattern: &str,
    profile: Option<&ChartProfile>,
) -> SynthesisResult {
    synthesize_with_config(graph, pattern, profile, &SynthesisConfig::default())
}

pub fn synthesize_with_config(
    graph: &CorrespondenceGraph,
    pattern: &str,
    profile: Option<&ChartProfile>,
    config: &SynthesisConfig,
) -> SynthesisResult {
    let pattern = pattern.trim();
    let digits = digits_of(pattern);
    let dominant = dominant_digit(&digits);
    let unique = unique_digits(&digits);
    let digit_string: String = digits.iter().map(|d| char::from(b'0' + d)).collect();

    let primary = digit_correspondence(dominant);
    let (primary_planet, planet_symbol, primary_element) = primary
        .map(|c| (c.planet, c.symbol, c.element))
        .unwrap_or(DEFAULT_PRIMARY);
    let geometry = primary.and_then(|c| c.geometry).map(str::to_string);

    let mut planets = BTreeSet::new();
    let mut elements = BTreeSet::new();
    for &digit in &unique {
        if digit == 0 {
            elements.insert(Element::Ether);
        } else if let Some(c) = digit_correspondence(digit) {
            planets.insert(c.planet.to_string());
            elements.insert(c.element);
        }
    }

    let query = TraversalQuery::new(unique.iter().map(|&d| NodeKey::number(d)))
        .max_depth(config.depth)
        .min_weight(config.min_weight)
        .target_kinds(SYNTHESIS_TARGETS);
    let traversal = graph.traverse(&query);

    let archetypes = traversal
        .nodes_of_kind(NodeKind::Archetype)
        .map(|n| n.id().to_string())
        .collect();

    let metadata = PatternMetadata {
        pattern: pattern.to_string(),
        dominant_digit: dominant,
        unique_digits: unique,
        primary_planet: primary_planet.to_string(),
        planet_symbol: planet_symbol.to_string(),
        primary_element,
        geometry,
        elements,
        planets,
        archetypes,
        special: special_number(&digit_string),
        analysis: analyze(&digits),
    };
    let personal = profile.map(|p| PersonalConnection::new(primary_element, p));
    let narrative = build_narrative(&metadata, personal.as_ref());

    debug!(
        pattern = %metadata.pattern,
        dominant = metadata.dominant_digit,
        planet = %metadata.primary_planet,
        reached = traversal.nodes.len(),
        "synthesized pattern"
    );

    SynthesisResult {
        metadata,
        personal,
        traversal,
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_classification() {
        use Element::*;
        assert_eq!(ElementAlignment::between(Fire, Fire), ElementAlignment::Harmonious);
        assert_eq!(ElementAlignment::between(Fire, Water), ElementAlignment::Challenging);
        assert_eq!(ElementAlignment::between(Air, Earth), ElementAlignment::Challenging);
        assert_eq!(ElementAlignment::between(Fire, Air), ElementAlignment::Complementary);
        assert_eq!(ElementAlignment::between(Ether, Fire), ElementAlignment::Complementary);
    }

    #[test]
    fn test_placements_order_and_dedup() {
        let profile = ChartProfile::new(Element::Water)
            .with_sun("Leo")
            .with_moon("cancer")
            .with_rising("leo");
        assert_eq!(profile.placements(), vec!["leo", "cancer"]);
        assert!(ChartProfile::new(Element::Air).placements().is_empty());
    }
}
