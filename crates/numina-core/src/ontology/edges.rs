//! Edge types (relationships) for the correspondence graph.
//!
//! Every edge shares one record shape; the [`Relationship`] tag says what it means.
//! Relationships are grouped by the family that generates them:
//!
//! - **Numeric**: RESONATES_WITH, EXPRESSES_ELEMENT
//! - **Elemental**: MANIFESTS_AS
//! - **Dignity**: RULES, EXALTS_IN, DETRIMENT_IN, FALLS_IN
//! - **Zodiacal**: BELONGS_TO_ELEMENT, HAS_MODALITY, NATURALLY_RULES
//! - **Archetypal**: ARCHETYPE_CORRESPONDS_TO_{PLANET,ZODIAC,ELEMENT}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Confidence, NodeKey};
use crate::error::ParseError;

/// The closed vocabulary of relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    // === Numeric ===
    /// number → planet
    ResonatesWith,
    /// number → element
    ExpressesElement,

    // === Elemental ===
    /// element → geometry
    ManifestsAs,

    // === Dignity (directional, planet → sign) ===
    Rules,
    ExaltsIn,
    DetrimentIn,
    FallsIn,

    // === Zodiacal ===
    /// sign → element
    BelongsToElement,
    /// sign → modality
    HasModality,
    /// sign → house
    NaturallyRules,

    // === Archetypal ===
    ArchetypeCorrespondsToPlanet,
    ArchetypeCorrespondsToZodiac,
    ArchetypeCorrespondsToElement,
}

impl Relationship {
    pub const ALL: [Relationship; 13] = [
        Relationship::ResonatesWith,
        Relationship::ExpressesElement,
        Relationship::ManifestsAs,
        Relationship::Rules,
        Relationship::ExaltsIn,
        Relationship::DetrimentIn,
        Relationship::FallsIn,
        Relationship::BelongsToElement,
        Relationship::HasModality,
        Relationship::NaturallyRules,
        Relationship::ArchetypeCorrespondsToPlanet,
        Relationship::ArchetypeCorrespondsToZodiac,
        Relationship::ArchetypeCorrespondsToElement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResonatesWith => "resonates_with",
            Self::ExpressesElement => "expresses_element",
            Self::ManifestsAs => "manifests_as",
            Self::Rules => "rules",
            Self::ExaltsIn => "exalts_in",
            Self::DetrimentIn => "detriment_in",
            Self::FallsIn => "falls_in",
            Self::BelongsToElement => "belongs_to_element",
            Self::HasModality => "has_modality",
            Self::NaturallyRules => "naturally_rules",
            Self::ArchetypeCorrespondsToPlanet => "archetype_corresponds_to_planet",
            Self::ArchetypeCorrespondsToZodiac => "archetype_corresponds_to_zodiac",
            Self::ArchetypeCorrespondsToElement => "archetype_corresponds_to_element",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Relationship::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownRelationship(s.to_string()))
    }
}

/// A typed, weighted relationship between two nodes.
///
/// Edges default to bidirectional; call [`GraphEdge::directional`] for edges
/// that may only be followed from source to target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// `"{source}-{relationship}-{target}"`, e.g. `planet:sun-rules-zodiac-sign:leo`
    pub id: String,
    pub relationship: Relationship,
    pub source: NodeKey,
    pub target: NodeKey,
    pub bidirectional: bool,
    /// Strength of the correspondence, 6 to 10
    pub weight: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Free text used when narrating the relationship
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl GraphEdge {
    pub fn new(relationship: Relationship, source: NodeKey, target: NodeKey, weight: u8) -> Self {
        Self {
            id: edge_id(&source, relationship, &target),
            relationship,
            source,
            target,
            bidirectional: true,
            weight,
            confidence: None,
            context: None,
        }
    }

    pub fn directional(mut self) -> Self {
        self.bidirectional = false;
        self
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Build the human-readable id for an edge.
pub fn edge_id(source: &NodeKey, relationship: Relationship, target: &NodeKey) -> String {
    format!("{}-{}-{}", source, relationship, target)
}
