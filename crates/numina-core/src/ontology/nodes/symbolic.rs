//! Symbolic entity nodes: Numbers and Archetypes.

use serde::{Deserialize, Serialize};

use crate::ontology::Confidence;

// =============================================================================
// NUMBER NODE
// =============================================================================

/// A single digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberNode {
    /// The digit rendered as a string ("0".."9")
    pub id: String,

    pub digit: u8,

    /// Ruling planet id. Zero has none.
    pub planet: Option<String>,

    /// Element id; zero is ether
    pub element: String,

    /// Confidence of the digit's correspondence. Zero has none.
    pub confidence: Option<Confidence>,

    pub traits: Vec<String>,
}

// =============================================================================
// ARCHETYPE NODE
// =============================================================================

/// A psychological archetype from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeNode {
    /// Catalog slug
    pub id: String,

    pub name: String,

    /// Catalog number (not necessarily a single digit)
    pub number: u8,

    pub element: Option<String>,
    pub planet: Option<String>,
    pub zodiac: Option<String>,

    pub confidence: Confidence,
    pub keywords: Vec<String>,
}
