//! Correspondence Graph Ontology
//!
//! Defines the closed vocabulary of the graph: which kinds of nodes exist,
//! which relationships may connect them, and how nodes are addressed.
//!
//! ## Modules
//!
//! - `nodes/` - Entity types: Symbolic (Number, Archetype), Celestial (Planet,
//!   ZodiacSign, House), Elemental (Element, Geometry, Modality)
//! - `edges` - The single weighted, typed edge record shared by every family
//!
//! Every node is addressed by a [`NodeKey`], the `(kind, id)` pair. Ids are only
//! unique within a kind, so `number:1` and `house:1` are different nodes.

pub mod edges;
pub mod nodes;

pub use edges::*;
pub use nodes::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The kind of a node. Closed: adding a domain means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Number,
    Planet,
    Element,
    Geometry,
    ZodiacSign,
    House,
    Archetype,
    Modality,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Number,
        NodeKind::Planet,
        NodeKind::Element,
        NodeKind::Geometry,
        NodeKind::ZodiacSign,
        NodeKind::House,
        NodeKind::Archetype,
        NodeKind::Modality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Number => "number",
            NodeKind::Planet => "planet",
            NodeKind::Element => "element",
            NodeKind::Geometry => "geometry",
            NodeKind::ZodiacSign => "zodiac-sign",
            NodeKind::House => "house",
            NodeKind::Archetype => "archetype",
            NodeKind::Modality => "modality",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            // "sign" and "zodiac" are accepted as shorthands
            "sign" | "zodiac" => Ok(NodeKind::ZodiacSign),
            other => NodeKind::ALL
                .into_iter()
                .find(|k| k.as_str() == other)
                .ok_or_else(|| ParseError::UnknownKind(s.to_string())),
        }
    }
}

/// Global address of a node: its kind plus an id unique within that kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    pub kind: NodeKind,
    pub id: String,
}

impl NodeKey {
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn number(digit: u8) -> Self {
        Self::new(NodeKind::Number, digit.to_string())
    }

    pub fn planet(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Planet, id)
    }

    pub fn element(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Element, id)
    }

    pub fn geometry(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Geometry, id)
    }

    pub fn sign(id: impl Into<String>) -> Self {
        Self::new(NodeKind::ZodiacSign, id)
    }

    pub fn house(number: u8) -> Self {
        Self::new(NodeKind::House, number.to_string())
    }

    pub fn archetype(slug: impl Into<String>) -> Self {
        Self::new(NodeKind::Archetype, slug)
    }

    pub fn modality(id: impl Into<String>) -> Self {
        Self::new(NodeKind::Modality, id)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for NodeKey {
    type Err = ParseError;

    /// Parses `kind:id`, e.g. `planet:sun` or `zodiac-sign:leo`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedKey(s.to_string()))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(ParseError::MalformedKey(s.to_string()));
        }
        Ok(NodeKey::new(kind.parse()?, id.to_ascii_lowercase()))
    }
}

/// Confidence tier of a traditional correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    VeryHigh,
    High,
    Moderate,
}

impl Confidence {
    /// Edge weight derived from the tier: very-high 10, high 9, anything else 7.
    pub fn weight(&self) -> u8 {
        match self {
            Confidence::VeryHigh => 10,
            Confidence::High => 9,
            Confidence::Moderate => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::VeryHigh => "very-high",
            Confidence::High => "high",
            Confidence::Moderate => "moderate",
        }
    }
}
