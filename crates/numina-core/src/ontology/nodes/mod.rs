//! Node types for the correspondence graph.
//!
//! Nodes represent fixed symbolic vocabulary. They are organized by domain:
//!
//! - **Symbolic**: Numbers, Archetypes
//! - **Celestial**: Planets, Zodiac signs, Houses
//! - **Elemental**: Elements, Platonic solids, Modalities

mod celestial;
mod elemental;
mod symbolic;

pub use celestial::*;
pub use elemental::*;
pub use symbolic::*;

use serde::{Deserialize, Serialize};

use super::{NodeKey, NodeKind};

/// A unified node type that can hold any entity in the correspondence graph.
///
/// Matching on this enum is exhaustive, so a new domain cannot be added
/// without every consumer being updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node_type", rename_all = "kebab-case")]
pub enum GraphNode {
    // === Symbolic Nodes ===
    /// A single digit, 0 through 9
    Number(NumberNode),
    /// A psychological archetype
    Archetype(ArchetypeNode),

    // === Celestial Nodes ===
    /// One of the nine planets (luminaries included)
    Planet(PlanetNode),
    /// One of the twelve signs
    ZodiacSign(ZodiacSignNode),
    /// One of the twelve houses
    House(HouseNode),

    // === Elemental Nodes ===
    /// Fire, water, air, earth or ether
    Element(ElementNode),
    /// A Platonic solid
    Geometry(GeometryNode),
    /// Cardinal, fixed or mutable
    Modality(ModalityNode),
}

impl GraphNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Number(_) => NodeKind::Number,
            Self::Archetype(_) => NodeKind::Archetype,
            Self::Planet(_) => NodeKind::Planet,
            Self::ZodiacSign(_) => NodeKind::ZodiacSign,
            Self::House(_) => NodeKind::House,
            Self::Element(_) => NodeKind::Element,
            Self::Geometry(_) => NodeKind::Geometry,
            Self::Modality(_) => NodeKind::Modality,
        }
    }

    /// The id, unique within this node's kind.
    pub fn id(&self) -> &str {
        match self {
            Self::Number(n) => &n.id,
            Self::Archetype(n) => &n.id,
            Self::Planet(n) => &n.id,
            Self::ZodiacSign(n) => &n.id,
            Self::House(n) => &n.id,
            Self::Element(n) => &n.id,
            Self::Geometry(n) => &n.id,
            Self::Modality(n) => &n.id,
        }
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &str {
        match self {
            Self::Number(n) => &n.id,
            Self::Archetype(n) => &n.name,
            Self::Planet(n) => &n.name,
            Self::ZodiacSign(n) => &n.name,
            Self::House(n) => &n.life_area,
            Self::Element(n) => &n.name,
            Self::Geometry(n) => &n.name,
            Self::Modality(n) => &n.name,
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::new(self.kind(), self.id())
    }
}
