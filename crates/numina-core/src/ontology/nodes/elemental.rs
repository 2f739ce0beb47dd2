//! Elemental entity nodes: Elements, Platonic solids, Modalities.

use serde::{Deserialize, Serialize};

// =============================================================================
// ELEMENT NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    pub id: String,
    pub name: String,
    pub symbol: String,

    /// Aristotelian qualities, e.g. ["hot", "dry"]
    pub qualities: Vec<String>,

    /// Id of the Platonic solid embodying this element
    pub geometry: String,
}

// =============================================================================
// GEOMETRY NODE
// =============================================================================

/// A Platonic solid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryNode {
    pub id: String,
    pub name: String,
    pub faces: u8,
    pub face_shape: String,
    pub element: String,
}

// =============================================================================
// MODALITY NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityNode {
    pub id: String,
    pub name: String,
    pub meaning: String,

    /// Ids of the four signs sharing this modality, in zodiacal order
    pub signs: Vec<String>,
}
