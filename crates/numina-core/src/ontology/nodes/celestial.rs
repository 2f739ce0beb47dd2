//! Celestial entity nodes: Planets, Zodiac signs, Houses.

use serde::{Deserialize, Serialize};

use crate::tables::PlanetNature;

// =============================================================================
// PLANET NODE
// =============================================================================

/// A planet. The Sun and Moon are included as luminaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetNode {
    pub id: String,
    pub name: String,

    /// Astronomical symbol (e.g. "☉")
    pub symbol: String,

    /// Element the planet rules
    pub element: String,

    /// Day of the week, for the seven classical planets
    pub weekday: Option<String>,

    /// Archetype label (e.g. "The Warrior")
    pub archetype: String,

    pub nature: PlanetNature,
}

// =============================================================================
// ZODIAC SIGN NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacSignNode {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub element: String,
    pub modality: String,

    /// Modern ruling planet id
    pub ruler: String,

    /// Natural house number, Aries = 1
    pub house: u8,
}

// =============================================================================
// HOUSE NODE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseNode {
    /// House number rendered as a string ("1".."12")
    pub id: String,
    pub number: u8,
    pub life_area: String,
    pub keywords: Vec<String>,
}
