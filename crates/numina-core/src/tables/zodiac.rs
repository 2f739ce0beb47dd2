//! Zodiac sign metadata and the three modalities.

use serde::{Deserialize, Serialize};

use super::elements::Element;

/// Cardinal, fixed or mutable quality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn id(&self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        }
    }

    pub fn meaning(&self) -> &'static str {
        match self {
            Modality::Cardinal => "initiation, leadership and the start of each season",
            Modality::Fixed => "persistence, consolidation and the height of each season",
            Modality::Mutable => "adaptation, transition and the turning of each season",
        }
    }
}

pub fn modalities() -> &'static [Modality] {
    &Modality::ALL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub element: Element,
    pub modality: Modality,
    /// Modern ruling planet id.
    pub ruler: &'static str,
}

/// Signs in zodiacal order. Position + 1 is the sign's natural house.
pub const ZODIAC_SIGNS: [ZodiacInfo; 12] = [
    ZodiacInfo {
        id: "aries",
        name: "Aries",
        glyph: "♈",
        element: Element::Fire,
        modality: Modality::Cardinal,
        ruler: "mars",
    },
    ZodiacInfo {
        id: "taurus",
        name: "Taurus",
        glyph: "♉",
        element: Element::Earth,
        modality: Modality::Fixed,
        ruler: "venus",
    },
    ZodiacInfo {
        id: "gemini",
        name: "Gemini",
        glyph: "♊",
        element: Element::Air,
        modality: Modality::Mutable,
        ruler: "mercury",
    },
    ZodiacInfo {
        id: "cancer",
        name: "Cancer",
        glyph: "♋",
        element: Element::Water,
        modality: Modality::Cardinal,
        ruler: "moon",
    },
    ZodiacInfo {
        id: "leo",
        name: "Leo",
        glyph: "♌",
        element: Element::Fire,
        modality: Modality::Fixed,
        ruler: "sun",
    },
    ZodiacInfo {
        id: "virgo",
        name: "Virgo",
        glyph: "♍",
        element: Element::Earth,
        modality: Modality::Mutable,
        ruler: "mercury",
    },
    ZodiacInfo {
        id: "libra",
        name: "Libra",
        glyph: "♎",
        element: Element::Air,
        modality: Modality::Cardinal,
        ruler: "venus",
    },
    ZodiacInfo {
        id: "scorpio",
        name: "Scorpio",
        glyph: "♏",
        element: Element::Water,
        modality: Modality::Fixed,
        ruler: "mars",
    },
    ZodiacInfo {
        id: "sagittarius",
        name: "Sagittarius",
        glyph: "♐",
        element: Element::Fire,
        modality: Modality::Mutable,
        ruler: "jupiter",
    },
    ZodiacInfo {
        id: "capricorn",
        name: "Capricorn",
        glyph: "♑",
        element: Element::Earth,
        modality: Modality::Cardinal,
        ruler: "saturn",
    },
    ZodiacInfo {
        id: "aquarius",
        name: "Aquarius",
        glyph: "♒",
        element: Element::Air,
        modality: Modality::Fixed,
        ruler: "uranus",
    },
    ZodiacInfo {
        id: "pisces",
        name: "Pisces",
        glyph: "♓",
        element: Element::Water,
        modality: Modality::Mutable,
        ruler: "neptune",
    },
];

pub fn zodiac_signs() -> &'static [ZodiacInfo] {
    &ZODIAC_SIGNS
}

pub fn zodiac_sign(id: &str) -> Option<&'static ZodiacInfo> {
    ZODIAC_SIGNS.iter().find(|s| s.id == id)
}

/// Natural house of a sign: Aries = 1 through Pisces = 12.
pub fn natural_house(id: &str) -> Option<u8> {
    ZODIAC_SIGNS
        .iter()
        .position(|s| s.id == id)
        .map(|i| i as u8 + 1)
}
