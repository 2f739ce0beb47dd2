//! The five elements and the Platonic solids that embody them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A classical element. Ether is the fifth, used for the digit zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
    Ether,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Air,
        Element::Earth,
        Element::Ether,
    ];

    /// Node id for this element.
    pub fn id(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Ether => "ether",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
            Element::Ether => "Ether",
        }
    }

    /// Alchemical symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Fire => "🜂",
            Element::Water => "🜄",
            Element::Air => "🜁",
            Element::Earth => "🜃",
            Element::Ether => "🜀",
        }
    }

    /// The two Aristotelian qualities of the element.
    pub fn qualities(&self) -> [&'static str; 2] {
        match self {
            Element::Fire => ["hot", "dry"],
            Element::Water => ["cold", "wet"],
            Element::Air => ["hot", "wet"],
            Element::Earth => ["cold", "dry"],
            Element::Ether => ["subtle", "balanced"],
        }
    }

    /// The traditionally opposing element, if any.
    ///
    /// Fire opposes water and air opposes earth. Ether has no opposite.
    pub fn opposite(&self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Water),
            Element::Water => Some(Element::Fire),
            Element::Air => Some(Element::Earth),
            Element::Earth => Some(Element::Air),
            Element::Ether => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Element {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.id() == lowered)
            .ok_or_else(|| ParseError::UnknownElement(s.to_string()))
    }
}

/// A Platonic solid and the element it embodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatonicSolid {
    pub id: &'static str,
    pub name: &'static str,
    pub faces: u8,
    pub face_shape: &'static str,
    pub element: Element,
}

pub const PLATONIC_SOLIDS: [PlatonicSolid; 5] = [
    PlatonicSolid {
        id: "tetrahedron",
        name: "Tetrahedron",
        faces: 4,
        face_shape: "triangle",
        element: Element::Fire,
    },
    PlatonicSolid {
        id: "icosahedron",
        name: "Icosahedron",
        faces: 20,
        face_shape: "triangle",
        element: Element::Water,
    },
    PlatonicSolid {
        id: "octahedron",
        name: "Octahedron",
        faces: 8,
        face_shape: "triangle",
        element: Element::Air,
    },
    PlatonicSolid {
        id: "cube",
        name: "Cube",
        faces: 6,
        face_shape: "square",
        element: Element::Earth,
    },
    PlatonicSolid {
        id: "dodecahedron",
        name: "Dodecahedron",
        faces: 12,
        face_shape: "pentagon",
        element: Element::Ether,
    },
];

/// The solid corresponding to an element. Every element has exactly one.
pub fn platonic_solid_for(element: Element) -> &'static PlatonicSolid {
    match element {
        Element::Fire => &PLATONIC_SOLIDS[0],
        Element::Water => &PLATONIC_SOLIDS[1],
        Element::Air => &PLATONIC_SOLIDS[2],
        Element::Earth => &PLATONIC_SOLIDS[3],
        Element::Ether => &PLATONIC_SOLIDS[4],
    }
}

/// Look up a solid by id.
pub fn platonic_solid(id: &str) -> Option<&'static PlatonicSolid> {
    PLATONIC_SOLIDS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_for_each_element_round_trips() {
        for element in Element::ALL {
            assert_eq!(platonic_solid_for(element).element, element);
        }
    }

    #[test]
    fn test_opposites_are_symmetric() {
        for element in Element::ALL {
            if let Some(opposite) = element.opposite() {
                assert_eq!(opposite.opposite(), Some(element));
            }
        }
        assert_eq!(Element::Ether.opposite(), None);
    }

    #[test]
    fn test_parse_element() {
        assert_eq!("Fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!(" ether ".parse::<Element>(), Ok(Element::Ether));
        assert!(matches!(
            "plasma".parse::<Element>(),
            Err(ParseError::UnknownElement(_))
        ));
    }
}
