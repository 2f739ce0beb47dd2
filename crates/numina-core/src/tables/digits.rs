//! Digit → planet / element correspondences for the digits 1 through 9.
//!
//! Zero is deliberately absent: it has no ruling planet and is handled as ether
//! by the callers that need it.

use crate::ontology::Confidence;

use super::elements::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCorrespondence {
    pub digit: u8,
    pub planet: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub confidence: Confidence,
    /// Platonic solid whose face count echoes the digit, where one does.
    pub geometry: Option<&'static str>,
    pub traits: &'static [&'static str],
    pub traditions: &'static [&'static str],
}

pub const DIGIT_CORRESPONDENCES: [DigitCorrespondence; 9] = [
    DigitCorrespondence {
        digit: 1,
        planet: "sun",
        symbol: "☉",
        element: Element::Fire,
        confidence: Confidence::VeryHigh,
        geometry: None,
        traits: &["leadership", "vitality", "individuality"],
        traditions: &["Chaldean", "Pythagorean", "Agrippa"],
    },
    DigitCorrespondence {
        digit: 2,
        planet: "moon",
        symbol: "☽",
        element: Element::Water,
        confidence: Confidence::VeryHigh,
        geometry: None,
        traits: &["receptivity", "intuition", "partnership"],
        traditions: &["Chaldean", "Pythagorean", "Agrippa"],
    },
    DigitCorrespondence {
        digit: 3,
        planet: "jupiter",
        symbol: "♃",
        element: Element::Fire,
        confidence: Confidence::High,
        geometry: None,
        traits: &["expansion", "optimism", "expression"],
        traditions: &["Chaldean", "Agrippa"],
    },
    DigitCorrespondence {
        digit: 4,
        planet: "uranus",
        symbol: "♅",
        element: Element::Air,
        confidence: Confidence::Moderate,
        geometry: Some("tetrahedron"),
        traits: &["structure", "disruption", "innovation"],
        traditions: &["Modern Chaldean"],
    },
    DigitCorrespondence {
        digit: 5,
        planet: "mercury",
        symbol: "☿",
        element: Element::Air,
        confidence: Confidence::High,
        geometry: Some("dodecahedron"),
        traits: &["communication", "versatility", "curiosity"],
        traditions: &["Chaldean", "Agrippa"],
    },
    DigitCorrespondence {
        digit: 6,
        planet: "venus",
        symbol: "♀",
        element: Element::Earth,
        confidence: Confidence::High,
        geometry: Some("cube"),
        traits: &["harmony", "beauty", "devotion"],
        traditions: &["Chaldean", "Agrippa"],
    },
    DigitCorrespondence {
        digit: 7,
        planet: "neptune",
        symbol: "♆",
        element: Element::Water,
        confidence: Confidence::Moderate,
        geometry: None,
        traits: &["mysticism", "introspection", "dreams"],
        traditions: &["Modern Chaldean"],
    },
    DigitCorrespondence {
        digit: 8,
        planet: "saturn",
        symbol: "♄",
        element: Element::Earth,
        confidence: Confidence::VeryHigh,
        geometry: Some("octahedron"),
        traits: &["discipline", "authority", "endurance"],
        traditions: &["Chaldean", "Pythagorean", "Agrippa"],
    },
    DigitCorrespondence {
        digit: 9,
        planet: "mars",
        symbol: "♂",
        element: Element::Fire,
        confidence: Confidence::High,
        geometry: None,
        traits: &["courage", "drive", "completion"],
        traditions: &["Chaldean", "Agrippa"],
    },
];

/// Look up the correspondence for a digit. `None` for 0 and anything above 9.
pub fn digit_correspondence(digit: u8) -> Option<&'static DigitCorrespondence> {
    DIGIT_CORRESPONDENCES.iter().find(|c| c.digit == digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_bounds() {
        assert!(digit_correspondence(0).is_none());
        assert!(digit_correspondence(10).is_none());
        for digit in 1..=9 {
            assert_eq!(digit_correspondence(digit).map(|c| c.digit), Some(digit));
        }
    }

    #[test]
    fn test_every_digit_maps_to_a_known_planet() {
        for c in &DIGIT_CORRESPONDENCES {
            let planet = crate::tables::planet(c.planet).expect("known planet");
            assert_eq!(planet.symbol, c.symbol);
        }
    }
}
