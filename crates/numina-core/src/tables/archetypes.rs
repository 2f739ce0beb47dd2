//! The archetype catalog.
//!
//! Not every archetype has a planetary, zodiacal or elemental correspondence;
//! missing ones are `None` and simply produce fewer edges.

use crate::ontology::Confidence;

use super::elements::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub number: u8,
    pub element: Option<Element>,
    pub planet: Option<&'static str>,
    pub zodiac: Option<&'static str>,
    pub confidence: Confidence,
    pub keywords: &'static [&'static str],
}

pub const ARCHETYPES: [ArchetypeInfo; 12] = [
    ArchetypeInfo {
        slug: "innocent",
        name: "The Innocent",
        number: 0,
        element: Some(Element::Ether),
        planet: None,
        zodiac: None,
        confidence: Confidence::Moderate,
        keywords: &["potential", "trust", "openness"],
    },
    ArchetypeInfo {
        slug: "hero",
        name: "The Hero",
        number: 1,
        element: Some(Element::Fire),
        planet: Some("sun"),
        zodiac: Some("leo"),
        confidence: Confidence::VeryHigh,
        keywords: &["courage", "selfhood", "radiance"],
    },
    ArchetypeInfo {
        slug: "caregiver",
        name: "The Caregiver",
        number: 2,
        element: Some(Element::Water),
        planet: Some("moon"),
        zodiac: Some("cancer"),
        confidence: Confidence::VeryHigh,
        keywords: &["nurture", "protection", "empathy"],
    },
    ArchetypeInfo {
        slug: "sage",
        name: "The Sage",
        number: 3,
        element: Some(Element::Fire),
        planet: Some("jupiter"),
        zodiac: Some("sagittarius"),
        confidence: Confidence::High,
        keywords: &["wisdom", "faith", "teaching"],
    },
    ArchetypeInfo {
        slug: "rebel",
        name: "The Rebel",
        number: 4,
        element: Some(Element::Air),
        planet: Some("uranus"),
        zodiac: Some("aquarius"),
        confidence: Confidence::High,
        keywords: &["liberation", "revolution", "originality"],
    },
    ArchetypeInfo {
        slug: "magician",
        name: "The Magician",
        number: 5,
        element: Some(Element::Air),
        planet: Some("mercury"),
        zodiac: Some("gemini"),
        confidence: Confidence::High,
        keywords: &["skill", "transformation", "wit"],
    },
    ArchetypeInfo {
        slug: "lover",
        name: "The Lover",
        number: 6,
        element: Some(Element::Earth),
        planet: Some("venus"),
        zodiac: Some("taurus"),
        confidence: Confidence::VeryHigh,
        keywords: &["intimacy", "beauty", "devotion"],
    },
    ArchetypeInfo {
        slug: "mystic",
        name: "The Mystic",
        number: 7,
        element: Some(Element::Water),
        planet: Some("neptune"),
        zodiac: Some("pisces"),
        confidence: Confidence::Moderate,
        keywords: &["vision", "surrender", "unity"],
    },
    ArchetypeInfo {
        slug: "ruler",
        name: "The Ruler",
        number: 8,
        element: Some(Element::Earth),
        planet: Some("saturn"),
        zodiac: Some("capricorn"),
        confidence: Confidence::High,
        keywords: &["order", "responsibility", "mastery"],
    },
    ArchetypeInfo {
        slug: "warrior",
        name: "The Warrior",
        number: 9,
        element: Some(Element::Fire),
        planet: Some("mars"),
        zodiac: Some("aries"),
        confidence: Confidence::VeryHigh,
        keywords: &["action", "discipline", "protection"],
    },
    ArchetypeInfo {
        slug: "alchemist",
        name: "The Alchemist",
        number: 11,
        element: Some(Element::Water),
        planet: None,
        zodiac: Some("scorpio"),
        confidence: Confidence::Moderate,
        keywords: &["death", "rebirth", "depth"],
    },
    ArchetypeInfo {
        slug: "healer",
        name: "The Healer",
        number: 22,
        element: None,
        planet: None,
        zodiac: Some("virgo"),
        confidence: Confidence::Moderate,
        keywords: &["service", "restoration", "discernment"],
    },
];

pub fn archetypes() -> &'static [ArchetypeInfo] {
    &ARCHETYPES
}

pub fn archetype(slug: &str) -> Option<&'static ArchetypeInfo> {
    ARCHETYPES.iter().find(|a| a.slug == slug)
}
