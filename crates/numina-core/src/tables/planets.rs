//! Planetary metadata and essential dignities.

use serde::{Deserialize, Serialize};

use super::elements::Element;

/// Traditional benefic / malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetNature {
    Benefic,
    Malefic,
    Variable,
}

impl PlanetNature {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetNature::Benefic => "benefic",
            PlanetNature::Malefic => "malefic",
            PlanetNature::Variable => "variable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub weekday: Option<&'static str>,
    pub archetype: &'static str,
    pub nature: PlanetNature,
}

pub const PLANETS: [PlanetInfo; 9] = [
    PlanetInfo {
        id: "sun",
        name: "Sun",
        symbol: "☉",
        element: Element::Fire,
        weekday: Some("Sunday"),
        archetype: "The Sovereign",
        nature: PlanetNature::Benefic,
    },
    PlanetInfo {
        id: "moon",
        name: "Moon",
        symbol: "☽",
        element: Element::Water,
        weekday: Some("Monday"),
        archetype: "The Mother",
        nature: PlanetNature::Benefic,
    },
    PlanetInfo {
        id: "mercury",
        name: "Mercury",
        symbol: "☿",
        element: Element::Air,
        weekday: Some("Wednesday"),
        archetype: "The Messenger",
        nature: PlanetNature::Variable,
    },
    PlanetInfo {
        id: "venus",
        name: "Venus",
        symbol: "♀",
        element: Element::Earth,
        weekday: Some("Friday"),
        archetype: "The Lover",
        nature: PlanetNature::Benefic,
    },
    PlanetInfo {
        id: "mars",
        name: "Mars",
        symbol: "♂",
        element: Element::Fire,
        weekday: Some("Tuesday"),
        archetype: "The Warrior",
        nature: PlanetNature::Malefic,
    },
    PlanetInfo {
        id: "jupiter",
        name: "Jupiter",
        symbol: "♃",
        element: Element::Fire,
        weekday: Some("Thursday"),
        archetype: "The Sage",
        nature: PlanetNature::Benefic,
    },
    PlanetInfo {
        id: "saturn",
        name: "Saturn",
        symbol: "♄",
        element: Element::Earth,
        weekday: Some("Saturday"),
        archetype: "The Elder",
        nature: PlanetNature::Malefic,
    },
    PlanetInfo {
        id: "uranus",
        name: "Uranus",
        symbol: "♅",
        element: Element::Air,
        weekday: None,
        archetype: "The Rebel",
        nature: PlanetNature::Variable,
    },
    PlanetInfo {
        id: "neptune",
        name: "Neptune",
        symbol: "♆",
        element: Element::Water,
        weekday: None,
        archetype: "The Mystic",
        nature: PlanetNature::Variable,
    },
];

pub fn planets() -> &'static [PlanetInfo] {
    &PLANETS
}

pub fn planet(id: &str) -> Option<&'static PlanetInfo> {
    PLANETS.iter().find(|p| p.id == id)
}

/// A planet's dignity (or debility) in a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dignity {
    pub planet: &'static str,
    pub sign: &'static str,
}

const fn dignity(planet: &'static str, sign: &'static str) -> Dignity {
    Dignity { planet, sign }
}

/// Domicile rulerships, traditional and modern. Saturn and Uranus share
/// Aquarius, Jupiter and Neptune share Pisces.
pub const RULERSHIPS: [Dignity; 14] = [
    dignity("sun", "leo"),
    dignity("moon", "cancer"),
    dignity("mercury", "gemini"),
    dignity("mercury", "virgo"),
    dignity("venus", "taurus"),
    dignity("venus", "libra"),
    dignity("mars", "aries"),
    dignity("mars", "scorpio"),
    dignity("jupiter", "sagittarius"),
    dignity("jupiter", "pisces"),
    dignity("saturn", "capricorn"),
    dignity("saturn", "aquarius"),
    dignity("uranus", "aquarius"),
    dignity("neptune", "pisces"),
];

/// Exaltations of the seven classical planets. One sign per planet.
pub const EXALTATIONS: [Dignity; 7] = [
    dignity("sun", "aries"),
    dignity("moon", "taurus"),
    dignity("mercury", "virgo"),
    dignity("venus", "pisces"),
    dignity("mars", "capricorn"),
    dignity("jupiter", "cancer"),
    dignity("saturn", "libra"),
];

/// Detriments: the signs opposite each rulership.
pub const DETRIMENTS: [Dignity; 14] = [
    dignity("sun", "aquarius"),
    dignity("moon", "capricorn"),
    dignity("mercury", "sagittarius"),
    dignity("mercury", "pisces"),
    dignity("venus", "scorpio"),
    dignity("venus", "aries"),
    dignity("mars", "libra"),
    dignity("mars", "taurus"),
    dignity("jupiter", "gemini"),
    dignity("jupiter", "virgo"),
    dignity("saturn", "cancer"),
    dignity("saturn", "leo"),
    dignity("uranus", "leo"),
    dignity("neptune", "virgo"),
];

/// Falls: the signs opposite each exaltation.
pub const FALLS: [Dignity; 7] = [
    dignity("sun", "libra"),
    dignity("moon", "scorpio"),
    dignity("mercury", "pisces"),
    dignity("venus", "virgo"),
    dignity("mars", "cancer"),
    dignity("jupiter", "capricorn"),
    dignity("saturn", "aries"),
];
