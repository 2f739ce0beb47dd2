//! The twelve astrological houses.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseInfo {
    pub number: u8,
    pub life_area: &'static str,
    pub keywords: &'static [&'static str],
}

pub const HOUSES: [HouseInfo; 12] = [
    HouseInfo {
        number: 1,
        life_area: "Self and identity",
        keywords: &["appearance", "beginnings", "temperament"],
    },
    HouseInfo {
        number: 2,
        life_area: "Resources and values",
        keywords: &["money", "possessions", "self-worth"],
    },
    HouseInfo {
        number: 3,
        life_area: "Communication and learning",
        keywords: &["siblings", "short journeys", "writing"],
    },
    HouseInfo {
        number: 4,
        life_area: "Home and roots",
        keywords: &["family", "ancestry", "foundations"],
    },
    HouseInfo {
        number: 5,
        life_area: "Creativity and pleasure",
        keywords: &["romance", "children", "play"],
    },
    HouseInfo {
        number: 6,
        life_area: "Work and health",
        keywords: &["service", "routine", "wellbeing"],
    },
    HouseInfo {
        number: 7,
        life_area: "Partnership",
        keywords: &["marriage", "contracts", "open enemies"],
    },
    HouseInfo {
        number: 8,
        life_area: "Transformation and shared resources",
        keywords: &["intimacy", "inheritance", "rebirth"],
    },
    HouseInfo {
        number: 9,
        life_area: "Philosophy and travel",
        keywords: &["higher learning", "faith", "long journeys"],
    },
    HouseInfo {
        number: 10,
        life_area: "Career and reputation",
        keywords: &["vocation", "status", "legacy"],
    },
    HouseInfo {
        number: 11,
        life_area: "Community and aspirations",
        keywords: &["friendship", "groups", "hopes"],
    },
    HouseInfo {
        number: 12,
        life_area: "The unconscious and retreat",
        keywords: &["solitude", "hidden matters", "transcendence"],
    },
];

pub fn houses() -> &'static [HouseInfo] {
    &HOUSES
}

pub fn house(number: u8) -> Option<&'static HouseInfo> {
    HOUSES.iter().find(|h| h.number == number)
}
