//! Numerically special patterns: the planetary magic squares of Agrippa.
//!
//! Each of the seven classical planets has a square of order 3 (Saturn) up to
//! 9 (Moon). A pattern that spells out a square's line constant or its total
//! earns an annotation in the narrative.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicSquare {
    pub planet: &'static str,
    pub planet_name: &'static str,
    pub order: u8,
    /// Sum of every row, column and diagonal
    pub constant: u32,
    /// Sum of every cell
    pub total: u32,
}

pub const MAGIC_SQUARES: [MagicSquare; 7] = [
    MagicSquare {
        planet: "saturn",
        planet_name: "Saturn",
        order: 3,
        constant: 15,
        total: 45,
    },
    MagicSquare {
        planet: "jupiter",
        planet_name: "Jupiter",
        order: 4,
        constant: 34,
        total: 136,
    },
    MagicSquare {
        planet: "mars",
        planet_name: "Mars",
        order: 5,
        constant: 65,
        total: 325,
    },
    MagicSquare {
        planet: "sun",
        planet_name: "Sun",
        order: 6,
        constant: 111,
        total: 666,
    },
    MagicSquare {
        planet: "venus",
        planet_name: "Venus",
        order: 7,
        constant: 175,
        total: 1225,
    },
    MagicSquare {
        planet: "mercury",
        planet_name: "Mercury",
        order: 8,
        constant: 260,
        total: 2080,
    },
    MagicSquare {
        planet: "moon",
        planet_name: "Moon",
        order: 9,
        constant: 369,
        total: 3321,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    MagicConstant,
    MagicTotal,
}

/// A pattern that matches a magic-square number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialNumber {
    pub value: u32,
    pub planet: String,
    pub kind: SpecialKind,
    pub order: u8,
    pub note: String,
}

/// Match a pattern against the magic-square table.
///
/// The pattern must spell the number exactly, so "0111" does not match 111.
pub fn special_number(pattern: &str) -> Option<SpecialNumber> {
    MAGIC_SQUARES.iter().find_map(|square| {
        let (kind, value, label) = if pattern == square.constant.to_string() {
            (SpecialKind::MagicConstant, square.constant, "magic constant")
        } else if pattern == square.total.to_string() {
            (SpecialKind::MagicTotal, square.total, "magic total")
        } else {
            return None;
        };

        Some(SpecialNumber {
            value,
            planet: square.planet.to_string(),
            kind,
            order: square.order,
            note: format!(
                "{} is the {} of the {}'s {}×{} square in Agrippa's planetary tables.",
                value, label, square.planet_name, square.order, square.order
            ),
        })
    })
}
