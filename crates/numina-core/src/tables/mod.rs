//! Static correspondence tables.
//!
//! These are the upstream data sources the graph is seeded from. Every table is
//! a fixed `const` array with small accessor functions; nothing here allocates
//! or performs I/O.
//!
//! - [`digits`] - digit → planet / element / geometry correspondences (1-9)
//! - [`planets`] - planetary metadata and essential dignities
//! - [`elements`] - the five elements and their Platonic solids
//! - [`zodiac`] - sign metadata and modalities
//! - [`houses`] - the twelve houses and their life areas
//! - [`archetypes`] - the archetype catalog

pub mod archetypes;
pub mod digits;
pub mod elements;
pub mod houses;
pub mod planets;
pub mod zodiac;

pub use archetypes::{archetype, archetypes, ArchetypeInfo};
pub use digits::{digit_correspondence, DigitCorrespondence};
pub use elements::{platonic_solid, platonic_solid_for, Element, PlatonicSolid};
pub use houses::{house, houses, HouseInfo};
pub use planets::{planet, planets, Dignity, PlanetInfo, PlanetNature};
pub use zodiac::{modalities, zodiac_sign, zodiac_signs, Modality, ZodiacInfo};
