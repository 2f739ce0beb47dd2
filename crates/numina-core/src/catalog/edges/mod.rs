//! Edge catalog.
//!
//! One generator per relationship family. Generators are independent: none of
//! them reads another's output, and each silently omits an edge when the
//! correspondence it would express is not defined.
//!
//! - **Numeric**: number ↔ planet, number ↔ element
//! - **Elemental**: element ↔ geometry
//! - **Dignity**: planet → sign rulership, exaltation, detriment, fall
//! - **Zodiacal**: sign ↔ element, sign ↔ modality, sign ↔ house
//! - **Archetypal**: archetype ↔ planet / zodiac / element

mod archetype;
mod dignity;
mod elemental;
mod numeric;
mod zodiac;

pub use archetype::*;
pub use dignity::*;
pub use elemental::*;
pub use numeric::*;
pub use zodiac::*;

use crate::ontology::GraphEdge;

/// Every edge of every family, in a fixed order.
pub fn all_edges() -> Vec<GraphEdge> {
    let families: [fn() -> Vec<GraphEdge>; 11] = [
        number_planet_edges,
        number_element_edges,
        element_geometry_edges,
        planet_rulership_edges,
        planet_exaltation_edges,
        planet_detriment_edges,
        planet_fall_edges,
        sign_element_edges,
        sign_modality_edges,
        sign_house_edges,
        archetype_edges,
    ];
    families.iter().flat_map(|generate| generate()).collect()
}
