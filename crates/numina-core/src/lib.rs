//! Numina core: a correspondence knowledge graph linking numbers, planets,
//! elements, Platonic solids, zodiac signs, houses, archetypes and modalities.

pub mod catalog;
pub mod config;
mod error;
pub mod graph;
pub mod ontology;
pub mod synthesis;
pub mod tables;

pub use config::{Config, ConfigError};
pub use error::ParseError;
pub use graph::{CorrespondenceGraph, GraphInitializer, TraversalQuery, TraversalResult};
pub use ontology::{GraphEdge, GraphNode, NodeKey, NodeKind, Relationship};
pub use synthesis::{
    build_narrative, check_token_budget, synthesize, synthesize_with_config, ChartProfile,
    ElementAlignment, Pattern, SynthesisResult,
};
