//! The correspondence graph: storage, construction and traversal.
//!
//! - [`CorrespondenceGraph`] - node/edge tables with forward and reverse adjacency
//! - [`GraphInitializer`] / [`shared`] - build once, share everywhere
//! - [`TraversalQuery`] - breadth-first queries with depth, weight and type filters
//!
//! # Example
//!
//! ```
//! use numina_core::graph::{self, TraversalQuery};
//! use numina_core::ontology::{NodeKey, NodeKind};
//!
//! let graph = graph::shared();
//! let query = TraversalQuery::new([NodeKey::number(1)])
//!     .max_depth(1)
//!     .target_kinds([NodeKind::Planet]);
//! let result = graph.traverse(&query);
//! assert!(result.contains(&NodeKey::planet("sun")));
//! ```

mod init;
mod query;
mod store;

pub use init::{shared, GraphInitializer};
pub use query::{resolve_other_endpoint, TraversalPath, TraversalQuery, TraversalResult, SEED_WEIGHT};
pub use store::{CorrespondenceGraph, GraphStats};
