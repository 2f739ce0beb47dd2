//! Catalogs that materialize the graph's nodes and edges from the static tables.
//!
//! - [`nodes`] - one `create_*_nodes` function per domain
//! - [`edges`] - one generator per relationship family

pub mod edges;
pub mod nodes;

pub use edges::all_edges;
pub use nodes::all_nodes;
