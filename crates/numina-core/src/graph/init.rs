//! Graph construction and the process-wide shared instance.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use super::CorrespondenceGraph;
use crate::catalog::{all_edges, all_nodes};

impl CorrespondenceGraph {
    /// Build a fully populated graph from the static tables.
    ///
    /// Every node is added before any edge, so edge endpoints always resolve.
    pub fn build() -> Self {
        let mut graph = CorrespondenceGraph::new();
        for node in all_nodes() {
            graph.add_node(node);
        }
        for edge in all_edges() {
            graph.add_edge(edge);
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built correspondence graph"
        );
        graph
    }
}

/// Lazily builds a graph once and hands out shared references to it.
///
/// Readers only ever see a fully built graph. [`GraphInitializer::reset`]
/// takes `&mut self`, so it cannot run while any caller is borrowing the
/// initializer.
#[derive(Debug, Default)]
pub struct GraphInitializer {
    graph: OnceCell<Arc<CorrespondenceGraph>>,
    builds: AtomicUsize,
}

impl GraphInitializer {
    pub const fn new() -> Self {
        Self {
            graph: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Return the cached graph, building it on first use.
    pub fn get(&self) -> Arc<CorrespondenceGraph> {
        let graph = self.graph.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::SeqCst);
            Arc::new(CorrespondenceGraph::build())
        });
        Arc::clone(graph)
    }

    pub fn is_built(&self) -> bool {
        self.graph.get().is_some()
    }

    /// How many times this initializer has constructed a graph.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Drop the cached graph so the next [`get`](Self::get) rebuilds it.
    ///
    /// Graphs already handed out stay valid; callers holding an `Arc` keep
    /// the old instance.
    pub fn reset(&mut self) {
        self.graph.take();
    }
}

static SHARED: GraphInitializer = GraphInitializer::new();

/// The process-wide graph, built on first access.
pub fn shared() -> Arc<CorrespondenceGraph> {
    SHARED.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_builds_once() {
        let init = GraphInitializer::new();
        assert!(!init.is_built());

        let first = init.get();
        let second = init.get();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(init.build_count(), 1);
    }

    #[test]
    fn test_reset_forces_rebuild() {
        let mut init = GraphInitializer::new();
        let first = init.get();
        init.reset();
        assert!(!init.is_built());

        let second = init.get();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(init.build_count(), 2);
        assert_eq!(first.node_count(), second.node_count());
    }

    #[test]
    fn test_shared_is_stable() {
        assert!(Arc::ptr_eq(&shared(), &shared()));
    }
}
