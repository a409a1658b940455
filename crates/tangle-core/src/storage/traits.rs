use crate::types::{Entity, Link};
use serde_json::Value;

/// Low-level node/edge container underneath the domain engine.
///
/// The store is a dumb adjacency structure: it holds whatever nodes and
/// edges the engine writes and performs no closure logic of its own.
/// `MemoryStore` is the default implementation; a host embedding the
/// engine may supply its own.
pub trait GraphStore: Send + Sync {
    // === Node Operations ===

    /// Insert or overwrite a node.
    fn put_node(&mut self, id: &str, payload: Option<Value>);

    fn has_node(&self, id: &str) -> bool;

    /// Retrieve a node by id.
    fn node(&self, id: &str) -> Option<Entity>;

    /// Remove a node together with every incident edge, both directions,
    /// regardless of mark. No-op when the node does not exist.
    fn remove_node(&mut self, id: &str);

    // === Edge Operations ===

    /// Insert or overwrite the edge keyed by (from, to, mark).
    fn set_edge(&mut self, from: &str, to: &str, mark: &str, payload: Option<Value>);

    /// Whether an edge connects `from` to `to`. With `mark = None`, an
    /// edge of any mark counts.
    fn has_edge(&self, from: &str, to: &str, mark: Option<&str>) -> bool;

    /// Retrieve the edge keyed by (from, to, mark).
    fn edge(&self, from: &str, to: &str, mark: &str) -> Option<Link>;

    /// Remove a single (from, to, mark) edge. No-op when absent.
    fn remove_edge(&mut self, from: &str, to: &str, mark: &str);

    /// Remove every edge tagged with the mark.
    fn remove_edges_with_mark(&mut self, mark: &str);

    /// All edges pointing into the node.
    fn in_edges(&self, id: &str) -> Vec<Link>;

    /// All edges originating from the node.
    fn out_edges(&self, id: &str) -> Vec<Link>;

    /// Every edge in the store, optionally filtered by mark.
    fn edges(&self, mark: Option<&str>) -> Vec<Link>;
}
