use crate::engine::closure;
use crate::error::{Result, TangleError};
use crate::registry::LinkTypeRegistry;
use crate::storage::{GraphStore, MemoryStore};
use crate::types::{Entity, Link, LinkTypeOptions, LinkTypePatch, Mark};
use serde_json::Value;

/// Embedded entity-relationship domain.
///
/// Owns the link type registry and the underlying graph store, and runs
/// closure propagation on every `link` call: the implied edge set of a
/// mutual or transitive mark is materialized eagerly at write time, so
/// `are_linked` is always a plain existence check.
///
/// Mutating operations take `&mut self`; the engine performs multi-step
/// read-then-write traversals that must not interleave with other writers,
/// and the borrow checker enforces exactly that. There are no suspension
/// points inside any operation.
///
/// # Example
/// ```rust
/// use tangle_core::{LinkTypePatch, Tangle};
///
/// let mut domain = Tangle::new();
/// domain.add_link_type("path", LinkTypePatch::new().transitive(true)).unwrap();
/// domain.link("path", ("x", "y"), None).unwrap();
/// domain.link("path", ("y", "z"), None).unwrap();
/// assert!(domain.are_linked(("x", "z"), Some("path")));
/// assert!(!domain.are_linked(("z", "x"), Some("path")));
/// ```
pub struct Tangle<S: GraphStore = MemoryStore> {
    store: S,
    registry: LinkTypeRegistry,
}

impl Tangle<MemoryStore> {
    /// Create a domain backed by the in-memory store.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for Tangle<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GraphStore> Tangle<S> {
    /// Build a domain on top of an existing store.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            registry: LinkTypeRegistry::new(),
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // === Link types ===

    /// Register a new link type. Fields absent from the patch default to
    /// `false`.
    pub fn add_link_type(&mut self, mark: &str, patch: LinkTypePatch) -> Result<()> {
        self.registry.register(mark, patch)
    }

    /// Update a registered link type. Fields absent from the patch keep
    /// their previous value.
    pub fn edit_link_type(&mut self, mark: &str, patch: LinkTypePatch) -> Result<()> {
        self.registry.update(mark, patch)
    }

    /// All registered marks. Order is not significant.
    pub fn link_types(&self) -> Vec<Mark> {
        self.registry.marks()
    }

    /// Strict options lookup: fails when the mark is unregistered.
    pub fn link_type_info(&self, mark: &str) -> Result<LinkTypeOptions> {
        self.registry.options(mark)
    }

    /// Silent options lookup.
    pub fn get_link_type(&self, mark: &str) -> Option<LinkTypeOptions> {
        self.registry.get(mark)
    }

    pub fn has_link_type(&self, mark: &str) -> bool {
        self.registry.contains(mark)
    }

    /// Remove a registered link type. With `consistent = true` every edge
    /// of the mark is deleted first; with `false` those edges are orphaned
    /// but stay queryable by explicit mark. No-op when unregistered.
    pub fn remove_link_type(&mut self, mark: &str, consistent: bool) {
        if !self.registry.contains(mark) {
            return;
        }
        if consistent {
            self.store.remove_edges_with_mark(mark);
        }
        self.registry.remove(mark);
    }

    // === Entities ===

    /// Add an entity to the domain.
    pub fn add_entity(&mut self, id: &str, payload: Option<Value>) -> Result<()> {
        if self.store.has_node(id) {
            return Err(TangleError::EntityExists(id.to_string()));
        }
        self.store.put_node(id, payload);
        Ok(())
    }

    /// Replace the payload of an existing entity.
    pub fn edit_entity(&mut self, id: &str, payload: Option<Value>) -> Result<()> {
        if !self.store.has_node(id) {
            return Err(TangleError::EntityNotFound(id.to_string()));
        }
        self.store.put_node(id, payload);
        Ok(())
    }

    pub fn has_entity(&self, id: &str) -> bool {
        self.store.has_node(id)
    }

    /// Remove an entity and every edge it participates in, both
    /// directions, any mark. No-op when the entity does not exist.
    pub fn remove_entity(&mut self, id: &str) {
        self.store.remove_node(id);
    }

    /// Strict payload lookup: `Ok(None)` for an entity without payload,
    /// `EntityNotFound` when the entity is absent.
    pub fn entity_details(&self, id: &str) -> Result<Option<Value>> {
        self.store
            .node(id)
            .map(|entity| entity.payload)
            .ok_or_else(|| TangleError::EntityNotFound(id.to_string()))
    }

    /// Silent lookup.
    pub fn get_entity(&self, id: &str) -> Option<Entity> {
        self.store.node(id)
    }

    // === Links ===

    /// Connect `source` to `target` under `mark`, materializing the full
    /// implied closure.
    ///
    /// An unregistered mark is auto-registered with default options, and
    /// missing endpoints are auto-created without payload. For a
    /// transitive mark, every entity reaching `source` is connected to
    /// every entity reachable from `target`; for a mutual mark every
    /// written edge gets its reverse. Derived edges carry the payload of
    /// this call. Self-edges are never materialized.
    pub fn link(&mut self, mark: &str, pair: (&str, &str), payload: Option<Value>) -> Result<()> {
        let (source, target) = pair;
        if !self.registry.contains(mark) {
            self.registry.register(mark, LinkTypePatch::default())?;
        }
        if !self.store.has_node(source) {
            self.store.put_node(source, None);
        }
        if !self.store.has_node(target) {
            self.store.put_node(target, None);
        }

        let options = self.registry.options(mark)?;
        let connectors = closure::connectors(&self.store, mark, options, source, target);

        log::debug!(
            "link '{}': ({} -> {}) connecting {}x{} entities",
            mark,
            source,
            target,
            connectors.sources.len(),
            connectors.targets.len()
        );

        for s in &connectors.sources {
            for d in &connectors.targets {
                if s == d {
                    continue;
                }
                self.store.set_edge(s, d, mark, payload.clone());
                if options.mutual {
                    self.store.set_edge(d, s, mark, payload.clone());
                }
            }
        }
        Ok(())
    }

    /// Whether an edge connects the ordered pair. With `mark = None`, an
    /// edge of any mark counts. Never a traversal: the closure is already
    /// materialized.
    pub fn are_linked(&self, pair: (&str, &str), mark: Option<&str>) -> bool {
        self.store.has_edge(pair.0, pair.1, mark)
    }

    /// Every stored link, optionally filtered by mark.
    pub fn links(&self, mark: Option<&str>) -> Vec<Link> {
        self.store.edges(mark)
    }

    /// Remove the directly named edge(s) between an ordered pair, all
    /// marks when `mark` is `None`. Closure-derived edges created
    /// alongside them stay in place; removal never shrinks the closure.
    pub fn unlink(&mut self, pair: (&str, &str), mark: Option<&str>) {
        let (source, target) = pair;
        match mark {
            Some(mark) => self.store.remove_edge(source, target, mark),
            None => {
                for edge in self.store.out_edges(source) {
                    if edge.target == target {
                        self.store.remove_edge(&edge.source, &edge.target, &edge.mark);
                    }
                }
            }
        }
    }

    /// Remove every edge the entity is source for, optionally restricted
    /// to one mark.
    pub fn unlink_from(&mut self, source: &str, mark: Option<&str>) {
        for edge in self.store.out_edges(source) {
            if mark.map_or(true, |m| edge.mark == m) {
                self.store.remove_edge(&edge.source, &edge.target, &edge.mark);
            }
        }
    }

    /// Remove every edge of the mark, or every edge in the domain when
    /// `mark` is `None`.
    pub fn unlink_all(&mut self, mark: Option<&str>) {
        match mark {
            Some(mark) => self.store.remove_edges_with_mark(mark),
            None => {
                for edge in self.store.edges(None) {
                    self.store.remove_edge(&edge.source, &edge.target, &edge.mark);
                }
            }
        }
    }
}
