use crate::error::{Result, TangleError};
use crate::types::{LinkTypeOptions, LinkTypePatch, Mark};
use std::collections::HashMap;

/// Registry of link type marks and their modifiers.
///
/// Marks are unique within a domain instance. The registry knows nothing
/// about edges; cascade deletion on consistent removal is driven by the
/// domain facade, which owns the store.
#[derive(Debug, Default)]
pub struct LinkTypeRegistry {
    types: HashMap<Mark, LinkTypeOptions>,
}

impl LinkTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new mark. The patch is merged over default options.
    pub fn register(&mut self, mark: &str, patch: LinkTypePatch) -> Result<()> {
        if self.types.contains_key(mark) {
            return Err(TangleError::LinkTypeExists(mark.to_string()));
        }
        self.types
            .insert(mark.to_string(), patch.apply(LinkTypeOptions::default()));
        Ok(())
    }

    /// Update a registered mark. Fields absent from the patch keep their
    /// previous value rather than resetting to default.
    pub fn update(&mut self, mark: &str, patch: LinkTypePatch) -> Result<()> {
        let options = self
            .types
            .get_mut(mark)
            .ok_or_else(|| TangleError::LinkTypeNotFound(mark.to_string()))?;
        *options = patch.apply(*options);
        Ok(())
    }

    /// Strict lookup: fails when the mark is not registered.
    pub fn options(&self, mark: &str) -> Result<LinkTypeOptions> {
        self.get(mark)
            .ok_or_else(|| TangleError::LinkTypeNotFound(mark.to_string()))
    }

    /// Silent lookup.
    pub fn get(&self, mark: &str) -> Option<LinkTypeOptions> {
        self.types.get(mark).copied()
    }

    pub fn contains(&self, mark: &str) -> bool {
        self.types.contains_key(mark)
    }

    /// All registered marks. Order is not significant.
    pub fn marks(&self) -> Vec<Mark> {
        self.types.keys().cloned().collect()
    }

    /// Remove a mark. Returns whether it was registered.
    pub fn remove(&mut self, mark: &str) -> bool {
        self.types.remove(mark).is_some()
    }
}
