use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type alias for entity identifiers
pub type EntityId = String;

/// Type alias for link type marks
pub type Mark = String;

/// A named node in the domain. The payload is opaque: the engine stores
/// and returns it but never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub payload: Option<Value>,
}

/// A directed, typed edge between two entities.
///
/// At most one edge exists per (source, target, mark) triple; re-linking
/// the same triple overwrites the payload. Direct and closure-derived
/// edges are indistinguishable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub source: EntityId,
    pub target: EntityId,
    pub mark: Mark,
    pub payload: Option<Value>,
}

/// Resolved modifiers of a registered link type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkTypeOptions {
    /// An edge implies its reverse edge with the same payload.
    pub mutual: bool,

    /// Edges are closed under composition: a chain of edges implies a
    /// direct edge between every pair along the chain.
    pub transitive: bool,
}

/// Partial link type configuration.
///
/// Fields left `None` keep their previous value on edit, or fall back to
/// defaults (both `false`) on registration. When deserialized from host
/// configuration, unrecognized keys are ignored rather than rejected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkTypePatch {
    #[serde(default)]
    pub mutual: Option<bool>,

    #[serde(default)]
    pub transitive: Option<bool>,
}

impl LinkTypePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mutual(mut self, mutual: bool) -> Self {
        self.mutual = Some(mutual);
        self
    }

    pub fn transitive(mut self, transitive: bool) -> Self {
        self.transitive = Some(transitive);
        self
    }

    /// Merge this patch over existing options. Unset fields preserve the
    /// base value.
    pub fn apply(self, base: LinkTypeOptions) -> LinkTypeOptions {
        LinkTypeOptions {
            mutual: self.mutual.unwrap_or(base.mutual),
            transitive: self.transitive.unwrap_or(base.transitive),
        }
    }
}

/// Direction to follow edges during closure traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges where the current entity is the source.
    Outgoing,

    /// Follow edges where the current entity is the target.
    Incoming,
}
