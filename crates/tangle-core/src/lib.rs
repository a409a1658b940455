//! Embedded entity-relationship domain engine.
//!
//! Entities are named nodes carrying opaque payloads; links are typed,
//! directed edges between them. Every link type carries two orthogonal
//! modifiers: `mutual` (an edge implies its reverse) and `transitive`
//! (a chain of edges implies a direct edge between every pair on the
//! chain). The engine materializes the implied edge set eagerly on each
//! insertion, so connectivity queries are plain O(1) lookups.

pub mod engine;
pub mod error;
pub mod registry;
pub mod storage;
pub mod types;

pub use engine::Tangle;
pub use error::{Result, TangleError};
pub use registry::LinkTypeRegistry;
pub use storage::{GraphStore, MemoryStore};
pub use types::{Direction, Entity, EntityId, Link, LinkTypeOptions, LinkTypePatch, Mark};
