use super::GraphStore;
use crate::types::{Entity, Link};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EdgeKey {
    from: String,
    to: String,
    mark: String,
}

impl EdgeKey {
    fn new(from: &str, to: &str, mark: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            mark: mark.to_string(),
        }
    }
}

/// In-memory adjacency store.
///
/// Nodes map to their payloads; edges live in a (from, to, mark) table
/// with per-node outgoing and incoming indexes so neighbor enumeration
/// never scans the whole edge set.
#[derive(Debug, Default)]
pub struct MemoryStore {
    nodes: HashMap<String, Option<Value>>,
    edges: HashMap<EdgeKey, Option<Value>>,
    outgoing: HashMap<String, HashSet<EdgeKey>>,
    incoming: HashMap<String, HashSet<EdgeKey>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn link_for(&self, key: &EdgeKey) -> Link {
        Link {
            source: key.from.clone(),
            target: key.to.clone(),
            mark: key.mark.clone(),
            payload: self.edges.get(key).cloned().flatten(),
        }
    }

    fn drop_edge(&mut self, key: &EdgeKey) {
        if self.edges.remove(key).is_none() {
            return;
        }
        if let Some(set) = self.outgoing.get_mut(&key.from) {
            set.remove(key);
            if set.is_empty() {
                self.outgoing.remove(&key.from);
            }
        }
        if let Some(set) = self.incoming.get_mut(&key.to) {
            set.remove(key);
            if set.is_empty() {
                self.incoming.remove(&key.to);
            }
        }
    }
}

impl GraphStore for MemoryStore {
    fn put_node(&mut self, id: &str, payload: Option<Value>) {
        self.nodes.insert(id.to_string(), payload);
    }

    fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn node(&self, id: &str) -> Option<Entity> {
        self.nodes.get(id).map(|payload| Entity {
            id: id.to_string(),
            payload: payload.clone(),
        })
    }

    fn remove_node(&mut self, id: &str) {
        if self.nodes.remove(id).is_none() {
            return;
        }
        let mut incident: Vec<EdgeKey> = Vec::new();
        if let Some(set) = self.outgoing.get(id) {
            incident.extend(set.iter().cloned());
        }
        if let Some(set) = self.incoming.get(id) {
            incident.extend(set.iter().cloned());
        }
        for key in incident {
            self.drop_edge(&key);
        }
    }

    fn set_edge(&mut self, from: &str, to: &str, mark: &str, payload: Option<Value>) {
        let key = EdgeKey::new(from, to, mark);
        self.outgoing
            .entry(key.from.clone())
            .or_default()
            .insert(key.clone());
        self.incoming
            .entry(key.to.clone())
            .or_default()
            .insert(key.clone());
        self.edges.insert(key, payload);
    }

    fn has_edge(&self, from: &str, to: &str, mark: Option<&str>) -> bool {
        match mark {
            Some(mark) => self.edges.contains_key(&EdgeKey::new(from, to, mark)),
            None => self
                .outgoing
                .get(from)
                .map_or(false, |set| set.iter().any(|key| key.to == to)),
        }
    }

    fn edge(&self, from: &str, to: &str, mark: &str) -> Option<Link> {
        let key = EdgeKey::new(from, to, mark);
        self.edges.get(&key).map(|payload| Link {
            source: key.from.clone(),
            target: key.to.clone(),
            mark: key.mark.clone(),
            payload: payload.clone(),
        })
    }

    fn remove_edge(&mut self, from: &str, to: &str, mark: &str) {
        self.drop_edge(&EdgeKey::new(from, to, mark));
    }

    fn remove_edges_with_mark(&mut self, mark: &str) {
        let doomed: Vec<EdgeKey> = self
            .edges
            .keys()
            .filter(|key| key.mark == mark)
            .cloned()
            .collect();
        for key in doomed {
            self.drop_edge(&key);
        }
    }

    fn in_edges(&self, id: &str) -> Vec<Link> {
        self.incoming
            .get(id)
            .into_iter()
            .flatten()
            .map(|key| self.link_for(key))
            .collect()
    }

    fn out_edges(&self, id: &str) -> Vec<Link> {
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .map(|key| self.link_for(key))
            .collect()
    }

    fn edges(&self, mark: Option<&str>) -> Vec<Link> {
        self.edges
            .keys()
            .filter(|key| mark.map_or(true, |m| key.mark == m))
            .map(|key| self.link_for(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_node_overwrites_payload() {
        let mut store = MemoryStore::new();
        store.put_node("a", Some(json!(1)));
        store.put_node("a", Some(json!(2)));

        assert_eq!(store.node("a").unwrap().payload, Some(json!(2)));
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn node_without_payload() {
        let mut store = MemoryStore::new();
        store.put_node("a", None);

        assert!(store.has_node("a"));
        assert_eq!(store.node("a").unwrap().payload, None);
        assert!(store.node("b").is_none());
    }

    #[test]
    fn set_edge_is_keyed_by_triple() {
        let mut store = MemoryStore::new();
        store.put_node("a", None);
        store.put_node("b", None);
        store.set_edge("a", "b", "owns", Some(json!("first")));
        store.set_edge("a", "b", "owns", Some(json!("second")));
        store.set_edge("a", "b", "likes", None);

        assert_eq!(store.edge_count(), 2);
        assert_eq!(
            store.edge("a", "b", "owns").unwrap().payload,
            Some(json!("second"))
        );
        assert!(store.has_edge("a", "b", Some("likes")));
        assert!(!store.has_edge("b", "a", Some("owns")));
    }

    #[test]
    fn has_edge_any_mark() {
        let mut store = MemoryStore::new();
        store.put_node("a", None);
        store.put_node("b", None);
        store.set_edge("a", "b", "owns", None);

        assert!(store.has_edge("a", "b", None));
        assert!(!store.has_edge("b", "a", None));
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store.put_node(id, None);
        }
        store.set_edge("a", "b", "owns", None);
        store.set_edge("b", "c", "owns", None);
        store.set_edge("c", "b", "likes", None);

        store.remove_node("b");

        assert!(!store.has_node("b"));
        assert_eq!(store.edge_count(), 0);
        assert!(store.has_node("a"));
        assert!(store.has_node("c"));
    }

    #[test]
    fn remove_edges_with_mark_leaves_other_marks() {
        let mut store = MemoryStore::new();
        store.put_node("a", None);
        store.put_node("b", None);
        store.set_edge("a", "b", "owns", None);
        store.set_edge("b", "a", "owns", None);
        store.set_edge("a", "b", "likes", None);

        store.remove_edges_with_mark("owns");

        assert!(!store.has_edge("a", "b", Some("owns")));
        assert!(!store.has_edge("b", "a", Some("owns")));
        assert!(store.has_edge("a", "b", Some("likes")));
    }

    #[test]
    fn neighbor_enumeration() {
        let mut store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store.put_node(id, None);
        }
        store.set_edge("a", "b", "owns", None);
        store.set_edge("c", "b", "owns", None);
        store.set_edge("b", "c", "likes", None);

        let incoming = store.in_edges("b");
        assert_eq!(incoming.len(), 2);
        assert!(incoming.iter().all(|link| link.target == "b"));

        let outgoing = store.out_edges("b");
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].target, "c");

        assert_eq!(store.edges(Some("owns")).len(), 2);
        assert_eq!(store.edges(None).len(), 3);
    }
}
