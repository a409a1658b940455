use crate::storage::GraphStore;
use crate::types::{Direction, EntityId, LinkTypeOptions};
use std::collections::{HashSet, VecDeque};

/// Connector sets for a pending link: every (s, d) pair across the two
/// sets receives a materialized edge.
#[derive(Debug)]
pub(crate) struct Connectors {
    pub sources: Vec<EntityId>,
    pub targets: Vec<EntityId>,
}

/// Compute the connector sets for linking `source -> target` under `mark`.
///
/// A non-transitive mark connects exactly the requested pair. A transitive
/// mark pulls in everything that already reaches `source` (incoming
/// traversal) and everything already reachable from `target` (outgoing
/// traversal), so the new edge closes every implied chain at once.
pub(crate) fn connectors<S: GraphStore>(
    store: &S,
    mark: &str,
    options: LinkTypeOptions,
    source: &str,
    target: &str,
) -> Connectors {
    if !options.transitive {
        return Connectors {
            sources: vec![source.to_string()],
            targets: vec![target.to_string()],
        };
    }
    Connectors {
        sources: reach(store, mark, source, Direction::Incoming),
        targets: reach(store, mark, target, Direction::Outgoing),
    }
}

/// Entities connected to `seed` through zero or more edges of `mark` in
/// the given direction, `seed` included.
///
/// Explicit worklist, no recursion: deep chains must not grow the call
/// stack. The visited set guarantees termination on cyclic graphs.
fn reach<S: GraphStore>(
    store: &S,
    mark: &str,
    seed: &str,
    direction: Direction,
) -> Vec<EntityId> {
    let mut found: Vec<EntityId> = vec![seed.to_string()];
    let mut visited: HashSet<EntityId> = HashSet::from([seed.to_string()]);
    let mut worklist: VecDeque<EntityId> = VecDeque::from([seed.to_string()]);

    while let Some(current) = worklist.pop_front() {
        let edges = match direction {
            Direction::Incoming => store.in_edges(&current),
            Direction::Outgoing => store.out_edges(&current),
        };
        for edge in edges {
            if edge.mark != mark {
                continue;
            }
            let next = match direction {
                Direction::Incoming => edge.source,
                Direction::Outgoing => edge.target,
            };
            if visited.insert(next.clone()) {
                found.push(next.clone());
                worklist.push_back(next);
            }
        }
    }

    found
}
