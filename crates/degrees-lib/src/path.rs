use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::frontier::{Frontier, FrontierKind, Node, SearchTree};
use crate::index::{Dataset, MovieId, PersonId};

/// One hop of a connection: the movie shared with the previous person, and the person reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub movie_id: MovieId,
    pub person_id: PersonId,
}

/// Result of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Steps from the source to the target, or `None` when they are not connected.
    pub path: Option<Vec<PathStep>>,
    /// Number of people expanded before the search finished.
    pub explored: usize,
}

/// Find the fewest-hop connection between `source` and `target` using breadth-first search.
pub fn shortest_path(dataset: &Dataset, source: &str, target: &str) -> Result<Option<Vec<PathStep>>> {
    find_path(dataset, source, target, FrontierKind::Queue).map(|outcome| outcome.path)
}

/// Search the person-movie-person graph from `source` to `target`.
///
/// The frontier kind decides the traversal: [`FrontierKind::Queue`] yields a
/// minimum-hop path, [`FrontierKind::Stack`] yields the first path found by a
/// depth-first walk. A search from a person to themself succeeds with an empty
/// path.
pub fn find_path(
    dataset: &Dataset,
    source: &str,
    target: &str,
    kind: FrontierKind,
) -> Result<SearchOutcome> {
    let source = known_person(dataset, source)?;
    let target = known_person(dataset, target)?;

    if source == target {
        return Ok(SearchOutcome {
            path: Some(Vec::new()),
            explored: 0,
        });
    }

    let mut tree = SearchTree::new();
    let mut frontier = Frontier::new(kind);
    let mut explored: HashSet<&str> = HashSet::new();

    let root = tree.push(Node::root(source));
    frontier.add(root, source);

    loop {
        if frontier.is_empty() {
            debug!(source, target, explored = explored.len(), "search exhausted");
            return Ok(SearchOutcome {
                path: None,
                explored: explored.len(),
            });
        }

        let current_id = frontier.remove()?;
        let current = tree[current_id];
        explored.insert(current.state);

        for (movie_id, person_id) in dataset.neighbors_for_person(current.state) {
            if frontier.contains_state(person_id) || explored.contains(person_id) {
                continue;
            }

            let child = tree.push(Node {
                state: person_id,
                parent: Some(current_id),
                action: Some(movie_id),
            });

            if person_id == target {
                let path = tree.backtrack(child);
                debug!(
                    source,
                    target,
                    hops = path.len(),
                    explored = explored.len(),
                    nodes = tree.len(),
                    "connection found"
                );
                return Ok(SearchOutcome {
                    path: Some(path),
                    explored: explored.len(),
                });
            }

            frontier.add(child, person_id);
        }
    }
}

fn known_person<'a>(dataset: &'a Dataset, id: &str) -> Result<&'a str> {
    dataset
        .person(id)
        .map(|person| person.id.as_str())
        .ok_or_else(|| Error::UnknownPersonId { id: id.to_string() })
}
