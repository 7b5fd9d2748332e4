//! Search tree arena and frontier used by the path finder.
//!
//! Nodes live in a [`SearchTree`] arena; parents are arena indices, so a path
//! is recovered by walking indices back to the root. The [`Frontier`] holds
//! indices of nodes awaiting expansion and tracks their states so membership
//! checks do not scan the pending queue.

use std::collections::{HashSet, VecDeque};
use std::ops::Index;

use crate::error::{Error, Result};
use crate::path::PathStep;

/// Index of a node within a [`SearchTree`].
pub type NodeId = usize;

/// A single search node: a person reached through a movie from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    pub state: &'a str,
    pub parent: Option<NodeId>,
    pub action: Option<&'a str>,
}

impl<'a> Node<'a> {
    /// Root node for a search starting at `state`.
    pub fn root(state: &'a str) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }
}

/// Growable arena of every node created during one search.
#[derive(Debug, Default)]
pub struct SearchTree<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> SearchTree<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store `node` and return its index.
    pub fn push(&mut self, node: Node<'a>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` to the root and return the steps in travel order.
    ///
    /// The root contributes no step since it has no action.
    pub fn backtrack(&self, id: NodeId) -> Vec<PathStep> {
        let mut steps = Vec::new();
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            let (Some(parent), Some(action)) = (node.parent, node.action) else {
                break;
            };
            steps.push(PathStep {
                movie_id: action.to_string(),
                person_id: node.state.to_string(),
            });
            current = self.nodes.get(parent);
        }
        steps.reverse();
        steps
    }
}

impl<'a> Index<NodeId> for SearchTree<'a> {
    type Output = Node<'a>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

/// Order in which the frontier hands out nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// Last in, first out. Depth-first traversal.
    Stack,
    /// First in, first out. Breadth-first traversal, minimum hop count.
    Queue,
}

/// Nodes awaiting expansion, removed according to a [`FrontierKind`].
#[derive(Debug)]
pub struct Frontier<'a> {
    kind: FrontierKind,
    pending: VecDeque<(NodeId, &'a str)>,
    states: HashSet<&'a str>,
}

impl<'a> Frontier<'a> {
    pub fn new(kind: FrontierKind) -> Self {
        Self {
            kind,
            pending: VecDeque::new(),
            states: HashSet::new(),
        }
    }

    /// Queue `id`, whose node holds `state`. Callers check
    /// [`Frontier::contains_state`] first; states are unique in the frontier.
    pub fn add(&mut self, id: NodeId, state: &'a str) {
        debug_assert!(!self.states.contains(state), "state already in frontier");
        self.states.insert(state);
        self.pending.push_back((id, state));
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Remove the next node per the frontier's discipline.
    pub fn remove(&mut self) -> Result<NodeId> {
        let entry = match self.kind {
            FrontierKind::Stack => self.pending.pop_back(),
            FrontierKind::Queue => self.pending.pop_front(),
        };
        let (id, state) = entry.ok_or(Error::EmptyFrontier)?;
        self.states.remove(state);
        Ok(id)
    }
}
