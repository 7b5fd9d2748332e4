use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::frontier::FrontierKind;
use crate::index::{Dataset, PersonId};
use crate::path::{find_path, PathStep};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Breadth-first search; finds the fewest degrees of separation.
    #[default]
    Bfs,
    /// Depth-first search; finds some connection, not necessarily the shortest.
    Dfs,
}

impl SearchAlgorithm {
    /// Frontier discipline that implements this strategy.
    pub fn frontier_kind(self) -> FrontierKind {
        match self {
            SearchAlgorithm::Bfs => FrontierKind::Queue,
            SearchAlgorithm::Dfs => FrontierKind::Stack,
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
        };
        f.write_str(value)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(SearchAlgorithm::Bfs),
            "dfs" | "depth-first" => Ok(SearchAlgorithm::Dfs),
            other => Err(format!("unknown search algorithm '{other}'")),
        }
    }
}

/// Connection found (or not) between two resolved people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionPlan {
    pub algorithm: SearchAlgorithm,
    pub source: PersonId,
    pub target: PersonId,
    /// `None` when the two people are not connected.
    pub steps: Option<Vec<PathStep>>,
    pub explored: usize,
}

impl ConnectionPlan {
    /// Degrees of separation, if connected.
    pub fn degrees(&self) -> Option<usize> {
        self.steps.as_ref().map(Vec::len)
    }

    pub fn is_connected(&self) -> bool {
        self.steps.is_some()
    }
}

/// Search for a connection between two person identifiers with the requested algorithm.
pub fn plan_connection(
    dataset: &Dataset,
    source: &str,
    target: &str,
    algorithm: SearchAlgorithm,
) -> Result<ConnectionPlan> {
    let outcome = find_path(dataset, source, target, algorithm.frontier_kind())?;
    Ok(ConnectionPlan {
        algorithm,
        source: source.to_string(),
        target: target.to_string(),
        steps: outcome.path,
        explored: outcome.explored,
    })
}
