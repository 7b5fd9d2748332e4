//! Degrees library entry points.
//!
//! This crate loads a people/movies/stars dataset into memory, resolves names
//! to person identifiers, and searches the person-movie-person graph for the
//! chain of shared movies connecting two people. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod connection;
pub mod dataset;
pub mod error;
pub mod frontier;
pub mod index;
pub mod output;
pub mod path;
pub mod resolve;

pub use connection::{plan_connection, ConnectionPlan, SearchAlgorithm};
pub use dataset::{resolve_data_dir, DatasetPaths, DATA_DIR_ENV, DEFAULT_DATA_DIR};
pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierKind, Node, NodeId, SearchTree};
pub use index::{load_dataset, Dataset, DatasetStats, Movie, MovieId, Person, PersonId};
pub use output::{ConnectionStep, ConnectionSummary, MovieRef, PersonRef};
pub use path::{find_path, shortest_path, PathStep, SearchOutcome};
pub use resolve::{candidates_for_name, person_id_for_name, Candidate, Disambiguator, FixedChoice};
