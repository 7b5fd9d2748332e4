use std::fmt::Write;

use serde::Serialize;

use crate::connection::{ConnectionPlan, SearchAlgorithm};
use crate::error::{Error, Result};
use crate::index::{Dataset, MovieId, PersonId};

/// Person named in a connection summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PersonRef {
    pub id: PersonId,
    pub name: String,
}

impl PersonRef {
    fn resolve(dataset: &Dataset, id: &str) -> Result<Self> {
        let person = dataset
            .person(id)
            .ok_or_else(|| Error::UnknownPersonId { id: id.to_string() })?;
        Ok(Self {
            id: person.id.clone(),
            name: person.name.clone(),
        })
    }
}

/// Movie named in a connection summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovieRef {
    pub id: MovieId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// One hop rendered with names: `from` and `to` both starred in `movie`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectionStep {
    pub index: usize,
    pub movie: MovieRef,
    pub from: PersonRef,
    pub to: PersonRef,
}

/// Structured representation of a connection that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectionSummary {
    pub algorithm: SearchAlgorithm,
    pub source: PersonRef,
    pub target: PersonRef,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    pub explored: usize,
    pub steps: Vec<ConnectionStep>,
}

impl ConnectionSummary {
    /// Convert a [`ConnectionPlan`] into a summary with resolved names and titles.
    pub fn from_plan(dataset: &Dataset, plan: &ConnectionPlan) -> Result<Self> {
        let source = PersonRef::resolve(dataset, &plan.source)?;
        let target = PersonRef::resolve(dataset, &plan.target)?;

        let mut steps = Vec::new();
        if let Some(path) = &plan.steps {
            let mut previous = source.clone();
            for (offset, step) in path.iter().enumerate() {
                let movie = dataset.movie(&step.movie_id).map(|movie| MovieRef {
                    id: movie.id.clone(),
                    title: movie.title.clone(),
                    year: movie.year,
                });
                let movie = movie.ok_or_else(|| Error::UnknownMovieId {
                    id: step.movie_id.clone(),
                })?;
                let to = PersonRef::resolve(dataset, &step.person_id)?;
                steps.push(ConnectionStep {
                    index: offset + 1,
                    movie,
                    from: previous,
                    to: to.clone(),
                });
                previous = to;
            }
        }

        Ok(Self {
            algorithm: plan.algorithm,
            source,
            target,
            connected: plan.is_connected(),
            degrees: plan.degrees(),
            explored: plan.explored,
            steps,
        })
    }

    /// Render the summary in the console format:
    /// a degree count followed by one line per hop, or `Not connected.`.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        match self.degrees {
            None => {
                let _ = writeln!(buffer, "Not connected.");
            }
            Some(degrees) => {
                let _ = writeln!(buffer, "{degrees} degrees of separation.");
                for step in &self.steps {
                    let _ = writeln!(
                        buffer,
                        "{}: {} and {} starred in {}",
                        step.index, step.from.name, step.to.name, step.movie.title
                    );
                }
            }
        }
        buffer
    }
}
