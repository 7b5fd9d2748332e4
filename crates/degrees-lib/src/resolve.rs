//! Resolve free-text names to a single person identifier.
//!
//! Names are matched case-insensitively. When several people share a name the
//! choice is delegated to a [`Disambiguator`], and only a choice among the
//! presented candidates is accepted.

use tracing::debug;

use crate::error::{Error, Result};
use crate::index::Dataset;

/// Maximum number of "did you mean" suggestions attached to an unknown name.
const MAX_SUGGESTIONS: usize = 3;

/// A person offered during disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub birth: Option<i32>,
    /// Birth field as written in the source, possibly blank or non-numeric.
    pub birth_text: &'a str,
}

/// Picks one identifier among several people sharing a name.
pub trait Disambiguator {
    /// Return the chosen identifier, or `None` when no choice was made.
    fn choose(&mut self, name: &str, candidates: &[Candidate<'_>]) -> Result<Option<String>>;
}

/// Disambiguator that always answers with the same identifier.
#[derive(Debug, Clone, Default)]
pub struct FixedChoice(pub Option<String>);

impl FixedChoice {
    pub fn id(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl Disambiguator for FixedChoice {
    fn choose(&mut self, _name: &str, _candidates: &[Candidate<'_>]) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Every person in `dataset` whose name matches `name`, ordered by identifier.
pub fn candidates_for_name<'a>(dataset: &'a Dataset, name: &str) -> Vec<Candidate<'a>> {
    dataset
        .person_ids_for_name(name)
        .into_iter()
        .filter_map(|id| dataset.person(id))
        .map(|person| Candidate {
            id: person.id.as_str(),
            name: person.name.as_str(),
            birth: person.birth,
            birth_text: person.birth_text.as_str(),
        })
        .collect()
}

/// Resolve `name` to exactly one person identifier.
pub fn person_id_for_name<'a>(
    dataset: &'a Dataset,
    name: &str,
    disambiguator: &mut dyn Disambiguator,
) -> Result<&'a str> {
    let candidates = candidates_for_name(dataset, name);

    match candidates.as_slice() {
        [] => Err(Error::UnknownPerson {
            name: name.to_string(),
            suggestions: dataset.fuzzy_name_matches(name, MAX_SUGGESTIONS),
        }),
        [only] => Ok(only.id),
        many => {
            debug!(name, candidates = many.len(), "name is ambiguous");
            let choice = disambiguator.choose(name, many)?;
            let chosen = choice.as_deref().map(str::trim);
            many.iter()
                .find(|candidate| Some(candidate.id) == chosen)
                .map(|candidate| candidate.id)
                .ok_or_else(|| Error::UnresolvedChoice {
                    name: name.to_string(),
                    choice: choice.filter(|value| !value.trim().is_empty()),
                })
        }
    }
}
