use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::dataset::DatasetPaths;
use crate::error::{Error, Result};

/// Identifier for a person, as found in the `id` column of the people source.
pub type PersonId = String;

/// Identifier for a movie, as found in the `id` column of the movies source.
pub type MovieId = String;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A person together with every movie they appear in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<i32>,
    /// The `birth` field as written, shown when listing people sharing a name.
    pub birth_text: String,
    pub movies: BTreeSet<MovieId>,
}

/// A movie together with its cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year; `None` when the field is blank or not a number.
    pub year: Option<i32>,
    pub stars: BTreeSet<PersonId>,
}

/// Counts gathered while building a [`Dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub people: usize,
    pub movies: usize,
    pub links: usize,
    pub skipped_links: usize,
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// In-memory index over people, movies and the cast links between them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub people: HashMap<PersonId, Person>,
    pub movies: HashMap<MovieId, Movie>,
    /// Lowercased display name to every person carrying it.
    pub names: HashMap<String, BTreeSet<PersonId>>,
    stats: DatasetStats,
}

/// Load the people, movies and stars sources from `directory`.
///
/// All three files must exist; a missing file aborts the load before any rows
/// are read. Cast rows that reference an unknown person or movie are skipped.
pub fn load_dataset(directory: &Path) -> Result<Dataset> {
    let paths = DatasetPaths::locate(directory)?;
    debug!(path = %directory.display(), "loading dataset");

    let dataset = Dataset::from_readers(
        File::open(&paths.people)?,
        File::open(&paths.movies)?,
        File::open(&paths.stars)?,
    )?;

    let stats = dataset.stats();
    info!(
        people = stats.people,
        movies = stats.movies,
        links = stats.links,
        skipped_links = stats.skipped_links,
        "dataset loaded"
    );
    Ok(dataset)
}

impl Dataset {
    /// Build an index from three CSV sources with header rows.
    pub fn from_readers<P: Read, M: Read, S: Read>(people: P, movies: M, stars: S) -> Result<Self> {
        let mut dataset = Dataset::default();

        for row in read_rows::<PersonRow, _>(people, "people.csv")? {
            dataset.insert_person(row);
        }
        for row in read_rows::<MovieRow, _>(movies, "movies.csv")? {
            dataset.insert_movie(row);
        }
        for row in read_rows::<StarRow, _>(stars, "stars.csv")? {
            dataset.link(row);
        }

        dataset.stats.people = dataset.people.len();
        dataset.stats.movies = dataset.movies.len();
        Ok(dataset)
    }

    fn insert_person(&mut self, row: PersonRow) {
        let birth = row.birth.parse::<i32>().ok();
        self.names
            .entry(row.name.to_lowercase())
            .or_default()
            .insert(row.id.clone());
        self.people.insert(
            row.id.clone(),
            Person {
                id: row.id,
                name: row.name,
                birth,
                birth_text: row.birth,
                movies: BTreeSet::new(),
            },
        );
    }

    fn insert_movie(&mut self, row: MovieRow) {
        let year = row.year.parse::<i32>().ok();
        self.movies.insert(
            row.id.clone(),
            Movie {
                id: row.id,
                title: row.title,
                year,
                stars: BTreeSet::new(),
            },
        );
    }

    fn link(&mut self, row: StarRow) {
        let (Some(person), Some(movie)) = (
            self.people.get_mut(&row.person_id),
            self.movies.get_mut(&row.movie_id),
        ) else {
            debug!(
                person_id = %row.person_id,
                movie_id = %row.movie_id,
                "skipping cast link with unknown endpoint"
            );
            self.stats.skipped_links += 1;
            return;
        };

        person.movies.insert(row.movie_id);
        movie.stars.insert(row.person_id);
        self.stats.links += 1;
    }

    /// Counts recorded while the index was built.
    pub fn stats(&self) -> DatasetStats {
        self.stats
    }

    /// Lookup a person by identifier.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Lookup a movie by identifier.
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Lookup a person's display name by identifier.
    pub fn person_name(&self, id: &str) -> Option<&str> {
        self.person(id).map(|person| person.name.as_str())
    }

    /// Identifiers of every person whose name matches `name`, ignoring case.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&str> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// `(movie_id, person_id)` pairs for everyone who starred with `person_id`.
    ///
    /// The person appears in their own neighbourhood once per movie. Unknown
    /// identifiers have no neighbours.
    pub fn neighbors_for_person(&self, person_id: &str) -> Vec<(&str, &str)> {
        let Some(person) = self.people.get(person_id) else {
            return Vec::new();
        };

        let mut neighbors = BTreeSet::new();
        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert((movie.id.as_str(), star.as_str()));
                }
            }
        }
        neighbors.into_iter().collect()
    }

    /// Display names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_name_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .names
            .iter()
            .filter_map(|(key, ids)| {
                let score = strsim::jaro_winkler(&needle, key);
                if score < SUGGESTION_THRESHOLD {
                    return None;
                }
                let display = ids
                    .iter()
                    .next()
                    .and_then(|id| self.person_name(id))?;
                Some((score, display))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, display)| display.to_string())
            .collect()
    }
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R, source_name: &str) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|error| Error::Csv {
            source_name: source_name.to_string(),
            error,
        })
}
