#![allow(dead_code)]

use std::path::PathBuf;

use degrees_lib::{load_dataset, Dataset, PathStep};

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/small")
}

pub fn fixture_dataset() -> Dataset {
    load_dataset(&fixture_dir()).expect("fixture loads")
}

/// Build a dataset from inline CSV text.
pub fn dataset_from_csv(people: &str, movies: &str, stars: &str) -> Dataset {
    Dataset::from_readers(people.as_bytes(), movies.as_bytes(), stars.as_bytes())
        .expect("inline dataset loads")
}

/// Assert that every hop of `path` is backed by the movie it names.
pub fn assert_valid_path(dataset: &Dataset, source: &str, target: &str, path: &[PathStep]) {
    let mut previous = source.to_string();
    for step in path {
        let movie = dataset
            .movie(&step.movie_id)
            .unwrap_or_else(|| panic!("movie {} missing", step.movie_id));
        assert!(
            movie.stars.contains(&previous),
            "{} is not in the cast of {}",
            previous,
            movie.title
        );
        assert!(
            movie.stars.contains(&step.person_id),
            "{} is not in the cast of {}",
            step.person_id,
            movie.title
        );
        previous = step.person_id.clone();
    }
    assert_eq!(previous, target, "path should end at the target");
}
