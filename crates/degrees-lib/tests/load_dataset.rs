mod common;

use std::fs;

use degrees_lib::{load_dataset, Dataset, Error};
use tempfile::TempDir;

use common::{dataset_from_csv, fixture_dataset, fixture_dir};

#[test]
fn loads_fixture_people_movies_and_links() {
    let dataset = fixture_dataset();
    let stats = dataset.stats();

    assert_eq!(stats.people, 18);
    assert_eq!(stats.movies, 7);
    assert_eq!(stats.links, 22);
    assert_eq!(stats.skipped_links, 2);

    let kevin = dataset.person("102").expect("Kevin Bacon present");
    assert_eq!(kevin.name, "Kevin Bacon");
    assert_eq!(kevin.birth, Some(1958));
    assert!(kevin.movies.contains("104257"));
    assert!(kevin.movies.contains("112384"));
    assert!(!kevin.movies.contains("999999"));

    let apollo = dataset.movie("112384").expect("Apollo 13 present");
    assert_eq!(apollo.title, "Apollo 13");
    assert_eq!(apollo.year, Some(1995));
    assert_eq!(apollo.stars.len(), 4);
}

#[test]
fn blank_birth_is_stored_as_none() {
    let dataset = fixture_dataset();
    let emma = dataset.person("914613").expect("second Emma Watson present");
    assert_eq!(emma.birth, None);
}

#[test]
fn name_index_groups_people_sharing_a_name() {
    let dataset = fixture_dataset();
    assert_eq!(
        dataset.person_ids_for_name("Emma Watson"),
        vec!["914612", "914613"]
    );
    assert_eq!(dataset.person_ids_for_name("TOM HANKS"), vec!["158"]);
    assert!(dataset.person_ids_for_name("Nobody").is_empty());
}

#[test]
fn dangling_cast_links_are_skipped() {
    let dataset = dataset_from_csv(
        "id,name,birth\n1,Alice,1970\n",
        "id,title,year\n10,First,2000\n",
        "person_id,movie_id\n1,10\n2,10\n1,20\n",
    );

    assert_eq!(dataset.stats().links, 1);
    assert_eq!(dataset.stats().skipped_links, 2);
    let movie = dataset.movie("10").expect("movie present");
    assert_eq!(movie.stars.len(), 1);
    assert!(movie.stars.contains("1"));
}

#[test]
fn neighbors_include_every_co_star_and_the_person_themself() {
    let dataset = fixture_dataset();
    let neighbors = dataset.neighbors_for_person("158");

    assert!(neighbors.contains(&("112384", "102")));
    assert!(neighbors.contains(&("109830", "398")));
    assert!(neighbors.contains(&("109830", "158")));
    assert!(neighbors.contains(&("112384", "158")));
    assert_eq!(neighbors.len(), 8);
    assert!(dataset.neighbors_for_person("700001").is_empty());
    assert!(dataset.neighbors_for_person("unknown").is_empty());
}

#[test]
fn fuzzy_matches_suggest_close_names() {
    let dataset = fixture_dataset();
    let matches = dataset.fuzzy_name_matches("Kevn Bacon", 3);
    assert_eq!(matches.first().map(String::as_str), Some("Kevin Bacon"));

    let none = dataset.fuzzy_name_matches("Zzzzqqq", 3);
    assert!(none.is_empty());

    let limited = dataset.fuzzy_name_matches("Tom", 1);
    assert!(limited.len() <= 1);
}

#[test]
fn missing_directory_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("absent");
    let err = load_dataset(&missing).expect_err("directory is missing");
    assert!(matches!(err, Error::DatasetNotFound { .. }));
}

#[test]
fn missing_source_file_aborts_the_load() {
    let temp = TempDir::new().expect("temp dir");
    for name in ["people.csv", "movies.csv"] {
        fs::copy(fixture_dir().join(name), temp.path().join(name)).expect("copy fixture");
    }

    let err = load_dataset(temp.path()).expect_err("stars.csv is missing");
    match err {
        Error::SourceNotFound { path } => assert!(path.ends_with("stars.csv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_required_column_is_a_csv_error() {
    let err = Dataset::from_readers(
        "id,name\n1,Alice\n".as_bytes(),
        "id,title,year\n".as_bytes(),
        "person_id,movie_id\n".as_bytes(),
    )
    .expect_err("birth column is required");

    match err {
        Error::Csv { source_name, .. } => assert_eq!(source_name, "people.csv"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_or_non_numeric_movie_year_is_kept_without_a_year() {
    let dataset = dataset_from_csv(
        "id,name,birth\n1,Alice,1970\n",
        "id,title,year\n10,Untitled,\n11,Known,2000\n12,Someday,TBA\n",
        "person_id,movie_id\n1,10\n",
    );

    assert_eq!(dataset.stats().movies, 3);
    assert_eq!(dataset.movie("10").expect("blank year loads").year, None);
    assert_eq!(dataset.movie("11").expect("numeric year loads").year, Some(2000));
    assert_eq!(dataset.movie("12").expect("text year loads").year, None);
    assert_eq!(dataset.stats().links, 1);
}

#[test]
fn missing_year_column_is_still_a_csv_error() {
    let err = Dataset::from_readers(
        "id,name,birth\n".as_bytes(),
        "id,title\n10,First\n".as_bytes(),
        "person_id,movie_id\n".as_bytes(),
    )
    .expect_err("year column is required");

    match err {
        Error::Csv { source_name, .. } => assert_eq!(source_name, "movies.csv"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn birth_text_keeps_the_field_as_written() {
    let dataset = dataset_from_csv(
        "id,name,birth\n1,Alice,c. 1950\n2,Bob,1961\n",
        "id,title,year\n",
        "person_id,movie_id\n",
    );

    let alice = dataset.person("1").expect("Alice present");
    assert_eq!(alice.birth, None);
    assert_eq!(alice.birth_text, "c. 1950");
    let bob = dataset.person("2").expect("Bob present");
    assert_eq!(bob.birth, Some(1961));
    assert_eq!(bob.birth_text, "1961");
}

#[test]
fn fields_are_trimmed() {
    let dataset = dataset_from_csv(
        "id,name,birth\n 1 , Alice , 1970 \n",
        "id,title,year\n10, First ,2000\n",
        "person_id,movie_id\n 1 , 10 \n",
    );
    let alice = dataset.person("1").expect("trimmed id");
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.birth, Some(1970));
    assert_eq!(dataset.person_ids_for_name("alice"), vec!["1"]);
    assert_eq!(dataset.stats().links, 1);
}
