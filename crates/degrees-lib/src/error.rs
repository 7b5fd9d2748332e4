use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the degrees library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset directory could not be located at the resolved path.
    #[error("dataset directory not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// One of the required CSV sources is missing from the dataset directory.
    #[error("required dataset source not found at {path}")]
    SourceNotFound { path: PathBuf },

    /// Raised when a CSV source has an unusable header or row.
    #[error("failed to read {source_name}: {error}")]
    Csv {
        source_name: String,
        #[source]
        error: csv::Error,
    },

    /// Raised when a person name could not be found in the dataset.
    #[error("Person not found: {name}{}", format_suggestions(.suggestions))]
    UnknownPerson {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an ambiguous name was not resolved to one of its candidates.
    #[error("Person not found: {}", describe_choice(.name, .choice.as_deref()))]
    UnresolvedChoice {
        name: String,
        choice: Option<String>,
    },

    /// Raised when a search is started from or towards an id missing from the index.
    #[error("unknown person id: {id}")]
    UnknownPersonId { id: String },

    /// Raised when a path refers to a movie missing from the index.
    #[error("unknown movie id: {id}")]
    UnknownMovieId { id: String },

    /// Raised when removing from a frontier that holds no nodes.
    #[error("empty frontier")]
    EmptyFrontier,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

fn describe_choice(name: &str, choice: Option<&str>) -> String {
    match choice {
        Some(choice) => format!("'{choice}' is not one of the people named '{name}'"),
        None => format!("no person chosen for ambiguous name '{name}'"),
    }
}
