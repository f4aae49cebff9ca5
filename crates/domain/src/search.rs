use derive_more::{AsRef, Display};

use crate::{Exercise, ReadError};

/// Validated free-text search term.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Result<Self, SearchError> {
        let trimmed_term = term.trim();

        if trimmed_term.is_empty() {
            return Err(SearchError::Empty);
        }

        Ok(SearchTerm(trimmed_term.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter a search term")]
    Empty,
}

/// Result of a list request in the form shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseListing {
    Exercises(Vec<Exercise>),
    Empty(String),
    Error(String),
}

impl ExerciseListing {
    pub fn for_category(category: &str, result: Result<Vec<Exercise>, ReadError>) -> Self {
        Self::classify(result, || {
            format!("No exercises found for {category}. Try selecting a different category.")
        })
    }

    pub fn for_search(result: Result<Vec<Exercise>, ReadError>) -> Self {
        Self::classify(result, || {
            "No exercises found. Try a different search term.".to_string()
        })
    }

    fn classify(
        result: Result<Vec<Exercise>, ReadError>,
        empty_message: impl FnOnce() -> String,
    ) -> Self {
        match result {
            Ok(exercises) if exercises.is_empty() => ExerciseListing::Empty(empty_message()),
            Ok(exercises) => ExerciseListing::Exercises(exercises),
            Err(err) => ExerciseListing::Error(err.user_message("exercises")),
        }
    }
}
