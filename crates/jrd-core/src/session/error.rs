use thiserror::Error;

/// Malformed user input. Reported to the user; the run stops before any network work.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid artifact URL: {0}")]
    InvalidUrl(String),
    #[error("invalid local storage JSON: {0}")]
    InvalidLocalStorage(#[from] serde_json::Error),
    #[error("local storage JSON must be an array of records")]
    NotAnArray,
}
