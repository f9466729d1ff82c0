use thiserror::Error;

use crate::moves::Move;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed state '{state}': {reason}")]
    MalformedState { state: String, reason: String },

    #[error("expected exactly one blank on the grid, found {found}")]
    NoBlankFound { found: usize },

    #[error("move {mv} is not available with the blank at row {row}, column {col}")]
    IllegalMove { mv: Move, row: usize, col: usize },

    #[error("tile '{tile}' of '{from}' does not appear in '{to}'")]
    TileNotFound { tile: char, from: String, to: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(state: &str, reason: impl Into<String>) -> Self {
        Error::MalformedState {
            state: state.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
