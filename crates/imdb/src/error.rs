//! Error types for the imdb crate.
//!
//! Only lookups of a movie's cast can fail in normal use. Integrity checks
//! add a second variant describing a credit that one index holds and the
//! other does not.

use std::fmt;
use thiserror::Error;

/// Which of the two registry indexes a credit was expected in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSide {
    /// The movie → actors index
    Cast,
    /// The actor → movies index
    Filmography,
}

impl fmt::Display for IndexSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSide::Cast => write!(f, "cast"),
            IndexSide::Filmography => write!(f, "filmography"),
        }
    }
}

/// Errors returned by registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImdbError {
    /// The movie has never been released, or was removed
    #[error("Unknown movie: {movie}")]
    UnknownMovie { movie: String },

    /// A credit is recorded on one side of the registry but not the other
    #[error("Credit {actor} in {movie} is missing from the {missing_from} index")]
    InconsistentCredit {
        movie: String,
        actor: String,
        missing_from: IndexSide,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ImdbError>;
