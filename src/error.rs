//! src/error.rs
//!
//! Foutafhandeling voor de kMIS-oplossers. Alle fouten zijn lokaal aan één run:
//! een fout breekt de trace van die run af, maar raakt geen andere runs.

use thiserror::Error;

/// Alle fouten die de crate kan teruggeven.
#[derive(Error, Debug)]
pub enum KmisError {
    /// Een lid/niet-lid voorwaarde op een `Solution` is geschonden.
    /// Dit is altijd een programmeerfout; de run wordt afgebroken.
    #[error("ongeldige toestand: {message}")]
    InvalidState { message: String },

    /// Er zijn niet genoeg elementen om `k` te bereiken (`k > |E|` of `k == 0`).
    #[error("lege kandidatenlijst: k={k} past niet in een grondverzameling van {n} elementen")]
    EmptyCandidateList { k: usize, n: usize },

    /// Instantie-tekst of feature-sets zijn inconsistent.
    #[error("ongeldige instantie: {message}")]
    InvalidInstance { message: String },

    /// Een parameter valt buiten zijn geldige bereik.
    #[error("ongeldige parameter: {message}")]
    InvalidParams { message: String },

    #[error("I/O-fout: {0}")]
    Io(#[from] std::io::Error),
}

impl KmisError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        KmisError::InvalidState { message: message.into() }
    }

    pub(crate) fn invalid_instance(message: impl Into<String>) -> Self {
        KmisError::InvalidInstance { message: message.into() }
    }

    pub(crate) fn invalid_params(message: impl Into<String>) -> Self {
        KmisError::InvalidParams { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, KmisError>;
