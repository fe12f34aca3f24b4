//! Errors that can happen while loading the reservation feed

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a reservation feed could not be loaded.
///
/// None of these is fatal: callers are expected to fall back to an empty store (see [`ReservationStore::load_or_empty`](crate::store::ReservationStore::load_or_empty))
#[derive(Debug)]
pub enum FeedError {
    /// Network or I/O failure while retrieving the document
    Fetch(Box<dyn Error + Send + Sync>),
    /// The document does not have the expected shape
    Parse(String),
}

impl FeedError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, FeedError::Fetch(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FeedError::Parse(_))
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            FeedError::Fetch(err) => write!(f, "unable to fetch the reservation feed: {}", err),
            FeedError::Parse(details) => write!(f, "invalid reservation feed: {}", details),
        }
    }
}

impl Error for FeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FeedError::Fetch(err) => Some(err.as_ref()),
            FeedError::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Fetch(Box::new(err))
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::Fetch(Box::new(err))
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
