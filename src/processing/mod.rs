use serde::Deserialize;
use thiserror::Error;

use crate::domain::query::NewQuery;
use crate::domain::team::NewTeam;
use crate::repository::errors::RepositoryError;

pub mod embedding;
pub mod matching;
pub mod profile;
pub mod query;
pub mod rebuild;
pub mod team;

/// Job messages accepted on the ZMQ socket.
#[derive(Deserialize, Debug)]
pub enum ZMQMessage {
    CreateTeam(NewTeam),
    UpdateTeam { id: String, team: NewTeam },
    DeleteTeam(String),
    CreateQuery(NewQuery),
    Rebuild,
}

/// Failures of derivation and matching. Never retried internally; handlers
/// surface them to the caller.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("zero-norm embedding: {0}")]
    DegenerateVector(String),
    #[error("no candidate teams to rank")]
    NoCandidates,
    #[error("inconsistent derived state: {0}")]
    InconsistentDerivedState(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ProcessingResult<T> = Result<T, ProcessingError>;
