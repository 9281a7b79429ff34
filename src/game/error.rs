use super::panel::SubmitRefused;
use super::triple::FetchError;
use crate::services::ServiceError;
use thiserror::Error;

/// Errors surfaced by the game to its front end
#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not load puzzle words: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("no game is ready yet")]
    NotReady,

    #[error("round {} is not the active round", .0 + 1)]
    RoundNotActive(usize),

    #[error(transparent)]
    Refused(#[from] SubmitRefused),
}
