use thiserror::Error;
use voyageur_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

/// Failure of a flow.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected by the domain rules or the location store.
    #[error(transparent)]
    Business(#[from] BError),
    /// Gateway or infrastructure failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        Self::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        match err {
            // Keep store failures distinguishable from rejected parameters.
            ParameterError::Repo(err) => err.into(),
            err => Self::Business(BError::Parameter(err)),
        }
    }
}
