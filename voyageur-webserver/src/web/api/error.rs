use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;
use voyageur_application::error::{AppError, BError};
pub use voyageur_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::OtherWithStatus(anyhow!("{what} not found"), Status::NotFound)
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

fn repo_error_status(err: &RepoError) -> Option<Status> {
    match err {
        RepoError::NotFound => Some(Status::NotFound),
        RepoError::AlreadyExists => Some(Status::Conflict),
        RepoError::Other(_) => None,
    }
}

fn parameter_error_status(err: &ParameterError) -> Option<Status> {
    let status = match err {
        ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::UserExists => Status::Conflict,
        ParameterError::UserDoesNotExist => Status::NotFound,
        ParameterError::Repo(err) => return repo_error_status(err),
        _ => Status::BadRequest,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    let status = match err {
                        BError::Parameter(err) => parameter_error_status(err),
                        BError::Repo(err) => repo_error_status(err),
                    };
                    if let Some(status) = status {
                        return json_error_response(req, err, status);
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
