use thiserror::Error;

use crate::{authorization, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Unknown kind of location")]
    Kind,
    #[error("Invalid position")]
    Position,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Editorial score out of range")]
    EditorialScore,
    #[error("Personal rating out of range")]
    PersonalRating,
    #[error("Invalid email address")]
    Email,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<authorization::user::Error> for Error {
    fn from(err: authorization::user::Error) -> Self {
        match err {
            authorization::user::Error::UnauthorizedRole => Self::Forbidden,
        }
    }
}
