//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{
    auth::{TokenError, password::PasswordError},
    database::{StorageFailure, classify},
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("email already registered")]
    EmailTaken,

    /// Unknown email, wrong password and disabled account are
    /// indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("could not validate credentials")]
    Unauthorized,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("password hashing failed")]
    Password(#[from] PasswordError),

    #[error("token could not be issued")]
    Token(#[from] TokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        match classify(&error) {
            StorageFailure::UniqueViolation => Self::EmailTaken,
            StorageFailure::NotNullViolation => Self::MissingRequiredData,
            _ => Self::Sql(error),
        }
    }
}
