//! Products service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

use crate::database::{StorageFailure, classify};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("price must be non-negative with at most two decimal places")]
    InvalidPrice,

    #[error("stock value out of range")]
    InvalidStock(#[from] TryFromIntError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match classify(&error) {
            StorageFailure::RowNotFound => Self::NotFound,
            StorageFailure::UniqueViolation => Self::AlreadyExists,
            StorageFailure::NotNullViolation => Self::MissingRequiredData,
            StorageFailure::CheckViolation => Self::InvalidData,
            StorageFailure::ForeignKeyViolation | StorageFailure::Other => Self::Sql(error),
        }
    }
}
