//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction. Dropping it without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or the
    /// transaction cannot be started.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply any pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded history diverges
/// from the bundled migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Coarse classification of a storage failure, used by each service error
/// type to pick its domain variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageFailure {
    RowNotFound,
    UniqueViolation,
    ForeignKeyViolation,
    NotNullViolation,
    CheckViolation,
    Other,
}

pub(crate) fn classify(error: &sqlx::Error) -> StorageFailure {
    use sqlx::error::{DatabaseError, ErrorKind};

    if matches!(error, sqlx::Error::RowNotFound) {
        return StorageFailure::RowNotFound;
    }

    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::UniqueViolation) => StorageFailure::UniqueViolation,
        Some(ErrorKind::ForeignKeyViolation) => StorageFailure::ForeignKeyViolation,
        Some(ErrorKind::NotNullViolation) => StorageFailure::NotNullViolation,
        Some(ErrorKind::CheckViolation) => StorageFailure::CheckViolation,
        Some(ErrorKind::Other | _) | None => StorageFailure::Other,
    }
}
