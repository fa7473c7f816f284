//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService, TokenService},
    database::{self, Db},
    domain::{
        orders::{OrdersService, PgOrdersService, TransitionPolicy},
        products::{PgProductsService, ProductsService},
        stats::{PgStatsService, StatsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Every service the HTTP layer needs, each behind a trait object so
/// handlers can be tested against mocks.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub stats: Arc<dyn StatsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        tokens: TokenService,
        policy: TransitionPolicy,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_pool(pool, tokens, policy))
    }

    #[must_use]
    pub fn from_pool(pool: PgPool, tokens: TokenService, policy: TransitionPolicy) -> Self {
        let db = Db::new(pool);

        Self {
            users: Arc::new(PgUsersService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone(), policy)),
            stats: Arc::new(PgStatsService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db, tokens)),
        }
    }
}
