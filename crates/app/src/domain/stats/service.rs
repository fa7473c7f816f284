//! Stats service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::stats::{
        errors::StatsServiceError, records::DashboardStats, repository::PgStatsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgStatsService {
    db: Db,
    repository: PgStatsRepository,
}

impl PgStatsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStatsRepository::new(),
        }
    }
}

#[async_trait]
impl StatsService for PgStatsService {
    async fn dashboard(&self) -> Result<DashboardStats, StatsServiceError> {
        let mut tx = self.db.begin().await?;

        let stats = self.repository.dashboard(&mut tx).await?;

        tx.commit().await?;

        Ok(stats)
    }
}

#[automock]
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Current store-wide totals, read in one statement.
    async fn dashboard(&self) -> Result<DashboardStats, StatsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::orders::{OrderStatus, OrdersService},
        domain::products::ProductsService,
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn empty_store_reports_zeroes() -> TestResult {
        let ctx = TestContext::new().await;

        let stats = ctx.stats.dashboard().await?;

        assert_eq!(stats, DashboardStats::default());

        Ok(())
    }

    #[tokio::test]
    async fn dashboard_counts_orders_revenue_users_and_active_products() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.create_order("ann@example.com").await;
        let second = ctx.create_order("bob@example.com").await;

        ctx.orders
            .update_status(second.uuid, OrderStatus::Processing)
            .await?;

        let retired = ctx.create_product("Retired", Decimal::new(100, 2), None).await;

        ctx.products.delete_product(retired.uuid).await?;

        let stats = ctx.stats.dashboard().await?;

        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.total_revenue, first.total_amount + second.total_amount);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_products, 2, "the deleted product is excluded");
        assert_eq!(stats.pending_orders, 1);

        Ok(())
    }
}
