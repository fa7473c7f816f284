//! Stats Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::stats::records::DashboardStats;

const DASHBOARD_SQL: &str = include_str!("sql/dashboard.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStatsRepository;

impl PgStatsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn dashboard(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<DashboardStats, sqlx::Error> {
        query_as::<Postgres, DashboardStats>(DASHBOARD_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DashboardStats {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total_orders: try_get_count(row, "total_orders")?,
            total_revenue: row.try_get("total_revenue")?,
            total_users: try_get_count(row, "total_users")?,
            total_products: try_get_count(row, "total_products")?,
            pending_orders: try_get_count(row, "pending_orders")?,
        })
    }
}

fn try_get_count(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let count_i64: i64 = row.try_get(col)?;

    u64::try_from(count_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
