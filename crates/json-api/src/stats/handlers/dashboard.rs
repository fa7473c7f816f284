//! Dashboard Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use backoffice_app::{auth::Action, domain::stats::DashboardStats};

use crate::{extensions::*, state::State, stats::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub total_orders: u64,

    /// Sum of every order total, `"0.00"`-style decimal string
    #[salvo(schema(value_type = String))]
    pub total_revenue: Decimal,

    pub total_users: u64,

    /// Active products only
    pub total_products: u64,

    pub pending_orders: u64,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        DashboardResponse {
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue,
            total_users: stats.total_users,
            total_products: stats.total_products,
            pending_orders: stats.pending_orders,
        }
    }
}

/// Dashboard Handler
#[endpoint(
    tags("stats"),
    summary = "Dashboard Statistics",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Store-wide totals"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(Action::ViewDashboard)?;

    let stats = state
        .app
        .stats
        .dashboard()
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
