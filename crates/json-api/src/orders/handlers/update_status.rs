//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backoffice_app::{auth::Action, domain::orders::OrderStatus};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Body form of the status change, used when no `status` query is given.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusUpdatedResponse {
    pub message: String,

    pub uuid: Uuid,

    pub status: String,
}

/// Update Order Status Handler
///
/// Accepts the new status as `?status=` or as a JSON body `{"status": ...}`.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
    ),
)]
#[tracing::instrument(
    name = "orders.update_status",
    skip(order, status, req, depot),
    fields(order_uuid = tracing::field::Empty, status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    status: QueryParam<String, false>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderStatusUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(Action::UpdateOrderStatus)?;

    let status = match status.into_inner() {
        Some(status) => status,
        None => {
            req.parse_json::<UpdateOrderStatusRequest>()
                .await
                .or_400("missing order status")?
                .status
        }
    };

    let status = status.parse::<OrderStatus>().or_400("invalid order status")?;
    let order = order.into_inner();

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));
    span.record("status", status.as_str());

    let order = state
        .app
        .orders
        .update_status(order.into(), status)
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_uuid = %order.uuid, status = %order.status, "order status updated");

    Ok(Json(OrderStatusUpdatedResponse {
        message: "Order status updated".to_owned(),
        uuid: order.uuid.into(),
        status: order.status.to_string(),
    }))
}
