//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use backoffice_app::{
    auth::Action,
    domain::orders::{CustomerDetails, NewOrder, NewOrderItem, OrderItemUuid, OrderUuid},
};

use crate::{
    extensions::*, observability::record_order_created, orders::errors::into_status_error,
    state::State,
};

use super::get::OrderResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemRequest {
    pub product_uuid: Uuid,

    pub quantity: u32,

    /// Unit price charged for this line
    #[salvo(schema(value_type = String))]
    pub price: Decimal,
}

impl From<OrderItemRequest> for NewOrderItem {
    fn from(item: OrderItemRequest) -> Self {
        NewOrderItem {
            uuid: OrderItemUuid::new(),
            product_uuid: item.product_uuid.into(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub customer_name: String,

    pub customer_email: String,

    #[serde(default)]
    pub customer_phone: Option<String>,

    #[serde(default)]
    pub customer_address: Option<String>,

    /// Defaults to `cash`
    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    pub items: Vec<OrderItemRequest>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            uuid: OrderUuid::new(),
            customer: CustomerDetails {
                name: request.customer_name,
                email: request.customer_email,
                phone: request.customer_phone,
                address: request.customer_address,
            },
            items: request.items.into_iter().map(NewOrderItem::from).collect(),
            payment_method: request.payment_method,
            notes: request.notes,
        }
    }
}

/// Create Order Handler
///
/// The order is attributed to the caller. Either the order and all of its
/// items are stored, or nothing is.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (
            status_code = StatusCode::BAD_REQUEST,
            description = "Empty order, invalid item or unknown product"
        ),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty, items = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.authorize_or_403(Action::CreateOrder)?.uuid;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(user));
    span.record("items", request.items.len());

    let order = state
        .app
        .orders
        .create_order(user, request.into())
        .await
        .map_err(into_status_error)?;

    record_order_created();

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
