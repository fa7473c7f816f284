//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use backoffice_app::{
    auth::Action,
    domain::products::{data::NewProduct, records::ProductUuid},
};

use crate::{extensions::*, products::errors::into_status_error, state::State};

use super::{ProductRequest, get::ProductResponse};

/// Create Product Handler
///
/// Admin only.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Not enough permissions"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(Action::CreateProduct)?;

    let uuid = ProductUuid::new();

    tracing::Span::current().record("product_uuid", tracing::field::display(uuid));

    let product = state
        .app
        .products
        .create_product(NewProduct {
            uuid,
            details: json.into_inner().into(),
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %uuid, price = %product.price, "created product");

    Ok(Json(product.into()))
}
