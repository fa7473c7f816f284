//! List Products Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use backoffice_app::domain::pagination::Pagination;

use crate::{extensions::*, products::errors::into_status_error, state::State};

use super::get::ProductResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

/// List Products Handler
///
/// Public. Only active products are listed, optionally filtered by category.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "A page of products"),
    ),
)]
pub(crate) async fn handler(
    skip: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = Pagination::new(skip.into_inner(), limit.into_inner());

    let products = state
        .app
        .products
        .list_products(category.into_inner(), page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}
