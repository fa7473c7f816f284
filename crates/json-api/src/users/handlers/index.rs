//! List Users Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use backoffice_app::{auth::Action, domain::pagination::Pagination};

use crate::{extensions::*, state::State, users::errors::into_status_error};

use super::get::UserResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// List Users Handler
///
/// Admin only. Users are returned in registration order.
#[endpoint(
    tags("users"),
    summary = "List Users",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "A page of users"),
        (status_code = StatusCode::FORBIDDEN, description = "Not enough permissions"),
    ),
)]
pub(crate) async fn handler(
    skip: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<UsersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.authorize_or_403(Action::ListUsers)?;

    let users = state
        .app
        .users
        .list_users(Pagination::new(skip.into_inner(), limit.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}
