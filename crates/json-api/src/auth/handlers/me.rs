//! Current User Handler

use salvo::prelude::*;

use crate::{extensions::*, users::get::UserResponse};

/// Current User Handler
///
/// Returns the account the bearer token belongs to.
#[endpoint(
    tags("auth"),
    summary = "Current User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The authenticated user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not authenticated"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let user = depot.current_user_or_401()?;

    Ok(Json(user.clone().into()))
}
