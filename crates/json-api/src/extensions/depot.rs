//! Depot helper extensions.

use std::any::Any;

use backoffice_app::{
    auth::{Action, authorize},
    domain::users::records::UserRecord,
};
use salvo::prelude::{Depot, StatusError};
use tracing::debug;

/// The authenticated caller, placed in the depot by the bearer middleware.
struct CurrentUser(UserRecord);

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_current_user(&mut self, user: UserRecord);

    fn current_user_or_401(&self) -> Result<&UserRecord, StatusError>;

    /// The current user, provided they may perform `action`.
    fn authorize_or_403(&self, action: Action) -> Result<&UserRecord, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_current_user(&mut self, user: UserRecord) {
        self.inject(CurrentUser(user));
    }

    fn current_user_or_401(&self) -> Result<&UserRecord, StatusError> {
        self.obtain::<CurrentUser>()
            .map(|current| &current.0)
            .map_err(|_ignored| {
                StatusError::unauthorized().brief("Could not validate credentials")
            })
    }

    fn authorize_or_403(&self, action: Action) -> Result<&UserRecord, StatusError> {
        let user = self.current_user_or_401()?;

        authorize(user, action).map_err(|denied| {
            debug!(user = %user.uuid, "{denied}");

            StatusError::forbidden().brief("Not enough permissions")
        })?;

        Ok(user)
    }
}
