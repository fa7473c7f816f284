//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use backoffice_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::EmailTaken => StatusError::conflict().brief("Email already registered"),
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Incorrect email or password")
        }
        AuthServiceError::Unauthorized => {
            StatusError::unauthorized().brief("Could not validate credentials")
        }
        AuthServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Email, password and full name are required")
        }
        AuthServiceError::Password(source) => {
            error!("password hashing failed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to issue access token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
