//! Stats Errors

use salvo::http::StatusError;
use tracing::error;

use backoffice_app::domain::stats::StatsServiceError;

pub(crate) fn into_status_error(error: StatsServiceError) -> StatusError {
    match error {
        StatsServiceError::Sql(source) => {
            error!("failed to read dashboard statistics: {source}");

            StatusError::internal_server_error()
        }
    }
}
