//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use backoffice_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidPrice => StatusError::bad_request()
            .brief("Price must be non-negative with at most two decimal places"),
        ProductsServiceError::InvalidStock(_) => {
            StatusError::bad_request().brief("Stock value out of range")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("products storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
