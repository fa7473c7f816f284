//! Orders

pub mod data;
pub mod errors;
pub mod number;
pub mod records;
mod repositories;
pub mod service;
pub mod status;

pub use data::*;
pub use errors::OrdersServiceError;
pub use records::*;
pub use service::*;
pub use status::{OrderStatus, TransitionPolicy};
