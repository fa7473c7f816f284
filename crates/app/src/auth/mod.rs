//! Authentication and authorization

pub mod access;
mod errors;
mod models;
pub mod password;
mod service;
mod token;

pub use access::{AccessDenied, Action, authorize};
pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
