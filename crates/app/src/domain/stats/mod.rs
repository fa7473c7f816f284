//! Dashboard statistics

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::StatsServiceError;
pub use records::DashboardStats;
pub use service::*;
