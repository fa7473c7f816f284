//! Back-office domain concerns

pub mod money;
pub mod orders;
pub mod pagination;
pub mod products;
pub mod stats;
pub mod users;
