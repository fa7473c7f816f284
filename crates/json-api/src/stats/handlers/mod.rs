//! Stats Handlers

pub(crate) mod dashboard;
