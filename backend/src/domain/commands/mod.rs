//! Command structs consumed by the domain services.

pub mod accounts;
pub mod transactions;
pub mod users;
