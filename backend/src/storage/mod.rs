//! Storage layer: abstraction traits plus the JSON-document
//! implementation.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{LedgerStorage, UserStorage};
