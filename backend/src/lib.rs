//! Nexo backend: ledger engine, user management, statistics, AI
//! insights, and the REST surface over a per-user JSON document store.

pub mod domain;
pub mod rest;
pub mod storage;
