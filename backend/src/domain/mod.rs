//! Domain layer: models, commands, and the services that own all
//! business rules. Services talk to storage only through the traits in
//! [`crate::storage`].

pub mod account_service;
pub mod commands;
pub mod errors;
pub mod insight_service;
pub mod ledger_service;
pub mod models;
pub mod statistics_service;
pub mod user_service;

pub use account_service::AccountService;
pub use errors::{LedgerError, UserError};
pub use insight_service::{
    AiAnalysis, GeminiInsightProvider, InsightProvider, InsightService,
};
pub use ledger_service::{LedgerPolicy, LedgerService};
pub use statistics_service::{LedgerSummary, MonthlyFlow, StatisticsService};
pub use user_service::UserService;
