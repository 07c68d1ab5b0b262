//! Commands for account lifecycle operations.

#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    pub name: String,
    pub initial_balance: f64,
}

#[derive(Debug, Clone)]
pub struct DeleteAccountCommand {
    pub account_id: String,
}
