//! JSON-backed ledger repository.
use anyhow::Result;
use std::sync::Arc;

use crate::domain::models::Ledger;
use crate::storage::traits::LedgerStorage;

use super::connection::JsonConnection;

#[derive(Debug, Clone)]
pub struct LedgerRepository {
    connection: Arc<JsonConnection>,
}

impl LedgerRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl LedgerStorage for LedgerRepository {
    fn get_ledger(&self, user_id: &str) -> Result<Ledger> {
        let path = self.connection.ledger_file_path(user_id);
        Ok(self
            .connection
            .read_document(&path)?
            .unwrap_or_default())
    }

    fn put_ledger(&self, user_id: &str, ledger: &Ledger) -> Result<()> {
        let path = self.connection.ledger_file_path(user_id);
        self.connection.write_document(&path, ledger)
    }
}
