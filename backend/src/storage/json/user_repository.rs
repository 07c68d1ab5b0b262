//! JSON-backed user list repository.
use anyhow::Result;
use std::sync::Arc;

use crate::domain::models::User;
use crate::storage::traits::UserStorage;

use super::connection::JsonConnection;

#[derive(Debug, Clone)]
pub struct UserRepository {
    connection: Arc<JsonConnection>,
}

impl UserRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl UserStorage for UserRepository {
    fn get_users(&self) -> Result<Vec<User>> {
        let path = self.connection.users_file_path();
        Ok(self
            .connection
            .read_document(&path)?
            .unwrap_or_default())
    }

    fn put_users(&self, users: &[User]) -> Result<()> {
        let path = self.connection.users_file_path();
        self.connection.write_document(&path, &users)
    }
}
