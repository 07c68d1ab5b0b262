//! User accounts and authentication.

use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::commands::users::{
    AuthenticateCommand, CreateUserCommand, DeleteUserCommand, ResetPasswordCommand,
    SetUserActiveCommand,
};
use crate::domain::errors::UserError;
use crate::domain::models::{Role, User};
use crate::storage::UserStorage;

const MASTER_ADMIN_ID: &str = "master-root";

pub struct UserService {
    store: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStorage>) -> Self {
        Self { store }
    }

    /// Guarantee a master admin exists on first launch. A non-empty
    /// user list is left alone, even if the master admin was deleted.
    pub fn seed_master_admin(&self) -> Result<(), UserError> {
        let users = self.store.get_users()?;
        if !users.is_empty() {
            return Ok(());
        }
        let master = User {
            id: MASTER_ADMIN_ID.to_string(),
            email: "admin@nexo.com".to_string(),
            name: "Nexo Administrator".to_string(),
            role: Role::Admin,
            is_active: true,
            password: "admin".to_string(),
        };
        self.store.put_users(&[master])?;
        info!("seeded master admin account");
        Ok(())
    }

    pub fn authenticate(&self, command: AuthenticateCommand) -> Result<User, UserError> {
        let email = normalize_email(&command.email);
        let password = command.password.trim();

        let users = self.store.get_users()?;
        let user = users
            .iter()
            .find(|u| normalize_email(&u.email) == email && u.password == password)
            .ok_or(UserError::InvalidCredentials)?;
        if !user.is_active {
            return Err(UserError::AccountSuspended);
        }
        info!("user {} authenticated", user.id);
        Ok(user.clone())
    }

    pub fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.get_users()?)
    }

    pub fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let email = normalize_email(&command.email);
        if email.is_empty() || !email.contains('@') {
            return Err(UserError::Validation(format!(
                "invalid email address '{}'",
                command.email
            )));
        }
        if command.name.trim().is_empty() {
            return Err(UserError::Validation("name must not be empty".to_string()));
        }
        if command.password.trim().is_empty() {
            return Err(UserError::Validation(
                "password must not be empty".to_string(),
            ));
        }

        let mut users = self.store.get_users()?;
        if users.iter().any(|u| normalize_email(&u.email) == email) {
            return Err(UserError::Validation(format!(
                "a user with email '{email}' already exists"
            )));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            name: command.name.trim().to_string(),
            role: command.role,
            is_active: true,
            password: command.password.trim().to_string(),
        };
        users.push(user.clone());
        self.store.put_users(&users)?;

        info!("created user {} ({:?})", user.id, user.role);
        Ok(user)
    }

    pub fn set_user_active(&self, command: SetUserActiveCommand) -> Result<User, UserError> {
        let mut users = self.store.get_users()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == command.user_id)
            .ok_or_else(|| UserError::NotFound(command.user_id.clone()))?;
        user.is_active = command.is_active;
        let updated = user.clone();
        self.store.put_users(&users)?;

        info!(
            "user {} is now {}",
            updated.id,
            if updated.is_active { "active" } else { "suspended" }
        );
        Ok(updated)
    }

    pub fn reset_password(&self, command: ResetPasswordCommand) -> Result<(), UserError> {
        if command.new_password.trim().is_empty() {
            return Err(UserError::Validation(
                "password must not be empty".to_string(),
            ));
        }
        let mut users = self.store.get_users()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == command.user_id)
            .ok_or_else(|| UserError::NotFound(command.user_id.clone()))?;
        user.password = command.new_password.trim().to_string();
        self.store.put_users(&users)?;

        info!("password reset for user {}", command.user_id);
        Ok(())
    }

    pub fn delete_user(&self, command: DeleteUserCommand) -> Result<(), UserError> {
        if command.user_id == command.acting_user_id {
            return Err(UserError::CannotDeleteSelf);
        }
        let mut users = self.store.get_users()?;
        let position = users
            .iter()
            .position(|u| u.id == command.user_id)
            .ok_or_else(|| UserError::NotFound(command.user_id.clone()))?;
        users.remove(position);
        self.store.put_users(&users)?;

        info!("deleted user {}", command.user_id);
        Ok(())
    }
}

/// Emails compare case-insensitively and with all whitespace removed, so
/// " Admin@Nexo.com " logs in as admin@nexo.com.
fn normalize_email(email: &str) -> String {
    email
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
