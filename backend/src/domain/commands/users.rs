//! Commands for authentication and user administration.
use crate::domain::models::Role;

#[derive(Debug, Clone)]
pub struct AuthenticateCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct SetUserActiveCommand {
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub user_id: String,
    pub new_password: String,
}

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: String,
    /// The admin performing the deletion; deleting yourself is refused.
    pub acting_user_id: String,
}
