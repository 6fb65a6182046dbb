//! User entity and role model shared by the auth and dashboard modules.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// A user in the system. The password hash never leaves the database layer.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// System roles. Stored as lowercase strings in the `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

/// Parse a role string from the database or a token into a [`UserRole`].
pub fn parse_role(role_str: &str) -> Result<UserRole, AppError> {
    match role_str {
        "admin" => Ok(UserRole::Admin),
        "teacher" => Ok(UserRole::Teacher),
        "student" => Ok(UserRole::Student),
        _ => Err(AppError::internal(anyhow::anyhow!(
            "Invalid role: {}",
            role_str
        ))),
    }
}
