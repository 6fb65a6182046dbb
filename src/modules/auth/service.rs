use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

/// Database row for a user including the password hash. Only this service
/// ever reads the hash; the public [`User`] model omits it.
#[derive(sqlx::FromRow)]
struct UserRecord {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            role: record.role,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, first_name, last_name, email, password, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&dto.password, &record.password)? {
            return Err(AppError::unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let user: User = record.into();
        let access_token = create_access_token(&user, jwt_config)?;

        Ok(LoginResponse { access_token, user })
    }
}
