use axum::Router;
use axum::body::Body;
use axum::http::Request;
use chrono::{DateTime, Utc};
use edustream::config::cors::CorsConfig;
use edustream::config::jwt::JwtConfig;
use edustream::router::init_router;
use edustream::state::AppState;
use edustream::utils::password::hash_password;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub async fn get_auth_token(app: Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Insert a user with the given role ("teacher", "student", "admin").
pub async fn create_user(db: &PgPool, email: &str, password: &str, role: &str) -> Uuid {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO users (first_name, last_name, email, password, role)
        VALUES ('Test', 'User', $1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(hashed)
    .bind(role)
    .fetch_one(db)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_course(db: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO courses (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(db)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_schedule(db: &PgPool, course_id: Uuid, teacher_id: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO class_schedules (course_id, teacher_id, title)
        VALUES ($1, $2, 'Test schedule')
        RETURNING id
        "#,
    )
    .bind(course_id)
    .bind(teacher_id)
    .fetch_one(db)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_session(
    db: &PgPool,
    schedule_id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    is_active: bool,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO class_sessions (schedule_id, start_time, end_time, is_active)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(schedule_id)
    .bind(start_time)
    .bind(end_time)
    .bind(is_active)
    .fetch_one(db)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn enroll_student(db: &PgPool, course_id: Uuid, student_id: Uuid) {
    sqlx::query("INSERT INTO course_enrollments (course_id, student_id) VALUES ($1, $2)")
        .bind(course_id)
        .bind(student_id)
        .execute(db)
        .await
        .unwrap();
}
