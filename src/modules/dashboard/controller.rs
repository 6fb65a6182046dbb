use axum::{Json, extract::State};
use tracing::{error, instrument};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::dashboard::model::TeacherDashboard;
use crate::modules::dashboard::service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Teacher dashboard: aggregate stats and weekly teaching trends
#[utoipa::path(
    get,
    path = "/api/dashboard/teacher",
    responses(
        (status = 200, description = "Teacher dashboard data retrieved successfully", body = TeacherDashboard),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Teacher only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state, auth_user))]
pub async fn teacher_dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<TeacherDashboard>, AppError> {
    if !auth_user.is_teacher() {
        return Err(AppError::forbidden(
            "Only teachers can access this dashboard.".to_string(),
        ));
    }

    let teacher_id = auth_user.user_id()?;

    match DashboardService::teacher_dashboard(&state.db, teacher_id).await {
        Ok(dashboard) => Ok(Json(dashboard)),
        Err(e) => {
            // Full chain stays in the server logs; the client only sees a
            // generic message.
            error!(
                teacher = %auth_user.email(),
                error = ?e.error,
                "Failed to compute teacher dashboard"
            );
            Err(AppError::internal(anyhow::anyhow!(
                "Failed to retrieve dashboard. Please try again."
            )))
        }
    }
}
