use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::dashboard::model::{DayHours, NextClass, TeacherDashboard, TeacherStats};
use crate::modules::users::model::{User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::dashboard::controller::teacher_dashboard,
    ),
    components(
        schemas(
            User,
            UserRole,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            TeacherDashboard,
            TeacherStats,
            NextClass,
            DayHours,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Dashboard", description = "Teacher dashboard reporting")
    ),
    info(
        title = "EduStream API",
        version = "0.1.0",
        description = "Reporting backend for the EduStream live-teaching platform.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
