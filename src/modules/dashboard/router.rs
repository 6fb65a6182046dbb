use axum::{Router, routing::get};

use crate::modules::dashboard::controller::teacher_dashboard;
use crate::state::AppState;

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new().route("/teacher", get(teacher_dashboard))
}
