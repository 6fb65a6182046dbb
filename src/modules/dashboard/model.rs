//! Teacher dashboard response models.
//!
//! The JSON shape uses camelCase keys to match the frontend contract:
//! `stats` with the aggregate numbers and `weeklyTrends` with one entry per
//! weekday, Sunday through Saturday.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full dashboard payload for a teacher.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDashboard {
    pub stats: TeacherStats,
    pub weekly_trends: Vec<DayHours>,
}

/// Aggregate statistics over the teacher's class sessions and enrollments.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherStats {
    /// Sum of completed session durations, in hours, rounded to 2 decimals.
    pub total_teaching_hours: f64,
    /// Distinct students enrolled in any course the teacher has a schedule for.
    pub active_students: i64,
    /// Active sessions starting after now.
    pub upcoming_classes: i64,
    /// The earliest upcoming session, if any.
    pub next_class: Option<NextClass>,
    /// Inactive sessions whose end time has already passed.
    pub missing_classes: i64,
}

/// The next scheduled class, formatted in the server's local timezone.
#[derive(Debug, Serialize, ToSchema)]
pub struct NextClass {
    pub course: String,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local 12-hour clock time, `hh:mm AM/PM`.
    pub time: String,
}

/// Teaching hours accumulated on one weekday of the current week.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DayHours {
    pub day: String,
    pub hours: f64,
}

/// Start/end pair of a completed session, as fetched for trend bucketing.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SessionSpan {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Course name and start of the earliest upcoming session.
#[derive(Debug, FromRow)]
pub struct NextClassRow {
    pub course: String,
    pub start_time: DateTime<Utc>,
}
