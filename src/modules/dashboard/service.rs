use anyhow::Context;
use chrono::{DateTime, Local, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::dashboard::model::{
    DayHours, NextClass, NextClassRow, SessionSpan, TeacherDashboard, TeacherStats,
};
use crate::modules::dashboard::trends::{self, round_hours, week_bounds};
use crate::utils::errors::AppError;

pub struct DashboardService;

impl DashboardService {
    /// Compute the full dashboard payload for one teacher.
    ///
    /// All queries are read-only and scoped to sessions reachable through the
    /// teacher's class schedules. "Completed" means `end_time <= now` with the
    /// active flag set; "missed" means `end_time < now` with the flag cleared.
    #[instrument(skip(db))]
    pub async fn teacher_dashboard(
        db: &PgPool,
        teacher_id: Uuid,
    ) -> Result<TeacherDashboard, AppError> {
        let now = Utc::now();

        let total_teaching_hours = Self::total_teaching_hours(db, teacher_id, now).await?;
        let active_students = Self::active_students(db, teacher_id).await?;
        let upcoming_classes = Self::upcoming_classes(db, teacher_id, now).await?;
        let next_class = Self::next_class(db, teacher_id, now).await?;
        let missing_classes = Self::missing_classes(db, teacher_id, now).await?;
        let weekly_trends = Self::weekly_trends(db, teacher_id, now).await?;

        Ok(TeacherDashboard {
            stats: TeacherStats {
                total_teaching_hours,
                active_students,
                upcoming_classes,
                next_class,
                missing_classes,
            },
            weekly_trends,
        })
    }

    /// Sum of completed session durations, in hours rounded to 2 decimals.
    async fn total_teaching_hours(
        db: &PgPool,
        teacher_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<f64, AppError> {
        let total_seconds = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT CAST(COALESCE(SUM(EXTRACT(EPOCH FROM (s.end_time - s.start_time))), 0) AS DOUBLE PRECISION)
            FROM class_sessions s
            JOIN class_schedules cs ON cs.id = s.schedule_id
            WHERE cs.teacher_id = $1
              AND s.end_time <= $2
              AND s.is_active = TRUE
            "#,
        )
        .bind(teacher_id)
        .bind(now)
        .fetch_one(db)
        .await
        .context("Failed to sum completed session durations")
        .map_err(AppError::database)?;

        Ok(round_hours(total_seconds / 3600.0))
    }

    /// Distinct students enrolled in any course the teacher has a schedule for.
    async fn active_students(db: &PgPool, teacher_id: Uuid) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT e.student_id)
            FROM course_enrollments e
            JOIN class_schedules cs ON cs.course_id = e.course_id
            WHERE cs.teacher_id = $1
            "#,
        )
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .context("Failed to count active students")
        .map_err(AppError::database)
    }

    /// Active sessions starting strictly after `now`.
    async fn upcoming_classes(
        db: &PgPool,
        teacher_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM class_sessions s
            JOIN class_schedules cs ON cs.id = s.schedule_id
            WHERE cs.teacher_id = $1
              AND s.start_time > $2
              AND s.is_active = TRUE
            "#,
        )
        .bind(teacher_id)
        .bind(now)
        .fetch_one(db)
        .await
        .context("Failed to count upcoming classes")
        .map_err(AppError::database)
    }

    /// Earliest upcoming session, formatted for display in local time.
    async fn next_class(
        db: &PgPool,
        teacher_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<NextClass>, AppError> {
        let row = sqlx::query_as::<_, NextClassRow>(
            r#"
            SELECT c.name AS course, s.start_time
            FROM class_sessions s
            JOIN class_schedules cs ON cs.id = s.schedule_id
            JOIN courses c ON c.id = cs.course_id
            WHERE cs.teacher_id = $1
              AND s.start_time > $2
              AND s.is_active = TRUE
            ORDER BY s.start_time
            LIMIT 1
            "#,
        )
        .bind(teacher_id)
        .bind(now)
        .fetch_optional(db)
        .await
        .context("Failed to fetch next class")
        .map_err(AppError::database)?;

        Ok(row.map(|row| {
            let local_start = row.start_time.with_timezone(&Local);
            NextClass {
                course: row.course,
                date: local_start.format("%Y-%m-%d").to_string(),
                time: local_start.format("%I:%M %p").to_string(),
            }
        }))
    }

    /// Inactive sessions whose end time has passed.
    async fn missing_classes(
        db: &PgPool,
        teacher_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM class_sessions s
            JOIN class_schedules cs ON cs.id = s.schedule_id
            WHERE cs.teacher_id = $1
              AND s.end_time < $2
              AND s.is_active = FALSE
            "#,
        )
        .bind(teacher_id)
        .bind(now)
        .fetch_one(db)
        .await
        .context("Failed to count missed classes")
        .map_err(AppError::database)
    }

    /// Per-weekday hours for completed sessions starting in the current week.
    ///
    /// The window is `[Sunday 00:00 local, +7 days)`; a session starting
    /// exactly on the Sunday boundary is included, one starting a second
    /// earlier is not.
    async fn weekly_trends(
        db: &PgPool,
        teacher_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<DayHours>, AppError> {
        // Derive the week from the same instant as the completion cutoff so
        // the window and the `end_time <= now` filter cannot disagree across
        // a local midnight.
        let today = now.with_timezone(&Local).date_naive();
        let (week_start, week_end) = week_bounds(today, &Local).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!(
                "Could not resolve local midnight for week start"
            ))
        })?;

        let sessions = sqlx::query_as::<_, SessionSpan>(
            r#"
            SELECT s.start_time, s.end_time
            FROM class_sessions s
            JOIN class_schedules cs ON cs.id = s.schedule_id
            WHERE cs.teacher_id = $1
              AND s.start_time >= $2
              AND s.start_time < $3
              AND s.is_active = TRUE
              AND s.end_time <= $4
            "#,
        )
        .bind(teacher_id)
        .bind(week_start.with_timezone(&Utc))
        .bind(week_end.with_timezone(&Utc))
        .bind(now)
        .fetch_all(db)
        .await
        .context("Failed to fetch this week's completed sessions")
        .map_err(AppError::database)?;

        Ok(trends::weekly_trends(&sessions, &Local))
    }
}
