use chrono::NaiveDate;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::job::JobCreateRequest, models::job::Job};

pub async fn get_job_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    job_id: i64,
) -> Res<Option<Job>> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(job_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Jobs for one franchisee with `scheduled_for` inside the closed interval
/// `[from, to]`, soonest first. Dates are UTC-naive.
pub async fn list_upcoming_jobs<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> Res<Vec<Job>> {
    sqlx::query_as::<_, Job>(
        r#"
        SELECT * FROM jobs
        WHERE user_id = ? AND scheduled_for >= ? AND scheduled_for <= ?
        ORDER BY scheduled_for ASC, id ASC
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Seeding/test path only; no HTTP route creates jobs.
pub async fn insert_job<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: JobCreateRequest,
) -> Res<Job> {
    sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (user_id, title, scheduled_for)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.title)
    .bind(data.scheduled_for)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
