use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled future appointment belonging to one franchisee. No route
/// creates these; rows are seeded externally. Dates are UTC-naive.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub scheduled_for: NaiveDate,
}
