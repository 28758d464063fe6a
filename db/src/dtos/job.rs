use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct JobCreateRequest {
    pub user_id: i64,
    pub title: String,
    pub scheduled_for: NaiveDate,
}
