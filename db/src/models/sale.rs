use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One completed job logged by a franchisee, with customer and payment
/// detail and up to three photo attachments (stored by original filename).
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub proof_image: Option<String>,
    pub address: String,
    pub zip_code: String,
    pub customer_first: String,
    pub customer_last: String,
    pub phone: String,
    pub payment_method: String,
    // Nullable for externally seeded rows; the creation path always writes
    // a value (empty input becomes 0.0).
    pub price: Option<f64>,
    pub timestamp: NaiveDateTime,
}
