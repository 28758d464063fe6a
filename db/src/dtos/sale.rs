#[derive(Debug, Clone)]
pub struct SaleCreateRequest {
    /// Always the submitting user's id, set server-side.
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
    pub price: Option<f64>,
}
