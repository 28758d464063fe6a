use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
