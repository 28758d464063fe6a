use serde::{Deserialize, Serialize};

/// Access level attached to every account.
///
/// Stored as lowercase text and always matched exhaustively, never by raw
/// string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Franchisee,
}

impl Role {
    /// Path of the dashboard this role lands on.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Franchisee => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    // Plaintext equality check, kept as documented legacy behavior.
    pub password: String,
    pub role: Role,
}
