use crate::models::user::Role;

#[derive(Debug, Clone)]
pub struct UserCreateRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}
