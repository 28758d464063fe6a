use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{
    dtos::user::UserCreateRequest,
    models::user::{Role, User},
};

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Looks up a user by exact username and password equality. The plaintext
/// comparison is the documented legacy credential scheme.
pub async fn get_user_by_credentials<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    username: &str,
    password: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ? AND password = ?")
        .bind(username)
        .bind(password)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn exists_user_with_role<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    role: Role,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE role = ?)")
        .bind(role)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password, role)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.username)
    .bind(data.password)
    .bind(data.role)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
