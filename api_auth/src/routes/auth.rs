use std::sync::Arc;

use actix_session::Session;
use actix_web::{HttpResponse, get, post, web};
use common::error::{AppError, Res};
use common::http::{html_page, redirect_to};
use sqlx::SqlitePool;

use crate::{dtos::auth::LoginForm, pages};

#[get("/login")]
pub async fn get_login() -> Res<HttpResponse> {
    Ok(html_page(pages::login_page(None)))
}

/// Credential check by exact username/password equality. A match binds the
/// session to that identity and redirects home; a miss re-renders the form
/// with a flash message (still a 200). No lockout, no attempt counting.
#[post("/login")]
pub async fn post_login(
    form: web::Form<LoginForm>,
    session: Session,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<HttpResponse> {
    let pool: &SqlitePool = &pool;
    let user = db::user::get_user_by_credentials(pool, &form.username, &form.password).await?;

    match user {
        Some(user) => {
            session
                .insert("user_id", user.id)
                .map_err(|_| AppError::Internal("Failed to write session".to_string()))?;
            Ok(redirect_to("/"))
        }
        None => Ok(html_page(pages::login_page(Some("Invalid credentials")))),
    }
}

/// Unconditionally clears the session; idempotent.
#[get("/logout")]
pub async fn get_logout(session: Session) -> Res<HttpResponse> {
    session.purge();
    Ok(redirect_to("/login"))
}
