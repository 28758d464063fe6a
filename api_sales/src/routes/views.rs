use std::sync::Arc;

use actix_web::{HttpResponse, get, web};
use chrono::{Duration, Utc};
use common::error::Res;
use common::http::{html_page, redirect_to};
use db::models::user::{Role, User};
use sqlx::SqlitePool;

use crate::{pages, services::report};

/// Role-appropriate landing redirect. Unauthenticated requests never reach
/// this; the auth middleware has already sent them to `/login`.
#[get("/")]
pub async fn get_index(user: web::ReqData<User>) -> Res<HttpResponse> {
    Ok(redirect_to(user.role.home_path()))
}

#[get("/dashboard")]
pub async fn get_dashboard(
    user: web::ReqData<User>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<HttpResponse> {
    if user.role != Role::Franchisee {
        return Ok(redirect_to(user.role.home_path()));
    }
    let pool: &SqlitePool = &pool;
    let sales = db::sale::list_sales_by_owner(pool, user.id).await?;
    Ok(html_page(pages::dashboard(&sales)))
}

/// Own jobs inside the closed seven-day window starting today (UTC-naive).
#[get("/calendar")]
pub async fn get_calendar(
    user: web::ReqData<User>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<HttpResponse> {
    if user.role != Role::Franchisee {
        return Ok(redirect_to(user.role.home_path()));
    }
    let pool: &SqlitePool = &pool;
    let today = Utc::now().date_naive();
    let next_week = today + Duration::days(7);
    let jobs = db::job::list_upcoming_jobs(pool, user.id, today, next_week).await?;
    Ok(html_page(pages::calendar(&jobs)))
}

#[get("/performance")]
pub async fn get_performance(
    user: web::ReqData<User>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<HttpResponse> {
    if user.role != Role::Franchisee {
        return Ok(redirect_to(user.role.home_path()));
    }
    let pool: &SqlitePool = &pool;
    let sales = db::sale::list_sales_by_owner(pool, user.id).await?;
    let report = report::aggregate(&sales);
    Ok(html_page(pages::performance(&report)))
}
