use std::sync::Arc;

use actix_web::{HttpResponse, get, web};
use common::error::Res;
use common::http::{html_page, redirect_to};
use db::models::user::{Role, User};
use sqlx::SqlitePool;

use crate::{pages, services::report};

/// Every sale across all franchisees plus the grand total. The admin role is
/// the one read path that is not owner-scoped.
#[get("/admin")]
pub async fn get_admin_dashboard(
    user: web::ReqData<User>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<HttpResponse> {
    if user.role != Role::Admin {
        return Ok(redirect_to(user.role.home_path()));
    }
    let pool: &SqlitePool = &pool;
    let sales = db::sale::list_all_sales(pool).await?;
    let report = report::aggregate(&sales);
    Ok(html_page(pages::admin_dashboard(&sales, &report)))
}
