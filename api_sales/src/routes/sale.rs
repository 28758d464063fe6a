use std::path::Path;
use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, get, post, web};
use common::env_config::Config;
use common::error::Res;
use common::http::{html_page, redirect_to};
use db::dtos::sale::SaleCreateRequest;
use db::models::user::{Role, User};
use sqlx::SqlitePool;

use crate::{pages, services::intake};

#[get("/sale/new")]
pub async fn get_new_sale(user: web::ReqData<User>) -> Res<HttpResponse> {
    if user.role != Role::Franchisee {
        return Ok(redirect_to(user.role.home_path()));
    }
    Ok(html_page(pages::sale_form()))
}

/// Accepts the multipart submission, writes up to three attachments into the
/// upload directory, and commits the sale row attributed to the submitting
/// franchisee. Attachment writes precede the insert; there is no rollback
/// coordination between the two.
#[post("/sale/new")]
pub async fn post_new_sale(
    user: web::ReqData<User>,
    payload: Multipart,
    pool: web::Data<Arc<SqlitePool>>,
    config: web::Data<Arc<Config>>,
) -> Res<HttpResponse> {
    if user.role != Role::Franchisee {
        return Ok(redirect_to(user.role.home_path()));
    }

    let submission = intake::collect_submission(payload, Path::new(&config.upload_dir)).await?;

    let pool: &SqlitePool = &pool;
    db::sale::insert_sale(
        pool,
        SaleCreateRequest {
            // server-controlled ownership, never taken from the client
            user_id: user.id,
            description: submission.description,
            before_image: submission.before_image,
            after_image: submission.after_image,
            proof_image: submission.proof_image,
            address: submission.address,
            zip_code: submission.zip_code,
            customer_first: submission.customer_first,
            customer_last: submission.customer_last,
            phone: submission.phone,
            payment_method: submission.payment_method,
            price: Some(submission.price),
        },
    )
    .await?;

    Ok(redirect_to("/dashboard"))
}
