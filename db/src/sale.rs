use chrono::Utc;
use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::sale::SaleCreateRequest, models::sale::Sale};

pub async fn get_sale_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    sale_id: i64,
) -> Res<Option<Sale>> {
    sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = ?")
        .bind(sale_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Sales owned by one franchisee, id ascending (insertion order).
pub async fn list_sales_by_owner<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Vec<Sale>> {
    sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE user_id = ? ORDER BY id ASC")
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// Every sale across all franchisees, id ascending. Admin surface only.
pub async fn list_all_sales<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<Sale>> {
    sqlx::query_as::<_, Sale>("SELECT * FROM sales ORDER BY id ASC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_sale<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: SaleCreateRequest,
) -> Res<Sale> {
    sqlx::query_as::<_, Sale>(
        r#"
        INSERT INTO sales (
            user_id, description, before_image, after_image, proof_image,
            address, zip_code, customer_first, customer_last, phone,
            payment_method, price, timestamp
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.description)
    .bind(data.before_image)
    .bind(data.after_image)
    .bind(data.proof_image)
    .bind(data.address)
    .bind(data.zip_code)
    .bind(data.customer_first)
    .bind(data.customer_last)
    .bind(data.phone)
    .bind(data.payment_method)
    .bind(data.price)
    .bind(Utc::now().naive_utc())
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
