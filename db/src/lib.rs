use std::{str::FromStr, sync::Arc};

use common::error::Res;
use sqlx::{
    SqlitePool,
    migrate::Migrator,
    sqlite::SqliteConnectOptions,
};

use crate::{dtos::user::UserCreateRequest, models::user::Role};

pub mod job;
pub mod sale;
pub mod user;

pub mod models {
    pub mod job;
    pub mod sale;
    pub mod user;
}

pub mod dtos {
    pub mod job;
    pub mod sale;
    pub mod user;
}

/// Embedded migrations; exported so tests can run them against in-memory
/// databases.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the store, creating the database file and schema when absent, and
/// seeds the default admin identity if no admin-role user exists yet.
pub async fn setup(database_url: &str) -> Res<Arc<SqlitePool>> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(common::error::AppError::from)?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .map_err(common::error::AppError::from)?;

    MIGRATOR.run(&pool).await?;
    seed_admin(&pool).await?;

    Ok(Arc::new(pool))
}

/// Inserts the `admin`/`admin` identity when no admin exists. The default
/// credential is a known weakness of the legacy scheme; it is logged, not
/// silently hardened.
pub async fn seed_admin(pool: &SqlitePool) -> Res<()> {
    if !user::exists_user_with_role(pool, Role::Admin).await? {
        user::insert_user(
            pool,
            UserCreateRequest {
                username: "admin".to_string(),
                password: "admin".to_string(),
                role: Role::Admin,
            },
        )
        .await?;
        log::warn!("seeded default admin account with default credentials; change them");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::job::JobCreateRequest;
    use crate::dtos::sale::SaleCreateRequest;
    use chrono::{Duration, NaiveDate};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // One connection, or every pooled connection would get its own
        // private in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    async fn franchisee(pool: &SqlitePool, name: &str) -> models::user::User {
        user::insert_user(
            pool,
            UserCreateRequest {
                username: name.to_string(),
                password: "pw".to_string(),
                role: Role::Franchisee,
            },
        )
        .await
        .unwrap()
    }

    fn sale_for(user_id: i64, price: Option<f64>) -> SaleCreateRequest {
        SaleCreateRequest {
            user_id,
            description: "gutter cleaning".to_string(),
            before_image: None,
            after_image: None,
            proof_image: None,
            address: "12 Elm St".to_string(),
            zip_code: "55401".to_string(),
            customer_first: "Ada".to_string(),
            customer_last: "Nilsen".to_string(),
            phone: "555-0100".to_string(),
            payment_method: "cash".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn seed_admin_is_idempotent_and_credentials_match() {
        let pool = test_pool().await;
        seed_admin(&pool).await.unwrap();
        seed_admin(&pool).await.unwrap();

        let admin = user::get_user_by_credentials(&pool, "admin", "admin")
            .await
            .unwrap()
            .expect("seeded admin should log in");
        assert_eq!(admin.role, Role::Admin);

        let miss = user::get_user_by_credentials(&pool, "admin", "wrong")
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn sales_are_scoped_to_their_owner() {
        let pool = test_pool().await;
        let u1 = franchisee(&pool, "north").await;
        let u2 = franchisee(&pool, "south").await;

        sale::insert_sale(&pool, sale_for(u1.id, Some(100.0)))
            .await
            .unwrap();
        sale::insert_sale(&pool, sale_for(u2.id, Some(50.0)))
            .await
            .unwrap();

        let own = sale::list_sales_by_owner(&pool, u1.id).await.unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].user_id, u1.id);

        let other = sale::list_sales_by_owner(&pool, u2.id).await.unwrap();
        assert!(other.iter().all(|s| s.user_id == u2.id));

        let all = sale::list_all_sales(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        // Stable documented order: id ascending.
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn upcoming_jobs_window_is_inclusive_on_both_ends() {
        let pool = test_pool().await;
        let u = franchisee(&pool, "west").await;
        let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let next_week = today + Duration::days(7);

        for (title, date) in [
            ("yesterday", today - Duration::days(1)),
            ("today", today),
            ("boundary", next_week),
            ("too far", next_week + Duration::days(1)),
        ] {
            job::insert_job(
                &pool,
                JobCreateRequest {
                    user_id: u.id,
                    title: title.to_string(),
                    scheduled_for: date,
                },
            )
            .await
            .unwrap();
        }

        let jobs = job::list_upcoming_jobs(&pool, u.id, today, next_week)
            .await
            .unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["today", "boundary"]);
    }

    #[tokio::test]
    async fn upcoming_jobs_exclude_other_owners() {
        let pool = test_pool().await;
        let u1 = franchisee(&pool, "east").await;
        let u2 = franchisee(&pool, "midwest").await;
        let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();

        job::insert_job(
            &pool,
            JobCreateRequest {
                user_id: u2.id,
                title: "not yours".to_string(),
                scheduled_for: today,
            },
        )
        .await
        .unwrap();

        let jobs = job::list_upcoming_jobs(&pool, u1.id, today, today + Duration::days(7))
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn inserted_sale_round_trips_attachment_filenames() {
        let pool = test_pool().await;
        let u = franchisee(&pool, "plains").await;
        let mut req = sale_for(u.id, Some(75.5));
        req.before_image = Some("before.jpg".to_string());
        req.after_image = Some("after.jpg".to_string());
        req.proof_image = Some("proof.jpg".to_string());

        let sale = sale::insert_sale(&pool, req).await.unwrap();
        assert_eq!(sale.before_image.as_deref(), Some("before.jpg"));
        assert_eq!(sale.after_image.as_deref(), Some("after.jpg"));
        assert_eq!(sale.proof_image.as_deref(), Some("proof.jpg"));

        let fetched = sale::get_sale_by_id(&pool, sale.id).await.unwrap().unwrap();
        assert_eq!(fetched.price, Some(75.5));
        assert_eq!(fetched.user_id, u.id);
    }
}
