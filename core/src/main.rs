use actix_web::{App, HttpServer, web};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let cookie_secure = is_production;

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection (creates the file, runs migrations, seeds admin)
    let pool = db::setup(&config.database_url)
        .await
        .expect("Failed to set up database");

    // attachment directory
    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create upload directory");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(api_auth::auth_middleware()) // 3rd
            .wrap(api_auth::session_middleware(
                config_data.session_secret.as_bytes(),
                cookie_secure,
            )) // 2nd
            .wrap(logger::middleware()) // 1st
            .service(api_auth::routes::auth::get_login)
            .service(api_auth::routes::auth::post_login)
            .service(api_auth::routes::auth::get_logout)
            .service(api_sales::routes::views::get_index)
            .service(api_sales::routes::views::get_dashboard)
            .service(api_sales::routes::views::get_calendar)
            .service(api_sales::routes::views::get_performance)
            .service(api_sales::routes::admin::get_admin_dashboard)
            .service(api_sales::routes::sale::get_new_sale)
            .service(api_sales::routes::sale::post_new_sale)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
