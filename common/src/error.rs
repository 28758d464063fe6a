use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === APPLICATION ERRORS ===
    #[error("Authorization error: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_body = |err_msg: &str| {
            if is_dev {
                err_msg.to_string()
            } else {
                "Internal server error".to_string()
            }
        };

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .body(to_internal_body(&error.to_string()))
            }
            AppError::Migration(error) => {
                log::error!("Migration error: {}", error);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .body(to_internal_body(&error.to_string()))
            }
            AppError::Io(error) => {
                log::error!("I/O error: {}", error);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .body(to_internal_body(&error.to_string()))
            }

            // === APPLICATION ERRORS ===
            AppError::Unauthorized(_) => HttpResponse::Unauthorized()
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            AppError::NotFound(_) => HttpResponse::NotFound()
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            AppError::BadRequest(_) => HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::plaintext())
                    .body(to_internal_body(&error.to_string()))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}
