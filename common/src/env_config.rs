use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to initialize and run the server: the database
/// location, the upload directory for sale attachments, session cookie key
/// material, bind address, worker count, and logging preferences.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The SQLite database URL; the file is created on first run.
    pub database_url: String,
    /// Directory where sale attachments are written, created on startup.
    pub upload_dir: String,
    /// Key material for signing/encrypting the session cookie.
    pub session_secret: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// Whether console logging is enabled.
    pub console_logging_enabled: bool,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `ENVIRONMENT`: "development" or "production"
    ///
    /// Optional (with defaults):
    /// - `DATABASE_URL`: SQLite URL (default: "sqlite://jobledger.db")
    /// - `UPLOAD_DIR`: attachment directory (default: "static/uploads")
    /// - `SESSION_SECRET`: session cookie key material; must be at least
    ///   64 bytes (a development-only default is provided)
    /// - `IP`: server host (default: "127.0.0.1")
    /// - `PORT`: server port (default: 8080)
    /// - `WORKERS`: number of worker threads (default: 4)
    /// - `ENABLE_CONSOLE_LOGGING`: whether to log to console (default: true)
    ///
    /// # Panics
    ///
    /// Panics if `ENVIRONMENT` is missing or numeric values cannot be parsed.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://jobledger.db".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/uploads".to_string()),
            session_secret: env::var("SESSION_SECRET").unwrap_or_else(|_| {
                "jobledger-dev-session-secret-not-for-production-use-0123456789abcdef".to_string()
            }),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
        })
    }
}
