use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use middleware::session_auth::AuthMiddleware;

pub mod dtos {
    pub mod auth;
}
pub mod middleware {
    pub mod session_auth;
}
pub mod pages;
pub mod routes {
    pub mod auth;
}

/// Cookie-backed session middleware. The key is derived from the configured
/// secret; `cookie_secure` should be on in production.
pub fn session_middleware(secret: &[u8], cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::derive_from(secret))
        .cookie_secure(cookie_secure)
        .build()
}

/// Middleware resolving the session identity into request extensions and
/// redirecting unauthenticated requests to the login form.
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}
