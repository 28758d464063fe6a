use std::{future::Future, pin::Pin, sync::Arc};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpMessage, web,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use common::error::AppError;
use common::http::redirect_to;
use futures::future::{Ready, ok};
use sqlx::SqlitePool;

/// Route-level auth gate: every path except `/login` requires an established
/// session. The resolved `User` row lands in request extensions for handlers
/// to pick up via `web::ReqData<User>`; anything else is a redirect to the
/// login form, never an error page.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        AuthMiddleware
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // the login form is the only public path
        if req.path() == "/login" {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(|res| res.map_into_boxed_body()) });
        }

        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            let session = req.get_session();
            let user_id = session.get::<i64>("user_id").unwrap_or(None);

            let Some(user_id) = user_id else {
                let response = redirect_to("/login").map_into_boxed_body();
                return Ok(req.into_response(response));
            };

            let pool = req
                .app_data::<web::Data<Arc<SqlitePool>>>()
                .cloned()
                .ok_or_else(|| AppError::Internal("Database pool not configured".to_string()))?;
            let pool: &SqlitePool = &pool;

            match db::user::get_user_by_id(pool, user_id).await? {
                Some(user) => {
                    req.extensions_mut().insert(user);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                None => {
                    // session points at a user row that no longer exists
                    session.purge();
                    let response = redirect_to("/login").map_into_boxed_body();
                    Ok(req.into_response(response))
                }
            }
        })
    }
}
