use actix_web::HttpResponse;
use actix_web::http::header::{ContentType, LOCATION};

/// 302 redirect to the given path.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header((LOCATION, location.to_string()))
        .finish()
}

/// 200 text/html response.
pub fn html_page(markup: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup)
}
