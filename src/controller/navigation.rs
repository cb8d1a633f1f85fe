use actix_web::HttpResponse;
use maud::Markup;

/// Push to a screen by path (query parameters included in `location`).
/// Mutation handlers redirect here after a successful write so a refresh
/// never replays the form post.
#[must_use]
pub fn push(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

#[must_use]
pub fn html_page(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
