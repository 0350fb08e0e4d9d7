//! URL shortening routes

use actix_web::{web, HttpResponse};
use url::Url;
use validator::Validate;

use sg_core::services::shortener::UrlShortener;
use sg_shared::types::ApiResponse;

use crate::dto::url::{ShortenUrlQuery, ShortenUrlRequest, ShortenUrlResponse};
use crate::routes::validation_error_response;

async fn shorten(shortener: &dyn UrlShortener, raw_url: &str) -> HttpResponse {
    if raw_url.trim().is_empty() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("URL is required"));
    }

    if Url::parse(raw_url).is_err() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid URL format"));
    }

    let outcome = shortener.shorten(raw_url).await;

    match (outcome.success, outcome.short_url) {
        (true, Some(short_url)) => {
            let characters_saved = raw_url.len() as i64 - short_url.len() as i64;

            HttpResponse::Ok().json(ApiResponse::success(ShortenUrlResponse {
                original_url: raw_url.to_string(),
                short_url,
                characters_saved,
            }))
        }
        _ => {
            let error = outcome.error.as_deref().unwrap_or("unknown error");
            log::error!("Failed to shorten URL {}: {}", raw_url, error);

            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(format!("Failed to shorten URL: {}", error)))
        }
    }
}

/// Handler for GET `/api/url/shorten?url=...`
pub async fn shorten_url_get(
    shortener: web::Data<dyn UrlShortener>,
    query: web::Query<ShortenUrlQuery>,
) -> HttpResponse {
    shorten(shortener.get_ref(), query.url.as_deref().unwrap_or("")).await
}

/// Handler for POST `/api/url/shorten`
pub async fn shorten_url_post(
    shortener: web::Data<dyn UrlShortener>,
    request: web::Json<ShortenUrlRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    shorten(shortener.get_ref(), &request.url).await
}
