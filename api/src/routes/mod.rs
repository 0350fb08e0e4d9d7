//! HTTP route handlers

pub mod auth;
pub mod sms;
pub mod url;

use actix_web::HttpResponse;

use sg_shared::types::ApiResponse;

/// 400 response summarizing DTO validation failures
pub(crate) fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut details: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => details.push(message.to_string()),
                None => details.push(format!("{} is invalid", field)),
            }
        }
    }

    // Deterministic ordering for callers and tests
    details.sort();

    HttpResponse::BadRequest().json(ApiResponse::<()>::error(details.join("; ")))
}
