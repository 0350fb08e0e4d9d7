//! SMS send routes
//!
//! The same three handlers serve both the default (`/api/sms`) and the
//! alternate (`/twilio/sms`) scopes. The dispatcher each request sees is
//! whichever instance the enclosing scope registered at startup, so the
//! route path alone decides the backing provider.

use actix_web::{web, HttpResponse};
use validator::Validate;

use sg_core::services::dispatch::SmsDispatcher;
use sg_shared::types::ApiResponse;

use crate::dto::sms::{
    SendBulkSmsRequest, SendSmsRequest, SendSmsResponse, SendSmsWithLinkRequest,
    SendWithLinkResponse,
};
use crate::middleware::auth::AuthContext;
use crate::routes::validation_error_response;

/// Handler for POST `{scope}/send`
pub async fn send_sms(
    dispatcher: web::Data<SmsDispatcher>,
    auth: AuthContext,
    request: web::Json<SendSmsRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!(
        "SMS request from user {}, company {} to {} via {}",
        auth.user_id.as_deref().unwrap_or("unknown"),
        auth.company_id.as_deref().unwrap_or("N/A"),
        request.phone_number,
        dispatcher.provider_name()
    );

    let outcome = dispatcher
        .send_simple(
            &request.phone_number,
            &request.message,
            auth.company_id.as_deref(),
        )
        .await;

    if !outcome.success {
        let error = outcome.error.as_deref().unwrap_or("unknown error");
        log::error!("SMS failed to {}: {}", request.phone_number, error);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error(format!("Failed to send SMS: {}", error)));
    }

    HttpResponse::Ok().json(ApiResponse::success(SendSmsResponse {
        message_id: outcome.message_id,
    }))
}

/// Handler for POST `{scope}/send-with-link`
pub async fn send_sms_with_link(
    dispatcher: web::Data<SmsDispatcher>,
    auth: AuthContext,
    request: web::Json<SendSmsWithLinkRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!(
        "SMS with link from user {} to {} via {}",
        auth.user_id.as_deref().unwrap_or("unknown"),
        request.phone_number,
        dispatcher.provider_name()
    );

    let result = dispatcher
        .send_with_link(
            &request.phone_number,
            &request.url,
            request.message.as_deref(),
            request.shorten_url,
            auth.company_id.as_deref(),
        )
        .await;

    if !result.outcome.success {
        let error = result.outcome.error.as_deref().unwrap_or("unknown error");
        log::error!("SMS failed to {}: {}", request.phone_number, error);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error(format!("Failed to send SMS: {}", error)));
    }

    HttpResponse::Ok().json(ApiResponse::success(SendWithLinkResponse {
        message_id: result.outcome.message_id,
        original_url: result.original_url,
        sent_url: result.sent_url,
        message_sent: result.message_sent,
    }))
}

/// Handler for POST `{scope}/send-bulk`.
///
/// Always 200: individual failures are reported inline, per recipient.
pub async fn send_bulk_sms(
    dispatcher: web::Data<SmsDispatcher>,
    auth: AuthContext,
    request: web::Json<SendBulkSmsRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!(
        "Bulk SMS request from company {} to {} recipients via {}",
        auth.company_id.as_deref().unwrap_or("N/A"),
        request.phone_numbers.len(),
        dispatcher.provider_name()
    );

    let report = dispatcher
        .send_bulk(
            &request.phone_numbers,
            &request.message,
            auth.company_id.as_deref(),
        )
        .await;

    HttpResponse::Ok().json(ApiResponse::success(report))
}
