//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::dto::{InboundSms, SmsReply};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/inbound", post(inbound_sms))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Handle one inbound SMS from the gateway.
///
/// The reply text goes back in the response body; the gateway delivers it
/// to the rider. An envelope without a sender is a gateway bug and gets a
/// 400 so it shows up in delivery logs.
async fn inbound_sms(
    State(state): State<AppState>,
    Json(sms): Json<InboundSms>,
) -> Result<Json<SmsReply>, StatusCode> {
    if sms.origination_number.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    debug!(from = %sms.origination_number, "inbound sms");

    let reply = state
        .dispatcher
        .handle(&sms.origination_number, &sms.message_body)
        .await;

    Ok(Json(SmsReply { reply }))
}
