use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
};

pub const JOIN_SUCCESS_MESSAGE: &str = "Success! Email added to waitlist and confirmation sent.";

#[derive(Deserialize)]
struct JoinWaitlistPayload {
    #[serde(default)]
    email: Option<Value>,
}

/// `false`, `0` and `null` read as no address at all; any other non-string
/// value cannot be used as a document key.
fn email_field(value: Option<Value>) -> AppResult<String> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(String::new()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(String::new()),
        Some(Value::String(email)) => Ok(email),
        Some(other) => Err(AppError::Internal(format!(
            "Waitlist email is not a string: {other}"
        ))),
    }
}

#[derive(Serialize)]
struct JoinWaitlistResponse {
    message: &'static str,
}

/// POST /api/waitlist
/// Stores the email and sends the confirmation message.
///
/// The body is parsed by hand so that an unreadable body lands on the same
/// generic failure as every other error past validation, whatever the
/// Content-Type header says.
async fn join_waitlist(
    State(app_state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: JoinWaitlistPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Unreadable waitlist request body: {e}")))?;
    let email = email_field(payload.email)?;

    app_state.waitlist_use_cases.join(&email).await?;

    Ok((
        StatusCode::OK,
        Json(JoinWaitlistResponse {
            message: JOIN_SUCCESS_MESSAGE,
        }),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}
