use axum::{extract::rejection::JsonRejection, response::Json};
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;

/// Read the `type` tag of an inbound event. The body must be a JSON object.
pub fn validate_event_type(body: &Value) -> Result<&str, ApiError> {
    let Some(fields) = body.as_object() else {
        return Err(ApiError::BadRequest(
            "event body must be a JSON object".to_string(),
        ));
    };

    match fields.get("type") {
        None | Some(Value::Null) => Err(ApiError::BadRequest("event type is required".to_string())),
        Some(Value::String(t)) if t.trim().is_empty() => Err(ApiError::BadRequest(
            "event type must not be blank".to_string(),
        )),
        Some(Value::String(t)) => Ok(t.as_str()),
        Some(_) => Err(ApiError::BadRequest("event type must be a string".to_string())),
    }
}

/// Inbound events from the bus. Logged, acknowledged, not acted on.
pub async fn receive_event(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let event_type = validate_event_type(&body)?;

    info!(event_type, "Received event");

    Ok(Json(json!({})))
}
