use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use posts_common::{Event, Post, PostEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::AppState;

/// Pull the title out of a create request body. Any string is accepted as-is.
pub fn validate_title(body: &Value) -> Result<String, ApiError> {
    match body.get("title") {
        None | Some(Value::Null) => Err(ApiError::BadRequest("title is required".to_string())),
        Some(Value::String(title)) => Ok(title.clone()),
        Some(_) => Err(ApiError::BadRequest("title must be a string".to_string())),
    }
}

pub async fn list_posts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.list().await)
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;
    let title = validate_title(&body)?;

    // Insert, publish and rollback run detached from the request so a client
    // disconnect cannot strand an unannounced post in the store.
    let post = tokio::spawn(create_and_publish(state, title))
        .await
        .map_err(|e| {
            error!(error = %e, "Create task failed");
            ApiError::Internal
        })??;

    Ok((StatusCode::CREATED, Json(post)))
}

async fn create_and_publish(state: Arc<AppState>, title: String) -> Result<Post, ApiError> {
    let post = state.store.create(title).await;
    info!(post_id = %post.id, "Post created");

    let created = PostEvent::PostCreated(post.clone());
    let event_type = created.event_type();
    let event: Event = created.into();

    if let Err(e) = state.publisher.publish(&event).await {
        warn!(error = %e, post_id = %post.id, event_type, "Failed to publish event, rolling back");
        state.store.remove(post.id).await;
        return Err(ApiError::Publish {
            event_type,
            source: e,
        });
    }

    Ok(post)
}
