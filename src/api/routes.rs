use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::api::models::{GeneratedPost, TopicRequest};
use crate::error::{AppError, Result};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/generate-post", post(generate_post_handler))
        .route("/", get(root_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn generate_post_handler(
    State(state): State<AppState>,
    Json(req): Json<TopicRequest>,
) -> Result<Json<GeneratedPost>> {
    // Reject before any outbound call is made
    let topic = req.topic.trim();
    if topic.is_empty() {
        return Err(AppError::ValidationError(
            "The 'topic' field must not be empty".to_string(),
        ));
    }

    info!("Processing request for topic: {}", topic);
    let start_time = std::time::Instant::now();

    let result = state.generator.generate(topic).await;

    match result {
        Ok(post) => {
            info!(
                "Generated post for topic '{}' in {:?}",
                topic,
                start_time.elapsed()
            );
            Ok(Json(post))
        }
        Err(err) => {
            error!("Failed to generate post for topic '{}': {}", topic, err);
            Err(err)
        }
    }
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "AI Blog Post Generator is running" }))
}

async fn heartbeat_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}
