//! Message handlers
//!
//! Raw rows of the message table, labeled or not.

use axum::{
    extract::{Path, State},
    Json,
};
use sentiment_core::value_objects::MessageId;
use sentiment_service::{dto::MessageResponse, MessageService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List every message
///
/// GET /mensagens
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.list_messages().await?;
    Ok(Json(messages))
}

/// Get a single message
///
/// GET /mensagens/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = MessageId::parse(&message_id)
        .map_err(|_| ApiError::invalid_path("Invalid message_id format"))?;

    let service = MessageService::new(state.service_context());
    let message = service.get_message(message_id).await?;
    Ok(Json(message))
}
