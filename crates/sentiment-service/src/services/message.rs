//! Message service
//!
//! Raw reads of the message table.

use sentiment_core::MessageId;
use tracing::instrument;

use crate::dto::MessageResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every message, ordered by id, labeled or not
    #[instrument(skip(self))]
    pub async fn list_messages(&self) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self.ctx.message_repo().find_all().await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    /// Get message by ID
    #[instrument(skip(self))]
    pub async fn get_message(&self, id: MessageId) -> ServiceResult<MessageResponse> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        Ok(MessageResponse::from(message))
    }
}
