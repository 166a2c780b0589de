//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the mensagens table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub mensagem: String,
    pub data_envio: DateTime<Utc>,
    pub sentimento: Option<String>,
}

/// Projection read by the annotation worker
#[derive(Debug, Clone, FromRow)]
pub struct UnlabeledMessageModel {
    pub id: i64,
    pub mensagem: String,
}
