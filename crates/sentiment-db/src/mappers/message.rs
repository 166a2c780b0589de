//! Message entity <-> model mapper

use sentiment_core::entities::{Message, UnlabeledMessage};
use sentiment_core::value_objects::{MessageId, SentimentLabel};

use crate::models::{MessageModel, UnlabeledMessageModel};

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: MessageId::new(model.id),
            text: model.mensagem,
            sent_at: model.data_envio,
            sentiment: model.sentimento.map(SentimentLabel::new),
        }
    }
}

/// Convert UnlabeledMessageModel to UnlabeledMessage
impl From<UnlabeledMessageModel> for UnlabeledMessage {
    fn from(model: UnlabeledMessageModel) -> Self {
        UnlabeledMessage {
            id: MessageId::new(model.id),
            text: model.mensagem,
        }
    }
}
