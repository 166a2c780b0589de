//! Value objects - immutable types that represent domain concepts

mod message_id;
mod sentiment;
mod window;

pub use message_id::{MessageId, MessageIdParseError};
pub use sentiment::{SentimentCategory, SentimentLabel};
pub use window::SummaryWindow;
