//! Database models - SQLx-compatible structs for PostgreSQL tables

mod message;
mod stats;

pub use message::{MessageModel, UnlabeledMessageModel};
pub use stats::{DailyCountModel, HourlyCountModel, LabelCountModel};
