//! Business logic services
//!
//! Read-side services used by the HTTP layer. The write side lives in
//! [`crate::worker`].

pub mod context;
pub mod error;
pub mod message;
pub mod summary;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use summary::SummaryService;
