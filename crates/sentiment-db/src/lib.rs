//! # sentiment-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `sentiment-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the transactional annotation pass
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sentiment_db::{create_pool, DatabaseConfig, PgMessageRepository};
//! use sentiment_core::traits::MessageRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let repo = PgMessageRepository::new(pool);
//!     let messages = repo.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{PgAnnotationPass, PgMessageRepository, PgSentimentStatsRepository};
