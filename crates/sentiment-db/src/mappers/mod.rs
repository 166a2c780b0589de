//! Entity <-> Model mappers
//!
//! `From` conversions between SQLx row models and domain types.

mod message;
mod stats;
