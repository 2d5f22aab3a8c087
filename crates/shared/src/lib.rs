//! Shared configuration, errors, and replay tokens for Tally.
//!
//! This crate provides common pieces used across all other crates:
//! - Application configuration loaded once at startup
//! - Application-wide error types
//! - Signed replay tokens for round-tripping report summaries through a form

pub mod config;
pub mod error;
pub mod replay;

pub use config::{AppConfig, ReplayConfig, ServerConfig, SheetConfig};
pub use error::{AppError, AppResult};
pub use replay::{ReplayCodec, ReplayError};
