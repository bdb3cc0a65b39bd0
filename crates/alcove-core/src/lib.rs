//! Core types shared by the Alcove client and web crates.

pub mod config;
pub mod error;
pub mod models;
pub mod stats;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use stats::percentage;
