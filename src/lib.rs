//! Stockcast - indicator synthesis and risk analytics for stock price predictions

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::*;
