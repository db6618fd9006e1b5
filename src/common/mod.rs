//! Общие типы для sqllex

pub mod config;
pub mod error;

pub use config::LexerConfig;
pub use error::{Error, LexError, Result};
