//! Error types for selection parsing

use thiserror::Error;

/// Errors produced while parsing selection text
#[derive(Debug, Error)]
pub enum ParseError {
    /// A strength position held something that is not a number
    #[error("invalid strength '{value}' in overlay description '{description}'")]
    InvalidStrength { description: String, value: String },
}
