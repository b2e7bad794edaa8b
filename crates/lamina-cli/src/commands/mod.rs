//! CLI command implementations

pub mod extract;
pub mod list;
pub mod resolve;
