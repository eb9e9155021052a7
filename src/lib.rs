// Library root — exposes internals for integration tests and the binary.
// The entry point is src/main.rs.

pub mod config;
pub mod error;
pub mod handler;
pub mod llm;
pub mod logger;
pub mod prompt;
pub mod selection;
pub mod styles;
pub mod telegram;
