// Library root — exposes internals for integration tests and crate consumers.
// The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod config;
pub mod error;

pub use config::{Configuration, SettingsSnapshot, SystemEnv};
pub use error::AppError;
