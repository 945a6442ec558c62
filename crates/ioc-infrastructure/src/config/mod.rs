//! Configuration management
//!
//! Layered loading of [`AppConfig`]: defaults, then `ioc.toml`, then
//! `IOC__SECTION__KEY` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, TranscriptConfig, WiringConfig};
