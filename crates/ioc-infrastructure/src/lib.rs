//! Infrastructure Layer - IoC object-graph engine
//!
//! Everything the engine needs from its surroundings.
//!
//! ## Architecture
//!
//! - `config` - Figment-based configuration (`ioc.toml`, `IOC__*` variables)
//! - `logging` - tracing subscriber setup
//! - `discovery` - link-time component registries
//! - `bootstrap` - generated-region update of bootstrap files
//! - `diagnostics` - registration table export
//! - `error_ext` - error context helpers

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod discovery;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_context, splice_generated, update_bootstrap_file};
pub use config::{AppConfig, ConfigLoader};
pub use discovery::{StaticDiscovery, WIRED_COMPONENTS, WIRERS, WiredComponentEntry, WirerEntry};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
