//! Domain Port Interfaces
//!
//! - **capability** - traits hosts implement for contracts and concrete types
//! - **discovery** - the source of wiring metadata the engine consumes

/// Capability and component traits
pub mod capability;
/// Discovery port
pub mod discovery;

pub use capability::{Capability, Component};
pub use discovery::{Discovery, FactoryType, TaggedType};
