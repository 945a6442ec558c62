//! Static discovery
//!
//! Compile-time tagging with `linkme`. A component tags itself by adding an
//! entry to [`WIRED_COMPONENTS`]; a factory type does the same in
//! [`WIRERS`]. Nothing is registered until a context built on
//! [`StaticDiscovery`] is first used.
//!
//! ## Architecture
//!
//! ```text
//! 1. Component defines:  #[linkme::distributed_slice(WIRED_COMPONENTS)]
//!                        static ENTRY: WiredComponentEntry = ...
//!                              ↓
//! 2. Slice declares:     #[linkme::distributed_slice]
//!                        pub static WIRED_COMPONENTS: [Entry] = [..]
//!                              ↓
//! 3. Discovery reads:    WIRED_COMPONENTS.iter(), in name order
//!                              ↓
//! 4. Wiring registers:   one descriptor per capability view
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use ioc_infrastructure::discovery::{WiredComponentEntry, WIRED_COMPONENTS};
//!
//! #[linkme::distributed_slice(WIRED_COMPONENTS)]
//! static STARTUP_MESSAGE: WiredComponentEntry = WiredComponentEntry {
//!     name: "app::StartupMessage",
//!     tag: || Ok(TaggedType::component::<StartupMessage, _>(Vec::new(), |_| Ok(StartupMessage::new()))),
//! };
//! ```

use ioc_domain::error::Result;
use ioc_domain::ports::{Discovery, FactoryType, TaggedType};
use tracing::debug;

/// Registry entry for a tagged component type
pub struct WiredComponentEntry {
    /// Type name of the component, used for ordering and diagnostics
    pub name: &'static str,
    /// Describes the component; an error is forwarded to the wire-error handler
    pub tag: fn() -> Result<TaggedType>,
}

/// Registry entry for a factory type
pub struct WirerEntry {
    /// Type name of the factory owner
    pub name: &'static str,
    /// Describes the factory
    pub wirer: fn() -> Result<FactoryType>,
}

#[linkme::distributed_slice]
pub static WIRED_COMPONENTS: [WiredComponentEntry] = [..];

#[linkme::distributed_slice]
pub static WIRERS: [WirerEntry] = [..];

/// Discovery over the link-time registries
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDiscovery;

impl StaticDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl Discovery for StaticDiscovery {
    fn tagged_types(&mut self) -> Vec<Result<TaggedType>> {
        let mut entries: Vec<&WiredComponentEntry> = WIRED_COMPONENTS.iter().collect();
        entries.sort_by_key(|entry| entry.name);
        debug!(count = entries.len(), "Collected wired components");
        entries.into_iter().map(|entry| (entry.tag)()).collect()
    }

    fn factory_types(&mut self) -> Vec<Result<FactoryType>> {
        let mut entries: Vec<&WirerEntry> = WIRERS.iter().collect();
        entries.sort_by_key(|entry| entry.name);
        debug!(count = entries.len(), "Collected wirers");
        entries.into_iter().map(|entry| (entry.wirer)()).collect()
    }
}

/// Names of every tagged component in the binary, sorted
pub fn list_wired_components() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = WIRED_COMPONENTS.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names
}

/// Names of every factory owner in the binary, sorted
pub fn list_wirers() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = WIRERS.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names
}
