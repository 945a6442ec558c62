//! # ioc
//!
//! Lazy object-graph composition. Components declare the capabilities they
//! implement and the capabilities they need; a context discovers them once
//! and builds graphs on demand, one instance per concrete type.
//!
//! ## Crates
//!
//! - [`domain`] - capability keys, component types, recipes, the error type
//! - [`application`] - registry, resolution engine, transcripts, `ExecutionContext`
//! - [`infrastructure`] - configuration, logging, link-time discovery, bootstrap files
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ioc::prelude::*;
//!
//! trait Message: Send + Sync {
//!     fn text(&self) -> String;
//! }
//! ioc::capability!(dyn Message);
//!
//! trait Printer: Send + Sync {
//!     fn print(&self) -> String;
//! }
//! ioc::capability!(dyn Printer);
//!
//! struct Hello;
//! impl Hello {
//!     fn new() -> Self {
//!         Hello
//!     }
//! }
//! impl Message for Hello {
//!     fn text(&self) -> String {
//!         "Hello World".into()
//!     }
//! }
//! ioc::component!(Hello: dyn Message);
//!
//! struct Console(Arc<dyn Message>);
//! impl Console {
//!     fn new(message: Arc<dyn Message>) -> Self {
//!         Console(message)
//!     }
//! }
//! impl Printer for Console {
//!     fn print(&self) -> String {
//!         self.0.text()
//!     }
//! }
//! ioc::component!(Console: dyn Printer);
//!
//! let context = ExecutionContext::new(
//!     ManualDiscovery::new()
//!         .with(TaggedType::component::<Hello, _>(Vec::new(), |_| Ok(Hello::new())))
//!         .with(TaggedType::component::<Console, _>(
//!             vec![Requirement::single::<dyn Message>()],
//!             |args| Ok(Console::new(args.single::<dyn Message>(0)?)),
//!         )),
//! );
//! let printer = context.resolve_one::<dyn Printer>()?;
//! assert_eq!(printer.print(), "Hello World");
//! # Ok::<(), ioc::Error>(())
//! ```

pub use ioc_application as application;
pub use ioc_domain as domain;
pub use ioc_infrastructure as infrastructure;

pub use ioc_domain::{capability, component};

pub use ioc_application::{ExecutionContext, ManualDiscovery, WiringOptions, WiringReport};
pub use ioc_domain::{
    Capability, CapabilityKey, Component, ComponentType, Discovery, Error, FactoryType, Object,
    Requirement, Result, Specialization, TaggedType, Template,
};
pub use ioc_infrastructure::{
    AppConfig, ConfigLoader, StaticDiscovery, WIRED_COMPONENTS, WIRERS, WiredComponentEntry,
    WirerEntry, build_context, update_bootstrap_file,
};

/// Everything a host needs to tag components and resolve graphs
pub mod prelude {
    pub use ioc_application::{ExecutionContext, ManualDiscovery};
    pub use ioc_domain::{
        Arguments, Capability, Component, FactoryType, Object, Requirement, Result,
        Specialization, TaggedType, Template,
    };
    pub use ioc_infrastructure::{StaticDiscovery, WiredComponentEntry, WirerEntry};
}
