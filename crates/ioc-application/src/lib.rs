//! Application Layer - IoC object-graph engine
//!
//! Builds object graphs lazily from the descriptors a discovery adapter
//! supplies.
//!
//! ## Architecture
//!
//! - `registry` - capability buckets, template specialization, lookup
//! - `engine` - materialization, transcript emission, substitution mode
//! - `wiring` - the one-time discovery pass and its filters
//! - `discovery` - explicit-list discovery adapter
//! - `context` - `ExecutionContext`, the host-facing entry point
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ioc_application::{ExecutionContext, ManualDiscovery};
//! use ioc_domain::ports::TaggedType;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//! ioc_domain::capability!(dyn Greeter);
//!
//! struct English;
//! impl English {
//!     fn new() -> Self {
//!         English
//!     }
//! }
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".into()
//!     }
//! }
//! ioc_domain::component!(English: dyn Greeter);
//!
//! let context = ExecutionContext::new(
//!     ManualDiscovery::new().with(TaggedType::component::<English, _>(Vec::new(), |_| Ok(English::new()))),
//! );
//! let greeter: Arc<dyn Greeter> = context.resolve_one::<dyn Greeter>().unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```

pub mod context;
pub mod discovery;
pub mod engine;
pub mod registry;
pub mod wiring;

pub use context::ExecutionContext;
pub use discovery::ManualDiscovery;
pub use engine::{ResolutionEngine, Substitution, Transcript};
pub use registry::{ComponentRegistry, Registration};
pub use wiring::{WireErrorHandler, WiringOptions, WiringReport, wire};
