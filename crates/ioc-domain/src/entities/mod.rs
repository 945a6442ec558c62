//! Domain Entities
//!
//! Descriptors own their recipe or template and, once initialized, the
//! instances they produced.

/// Registered descriptors
pub mod descriptor;
/// Materialized instances
pub mod instance;
/// Construction recipes and resolved arguments
pub mod recipe;
/// Unbound generic components
pub mod template;

pub use descriptor::{ComponentDescriptor, DescriptorId};
pub use instance::ResolvedInstance;
pub use recipe::{Argument, Arguments, ConstructFn, FactoryOutput, ProduceFn, Recipe};
pub use template::{Specialization, Template};
