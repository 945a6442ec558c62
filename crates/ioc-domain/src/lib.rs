//! # IoC Domain
//!
//! Core types of the object-graph composition engine: capability keys,
//! component types with their capability views, recipes, descriptors and
//! the discovery port.
//!
//! ## Architecture
//!
//! - `value_objects` - capability keys, component types, objects, requirements
//! - `entities` - descriptors, recipes, templates, resolved instances
//! - `ports` - `Capability`/`Component` traits and the `Discovery` port
//! - `error` - the shared error type
//! - `constants` - naming conventions

/// Domain constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use entities::{
    Argument, Arguments, ComponentDescriptor, DescriptorId, Recipe, ResolvedInstance,
    Specialization, Template,
};
pub use error::{Error, Result};
pub use ports::{Capability, Component, Discovery, FactoryType, TaggedType};
pub use value_objects::{
    CapabilityKey, ComponentType, Object, Quantifier, Requirement, TypeArgs,
};
