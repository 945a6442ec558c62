//! Domain Value Objects
//!
//! Immutable values that identify capabilities, concrete types and the
//! requirements recipes declare.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CapabilityKey`] | Canonical identity of a contract, possibly generic |
//! | [`ComponentType`] | Concrete type identity and its capability views |
//! | [`Object`] | Shared type-erased instance |
//! | [`Requirement`] | One recipe parameter: capability and quantifier |

/// Capability identity and generic type arguments
pub mod capability;
/// Concrete component types and views
pub mod component;
/// Type-erased objects
pub mod object;
/// Recipe parameter requirements
pub mod requirement;
/// Helpers over `std::any::type_name` output
pub mod type_names;

pub use capability::{CapabilityKey, TypeArgs};
pub use component::{ComponentType, ComponentTypeBuilder, Erased, View};
pub use object::Object;
pub use requirement::{Quantifier, Requirement};
