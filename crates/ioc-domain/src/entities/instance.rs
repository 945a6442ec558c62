//! Materialized instances

use std::sync::Arc;

use super::descriptor::DescriptorId;
use crate::error::{Error, Result};
use crate::ports::Capability;
use crate::value_objects::Object;

/// An object bound to the descriptor that produced it and its symbolic name
///
/// The symbol is assigned once, at first materialization, and is the name
/// the transcript uses for this instance.
#[derive(Debug, Clone)]
pub struct ResolvedInstance {
    descriptor: DescriptorId,
    object: Object,
    symbol: Arc<str>,
}

impl ResolvedInstance {
    pub fn new(descriptor: DescriptorId, object: Object, symbol: impl Into<Arc<str>>) -> Self {
        Self {
            descriptor,
            object,
            symbol: symbol.into(),
        }
    }

    /// Descriptor that materialized the object
    pub fn descriptor(&self) -> DescriptorId {
        self.descriptor
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether both wrap the same underlying instance
    pub fn same_instance(&self, other: &ResolvedInstance) -> bool {
        self.object.same_instance(&other.object)
    }

    /// View the object as capability `C`
    pub fn cast<C: Capability + ?Sized>(&self) -> Result<Arc<C>> {
        self.object.cast::<C>().ok_or_else(|| {
            Error::incompatible(
                self.object.component_type().name(),
                C::capability_key().name(),
            )
        })
    }
}
