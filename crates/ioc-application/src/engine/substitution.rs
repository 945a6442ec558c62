//! Substitution Mode
//!
//! Every descriptor whose capability is not the root is offered to a
//! caller-supplied function first; a stand-in it returns becomes the
//! materialized instance verbatim and the descriptor's own dependencies are
//! never resolved.

use std::fmt;
use std::sync::Arc;

use ioc_domain::value_objects::{CapabilityKey, Object};

/// Stand-in factory: `None` falls through to normal construction
pub type SubstituteFn = Arc<dyn Fn(&CapabilityKey) -> Option<Object> + Send + Sync>;

/// Root capability plus the stand-in factory for everything else
#[derive(Clone)]
pub struct Substitution {
    root: CapabilityKey,
    substitute: SubstituteFn,
}

impl Substitution {
    pub fn new<F>(root: CapabilityKey, substitute: F) -> Self
    where
        F: Fn(&CapabilityKey) -> Option<Object> + Send + Sync + 'static,
    {
        Self {
            root,
            substitute: Arc::new(substitute),
        }
    }

    /// Capability that is always genuinely constructed
    pub fn root(&self) -> &CapabilityKey {
        &self.root
    }

    /// Stand-in for `capability`, never for the root
    pub fn stand_in(&self, capability: &CapabilityKey) -> Option<Object> {
        if *capability == self.root {
            return None;
        }
        (self.substitute)(capability)
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("root", &self.root.name())
            .finish_non_exhaustive()
    }
}
