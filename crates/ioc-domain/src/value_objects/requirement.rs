//! Dependency requirements of recipes

use std::fmt;

use serde::Serialize;

use super::capability::CapabilityKey;
use crate::ports::Capability;

/// How many instances a parameter asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// Exactly one instance, the first registered
    Single,
    /// Every registered instance, in registration order
    Collection,
}

/// One parameter of a constructor or factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    quantifier: Quantifier,
    capability: CapabilityKey,
}

impl Requirement {
    /// Requirement for a single `C`
    pub fn single<C: Capability + ?Sized>() -> Self {
        Self::new(Quantifier::Single, C::capability_key())
    }

    /// Requirement for every registered `C`
    pub fn collection<C: Capability + ?Sized>() -> Self {
        Self::new(Quantifier::Collection, C::capability_key())
    }

    /// Requirement from its parts
    pub fn new(quantifier: Quantifier, capability: CapabilityKey) -> Self {
        Self {
            quantifier,
            capability,
        }
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn capability(&self) -> &CapabilityKey {
        &self.capability
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantifier {
            Quantifier::Single => write!(f, "{}", self.capability),
            Quantifier::Collection => write!(f, "[{}]", self.capability),
        }
    }
}
