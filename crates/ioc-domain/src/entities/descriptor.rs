//! Component descriptors

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::instance::ResolvedInstance;
use super::recipe::Recipe;
use super::template::Template;
use crate::value_objects::{CapabilityKey, ComponentType};

/// Stable handle of a descriptor inside one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DescriptorId(usize);

impl DescriptorId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One registered way to satisfy a capability
///
/// Holds either a recipe (possibly missing, which surfaces as a
/// configuration error when materialized) or a generic template. Instances
/// are set exactly once, together with the `initialized` flag.
#[derive(Debug)]
pub struct ComponentDescriptor {
    id: DescriptorId,
    name: String,
    concrete: ComponentType,
    capability: CapabilityKey,
    recipe: Option<Recipe>,
    template: Option<Arc<Template>>,
    initialized: bool,
    instances: Vec<ResolvedInstance>,
}

impl ComponentDescriptor {
    /// Descriptor of a concrete type
    pub fn concrete(
        id: DescriptorId,
        concrete: ComponentType,
        capability: CapabilityKey,
        recipe: Option<Recipe>,
    ) -> Self {
        Self {
            id,
            name: concrete.name().to_string(),
            concrete,
            capability,
            recipe,
            template: None,
            initialized: false,
            instances: Vec::new(),
        }
    }

    /// Descriptor of an unbound generic template
    pub fn template(id: DescriptorId, template: Arc<Template>, capability: CapabilityKey) -> Self {
        let concrete = template.component().clone();
        Self {
            id,
            name: concrete.name().to_string(),
            concrete,
            capability,
            recipe: None,
            template: Some(template),
            initialized: false,
            instances: Vec::new(),
        }
    }

    pub fn id(&self) -> DescriptorId {
        self.id
    }

    /// Stable identifier derived from the concrete type name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn concrete_type(&self) -> &ComponentType {
        &self.concrete
    }

    /// Capability this descriptor is registered under
    pub fn capability(&self) -> &CapabilityKey {
        &self.capability
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn template_ref(&self) -> Option<&Arc<Template>> {
        self.template.as_ref()
    }

    pub fn is_generic_template(&self) -> bool {
        self.template.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn instances(&self) -> &[ResolvedInstance] {
        &self.instances
    }

    /// Set the instances and mark the descriptor initialized
    ///
    /// Returns `false`, leaving the descriptor untouched, when it was
    /// already initialized.
    pub fn initialize(&mut self, instances: Vec<ResolvedInstance>) -> bool {
        if self.initialized {
            return false;
        }
        self.instances = instances;
        self.initialized = true;
        true
    }
}
