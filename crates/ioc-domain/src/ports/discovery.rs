//! Discovery port
//!
//! Discovery decides which component types exist and what wiring metadata
//! they carry. The engine only pulls from it, once, on first use.

use crate::entities::{Arguments, Recipe, Template};
use crate::error::Result;
use crate::ports::{Capability, Component};
use crate::value_objects::{CapabilityKey, ComponentType, Object, Requirement};

/// A type tagged for wiring
#[derive(Debug, Clone)]
pub enum TaggedType {
    /// A concrete type; without a recipe it cannot be materialized
    Concrete {
        component: ComponentType,
        capability: Option<CapabilityKey>,
        recipe: Option<Recipe>,
    },
    /// An unbound generic type
    Generic {
        template: Template,
        capability: Option<CapabilityKey>,
    },
}

impl TaggedType {
    /// Tag `T` with its constructor, registered under every view it offers
    pub fn component<T, F>(requirements: Vec<Requirement>, construct: F) -> Self
    where
        T: Component,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self::Concrete {
            component: T::component_type(),
            capability: None,
            recipe: Some(Recipe::constructor(requirements, construct)),
        }
    }

    /// Like [`component`](Self::component), for a constructor not called `new`
    pub fn component_named<T, F>(
        function: &str,
        requirements: Vec<Requirement>,
        construct: F,
    ) -> Self
    where
        T: Component,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self::Concrete {
            component: T::component_type(),
            capability: None,
            recipe: Some(Recipe::constructor_named(function, requirements, construct)),
        }
    }

    /// Tag a concrete type with an explicit recipe (or none)
    pub fn concrete(component: ComponentType, recipe: Option<Recipe>) -> Self {
        Self::Concrete {
            component,
            capability: None,
            recipe,
        }
    }

    /// Tag a generic template
    pub fn generic(template: Template) -> Self {
        Self::Generic {
            template,
            capability: None,
        }
    }

    /// Register only under capability `C` instead of every view
    #[must_use]
    pub fn with_capability<C: Capability + ?Sized>(self) -> Self {
        let key = C::capability_key();
        match self {
            Self::Concrete {
                component, recipe, ..
            } => Self::Concrete {
                component,
                capability: Some(key),
                recipe,
            },
            Self::Generic { template, .. } => Self::Generic {
                template,
                capability: Some(key.template_key()),
            },
        }
    }

    /// Name of the tagged type
    pub fn name(&self) -> &str {
        match self {
            Self::Concrete { component, .. } => component.name(),
            Self::Generic { template, .. } => template.name(),
        }
    }
}

/// A type exposing a factory function for a capability
#[derive(Debug, Clone)]
pub struct FactoryType {
    owner: ComponentType,
    capability: CapabilityKey,
    factory: Option<Recipe>,
}

impl FactoryType {
    /// Factory owned by `Owner` returning a single `C`
    pub fn one<Owner, C, F>(function: &str, requirements: Vec<Requirement>, produce: F) -> Self
    where
        Owner: 'static,
        C: Capability + ?Sized,
        F: Fn(&Arguments) -> Result<Object> + Send + Sync + 'static,
    {
        Self::new(
            ComponentType::describe::<Owner>().build(),
            C::capability_key(),
            Some(Recipe::factory(function, requirements, produce)),
        )
    }

    /// Factory owned by `Owner` returning an array of `C`
    pub fn many<Owner, C, F>(function: &str, requirements: Vec<Requirement>, produce: F) -> Self
    where
        Owner: 'static,
        C: Capability + ?Sized,
        F: Fn(&Arguments) -> Result<Vec<Object>> + Send + Sync + 'static,
    {
        Self::new(
            ComponentType::describe::<Owner>().build(),
            C::capability_key(),
            Some(Recipe::factory_many(function, requirements, produce)),
        )
    }

    pub fn new(owner: ComponentType, capability: CapabilityKey, factory: Option<Recipe>) -> Self {
        Self {
            owner,
            capability,
            factory,
        }
    }

    pub fn owner(&self) -> &ComponentType {
        &self.owner
    }

    /// Capability produced by the factory
    pub fn capability(&self) -> &CapabilityKey {
        &self.capability
    }

    pub fn factory(&self) -> Option<&Recipe> {
        self.factory.as_ref()
    }

    pub fn into_parts(self) -> (ComponentType, CapabilityKey, Option<Recipe>) {
        (self.owner, self.capability, self.factory)
    }
}

/// Source of wiring metadata, consumed once
///
/// Each item is reported separately so one failing type or module does not
/// stop the rest from being wired.
pub trait Discovery: Send {
    /// Tagged types, in discovery order
    fn tagged_types(&mut self) -> Vec<Result<TaggedType>>;

    /// Factory types, in discovery order
    fn factory_types(&mut self) -> Vec<Result<FactoryType>>;
}
