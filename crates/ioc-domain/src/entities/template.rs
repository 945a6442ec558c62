//! Generic templates
//!
//! Rust has no runtime generic instantiation, so an unbound generic
//! component is described by the instantiations it can produce: a table
//! from type-argument tuple to a [`Specialization`]. The registry turns a
//! template into a specialized descriptor the first time a bound capability
//! is requested and caches it per argument tuple.

use std::fmt;
use std::sync::Arc;

use super::recipe::{Arguments, Recipe};
use crate::error::Result;
use crate::ports::{Capability, Component};
use crate::value_objects::type_names::erase_type_arguments;
use crate::value_objects::{CapabilityKey, ComponentType, Requirement, TypeArgs};

type SpecializeFn = Arc<dyn Fn() -> Specialization + Send + Sync>;

/// A concrete instantiation of a template
#[derive(Debug, Clone)]
pub struct Specialization {
    component: ComponentType,
    recipe: Option<Recipe>,
}

impl Specialization {
    pub fn new(component: ComponentType, recipe: Option<Recipe>) -> Self {
        Self { component, recipe }
    }

    /// Specialization built by a constructor of `T`
    pub fn constructor<T, F>(requirements: Vec<Requirement>, construct: F) -> Self
    where
        T: Component,
        F: Fn(&Arguments) -> Result<T> + Send + Sync + 'static,
    {
        Self::new(
            T::component_type(),
            Some(Recipe::constructor(requirements, construct)),
        )
    }

    pub fn component(&self) -> &ComponentType {
        &self.component
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn into_parts(self) -> (ComponentType, Option<Recipe>) {
        (self.component, self.recipe)
    }
}

/// An unbound generic component
#[derive(Clone)]
pub struct Template {
    component: ComponentType,
    provides: Vec<CapabilityKey>,
    bindings: Vec<(TypeArgs, SpecializeFn)>,
}

impl Template {
    /// Template named after a placeholder instantiation of the generic type
    ///
    /// `Template::new::<Value<()>>()` describes `Value<>`; the placeholder is
    /// never built.
    pub fn new<T: 'static>() -> Self {
        let component = ComponentType::describe::<T>().build();
        let erased = erase_type_arguments(component.name());
        Self {
            component: component.with_name(erased),
            provides: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Declare a generic capability the template implements
    ///
    /// `C` is a placeholder instantiation too (`dyn IValue<()>`); only its
    /// erased form is kept.
    #[must_use]
    pub fn provides<C: Capability + ?Sized>(mut self) -> Self {
        let key = C::capability_key().template_key();
        if !self.provides.contains(&key) {
            self.provides.push(key);
        }
        self
    }

    /// Add the instantiation for the argument tuple `A`
    ///
    /// A second binding for the same tuple replaces the first.
    #[must_use]
    pub fn bind<A, F>(mut self, specialize: F) -> Self
    where
        A: 'static,
        F: Fn() -> Specialization + Send + Sync + 'static,
    {
        let args = TypeArgs::of::<A>();
        self.bindings.retain(|(bound, _)| *bound != args);
        self.bindings.push((args, Arc::new(specialize)));
        self
    }

    /// Erased name of the generic type (`app::Value<>`)
    pub fn name(&self) -> &str {
        self.component.name()
    }

    /// Placeholder component type carrying the erased name
    pub fn component(&self) -> &ComponentType {
        &self.component
    }

    /// Erased capability keys the template is registered under
    pub fn provided(&self) -> &[CapabilityKey] {
        &self.provides
    }

    /// Argument tuples with a binding
    pub fn bound_args(&self) -> impl Iterator<Item = &TypeArgs> {
        self.bindings.iter().map(|(args, _)| args)
    }

    /// Instantiate the template for `args`, if bound
    pub fn specialization(&self, args: &TypeArgs) -> Option<Specialization> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == args)
            .map(|(_, specialize)| specialize())
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name())
            .field("provides", &self.provides)
            .field("bindings", &self.bound_args().collect::<Vec<_>>())
            .finish()
    }
}
