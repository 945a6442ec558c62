//! Component Registry
//!
//! Maps canonical capability names to ordered lists of descriptors. The
//! descriptors themselves live in an arena indexed by [`DescriptorId`];
//! buckets only hold ids, so a concrete type registered under several
//! capabilities has one descriptor per capability, all in the same arena.
//!
//! Insertion order is discovery order and is significant: single
//! resolution picks the first descriptor of a bucket, collection
//! resolution walks the bucket front to back.
//!
//! Descriptors are only created by the discovery pass and by template
//! specialization. An instance built for one capability that also
//! satisfies another existing bucket is attached to that bucket instead,
//! and collections of that capability list it after the bucket's own
//! descriptors.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use ioc_domain::entities::{ComponentDescriptor, DescriptorId, Recipe, ResolvedInstance, Template};
use ioc_domain::error::{Error, Result};
use ioc_domain::value_objects::{CapabilityKey, ComponentType};
use serde::Serialize;
use tracing::debug;

/// One capability bucket, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Canonical capability name
    pub capability: String,
    /// Descriptor names, in registration order
    pub descriptors: Vec<String>,
}

/// Registry of component descriptors keyed by capability
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    descriptors: Vec<ComponentDescriptor>,
    buckets: IndexMap<String, Vec<DescriptorId>>,
    specializations: HashMap<(DescriptorId, TypeId), DescriptorId>,
    attached: HashMap<String, Vec<ResolvedInstance>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `concrete` under `capability`
    ///
    /// Idempotent: the same concrete type registered twice under the same
    /// capability (through the same factory function, if any) returns the
    /// existing descriptor.
    pub fn register(
        &mut self,
        concrete: ComponentType,
        capability: CapabilityKey,
        recipe: Option<Recipe>,
    ) -> DescriptorId {
        let function = factory_function(recipe.as_ref()).map(str::to_owned);
        if let Some(existing) = self.find(capability.name(), |descriptor| {
            !descriptor.is_generic_template()
                && descriptor.concrete_type().id() == concrete.id()
                && factory_function(descriptor.recipe()) == function.as_deref()
        }) {
            return existing;
        }

        let id = DescriptorId::new(self.descriptors.len());
        debug!(
            descriptor = %id,
            component = concrete.name(),
            capability = capability.name(),
            recipe = recipe.as_ref().map_or("none", Recipe::kind),
            "Registered component"
        );
        self.push(ComponentDescriptor::concrete(id, concrete, capability, recipe))
    }

    /// Register a generic template under an erased capability key
    ///
    /// Idempotent on the template name and capability.
    pub fn register_template(
        &mut self,
        template: Arc<Template>,
        capability: CapabilityKey,
    ) -> DescriptorId {
        if let Some(existing) = self.find(capability.name(), |descriptor| {
            descriptor.is_generic_template() && descriptor.name() == template.name()
        }) {
            return existing;
        }

        let id = DescriptorId::new(self.descriptors.len());
        debug!(
            descriptor = %id,
            template = template.name(),
            capability = capability.name(),
            "Registered template"
        );
        self.push(ComponentDescriptor::template(id, template, capability))
    }

    /// Specialize a template descriptor for the bound capability `key`
    ///
    /// The specialized descriptor is registered under the exact key and
    /// cached per argument tuple, so repeated requests return the same id.
    /// Non-template descriptors are returned unchanged.
    pub fn specialize(
        &mut self,
        template_id: DescriptorId,
        key: &CapabilityKey,
    ) -> Result<DescriptorId> {
        let descriptor = self.descriptor(template_id)?;
        let Some(template) = descriptor.template_ref().cloned() else {
            return Ok(template_id);
        };

        let args = key.args().ok_or_else(|| {
            Error::configuration(format!(
                "{} is generic but {} carries no type arguments",
                template.name(),
                key
            ))
        })?;

        if let Some(&cached) = self.specializations.get(&(template_id, args.id())) {
            return Ok(cached);
        }

        let specialization = template.specialization(args).ok_or_else(|| {
            Error::configuration(format!(
                "{} has no instantiation for type arguments {}",
                template.name(),
                args
            ))
        })?;
        let (component, recipe) = specialization.into_parts();
        if !component.provides(key) {
            return Err(Error::configuration(format!(
                "{} was bound for {} but does not implement it",
                component.name(),
                key
            )));
        }

        let specialized = self.register(component, key.clone(), recipe);
        self.specializations
            .insert((template_id, args.id()), specialized);
        debug!(
            template = template.name(),
            arguments = args.name(),
            descriptor = %specialized,
            "Specialized template"
        );
        Ok(specialized)
    }

    /// Descriptors for `key`: the exact bucket, else the template bucket
    ///
    /// Empty when nothing is registered.
    pub fn lookup(&self, key: &CapabilityKey) -> Vec<DescriptorId> {
        key.lookup_names()
            .into_iter()
            .map(|name| self.bucket(name))
            .find(|bucket| !bucket.is_empty())
            .map(<[DescriptorId]>::to_vec)
            .unwrap_or_default()
    }

    /// The bucket stored under a canonical name
    pub fn bucket(&self, name: &str) -> &[DescriptorId] {
        self.buckets.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether any descriptor is registered under `key` exactly
    pub fn has_bucket(&self, key: &CapabilityKey) -> bool {
        self.buckets.contains_key(key.name())
    }

    pub fn descriptor(&self, id: DescriptorId) -> Result<&ComponentDescriptor> {
        self.descriptors
            .get(id.index())
            .ok_or_else(|| Error::internal(format!("Unknown descriptor {id}")))
    }

    pub fn descriptor_mut(&mut self, id: DescriptorId) -> Result<&mut ComponentDescriptor> {
        self.descriptors
            .get_mut(id.index())
            .ok_or_else(|| Error::internal(format!("Unknown descriptor {id}")))
    }

    /// Attach an already built instance to the existing bucket of `capability`
    ///
    /// Returns `false` when there is no such bucket or the instance is
    /// already attached there.
    pub fn attach(&mut self, capability: &CapabilityKey, instance: &ResolvedInstance) -> bool {
        if !self.has_bucket(capability) {
            return false;
        }
        let attached = self.attached.entry(capability.name().to_string()).or_default();
        if attached.iter().any(|seen| seen.same_instance(instance)) {
            return false;
        }
        attached.push(instance.clone());
        true
    }

    /// Instances attached to the bucket stored under a canonical name
    pub fn attached(&self, name: &str) -> &[ResolvedInstance] {
        self.attached.get(name).map_or(&[], Vec::as_slice)
    }

    /// Every descriptor, in creation order
    pub fn descriptors(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Capability buckets with their descriptor names, in creation order
    pub fn registrations(&self) -> Vec<Registration> {
        self.buckets
            .iter()
            .map(|(capability, ids)| Registration {
                capability: capability.clone(),
                descriptors: ids
                    .iter()
                    .filter_map(|id| self.descriptors.get(id.index()))
                    .map(|descriptor| descriptor.name().to_string())
                    .collect(),
            })
            .collect()
    }

    fn find(
        &self,
        bucket: &str,
        matches: impl Fn(&ComponentDescriptor) -> bool,
    ) -> Option<DescriptorId> {
        self.bucket(bucket)
            .iter()
            .copied()
            .find(|id| self.descriptors.get(id.index()).is_some_and(&matches))
    }

    fn push(&mut self, descriptor: ComponentDescriptor) -> DescriptorId {
        let id = descriptor.id();
        self.buckets
            .entry(descriptor.capability().name().to_string())
            .or_default()
            .push(id);
        self.descriptors.push(descriptor);
        id
    }
}

fn factory_function(recipe: Option<&Recipe>) -> Option<&str> {
    match recipe {
        Some(Recipe::Factory { function, .. }) => Some(function),
        _ => None,
    }
}
