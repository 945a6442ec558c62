//! Resolution Engine
//!
//! The recursive, memoizing materializer. Resolution is depth first, in
//! parameter order; every descriptor is materialized at most once and a
//! concrete type is constructed at most once per engine, whichever
//! capability it is first requested through.
//!
//! ## Materialization
//!
//! ```text
//! template? ──> specialize (cached per argument tuple)
//! initialized? ──> cached instances
//! same concrete type already built? ──> adopt those instances
//! stand-in offered? ──> use it verbatim
//! no recipe? ──> ConfigurationError
//! already on the stack? ──> CycleError
//! resolve requirements ──> invoke recipe ──> emit ──> back-register
//! ```

mod substitution;
mod symbols;
mod transcript;

pub use substitution::{SubstituteFn, Substitution};
pub use symbols::SymbolAllocator;
pub use transcript::Transcript;

use ioc_domain::entities::{
    Argument, Arguments, DescriptorId, FactoryOutput, Recipe, ResolvedInstance,
};
use ioc_domain::error::{Error, Result};
use ioc_domain::value_objects::{CapabilityKey, ComponentType, Quantifier};
use tracing::debug;

use crate::registry::ComponentRegistry;

/// Materializes descriptors of one registry
#[derive(Debug, Default)]
pub struct ResolutionEngine {
    registry: ComponentRegistry,
    symbols: SymbolAllocator,
    transcript: Option<Transcript>,
    substitution: Option<Substitution>,
    materializing: Vec<(DescriptorId, CapabilityKey)>,
}

impl ResolutionEngine {
    pub fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Engine that offers every non-root dependency to `substitution`
    pub fn with_substitution(registry: ComponentRegistry, substitution: Substitution) -> Self {
        Self {
            registry,
            substitution: Some(substitution),
            ..Self::default()
        }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    pub fn substitution(&self) -> Option<&Substitution> {
        self.substitution.as_ref()
    }

    /// Start recording constructions, discarding any previous transcript
    pub fn begin_transcript(&mut self) {
        self.transcript = Some(Transcript::new());
    }

    /// Stop recording and hand back what was recorded
    pub fn end_transcript(&mut self) -> Transcript {
        self.transcript.take().unwrap_or_default()
    }

    /// Resolve the first instance registered for `key`
    ///
    /// Looks the key up in the registry (exact key, then template key) and
    /// materializes the first descriptor found; fails with
    /// [`Error::NotFound`] listing both key forms when that yields nothing.
    pub fn resolve_one(&mut self, key: &CapabilityKey) -> Result<ResolvedInstance> {
        if let Some(&first) = self.registry.lookup(key).first() {
            if let Some(instance) = self.materialize(first, key)?.into_iter().next() {
                return Ok(instance);
            }
        }
        let attempted = key.lookup_names().into_iter().map(str::to_string).collect();
        Err(Error::not_found(key.name(), attempted))
    }

    /// Resolve every instance registered for `key`, in registration order
    ///
    /// Nothing registered is an empty result, not an error. For a generic
    /// key every bound template in the erased bucket is specialized first,
    /// so templates contribute to collections too. Instances attached by
    /// back-registration follow the bucket's own descriptors.
    pub fn resolve_all(&mut self, key: &CapabilityKey) -> Result<Vec<ResolvedInstance>> {
        if let Some(template) = key.template_name().filter(|name| *name != key.name()) {
            let templates = self.registry.bucket(template).to_vec();
            for id in templates {
                match self.registry.specialize(id, key) {
                    Ok(_) => {}
                    Err(error) if error.is_configuration() => {
                        debug!(capability = key.name(), %error, "Skipped template");
                    }
                    Err(error) => return Err(error),
                }
            }
        }

        let ids = self.registry.bucket(key.name()).to_vec();
        let mut instances: Vec<ResolvedInstance> = Vec::new();
        for id in ids {
            instances.extend(self.materialize(id, key)?);
        }
        for instance in self.registry.attached(key.name()) {
            if !instances.iter().any(|seen| seen.same_instance(instance)) {
                instances.push(instance.clone());
            }
        }
        Ok(instances)
    }

    /// Materialize one descriptor requested through `requested`
    pub fn materialize(
        &mut self,
        id: DescriptorId,
        requested: &CapabilityKey,
    ) -> Result<Vec<ResolvedInstance>> {
        let id = self.registry.specialize(id, requested)?;

        let descriptor = self.registry.descriptor(id)?;
        if descriptor.is_initialized() {
            return Ok(descriptor.instances().to_vec());
        }
        let capability = descriptor.capability().clone();
        let concrete = descriptor.concrete_type().clone();
        let recipe = descriptor.recipe().cloned();

        let adopted = self.existing_instances_of(&concrete);
        if !adopted.is_empty() {
            debug!(
                descriptor = %id,
                component = concrete.name(),
                capability = capability.name(),
                "Adopted existing instances"
            );
            return self.initialize(id, adopted);
        }

        if let Some(object) = self
            .substitution
            .as_ref()
            .and_then(|substitution| substitution.stand_in(&capability))
        {
            let symbol = self.symbols.allocate(&object.component_type().short_name());
            debug!(capability = capability.name(), %symbol, "Substituted stand-in");
            return self.initialize(id, vec![ResolvedInstance::new(id, object, symbol)]);
        }

        let Some(recipe) = recipe else {
            return Err(Error::configuration(format!(
                "Can't determine how to build {}. Check that it has a constructor taking only \
                 capabilities, collections of capabilities, or nothing",
                concrete.name()
            )));
        };

        if let Some(start) = self.materializing.iter().position(|(active, _)| *active == id) {
            let mut chain: Vec<String> = self.materializing[start..]
                .iter()
                .map(|(_, key)| key.name().to_string())
                .collect();
            chain.push(capability.name().to_string());
            return Err(Error::cycle(chain));
        }

        self.materializing.push((id, capability.clone()));
        let built = self.construct(id, &concrete, &recipe);
        self.materializing.pop();
        let instances = built?;

        debug!(
            descriptor = %id,
            component = concrete.name(),
            capability = capability.name(),
            count = instances.len(),
            "Materialized component"
        );
        self.back_register(&instances, &capability);
        self.initialize(id, instances)
    }

    /// Resolve requirements, invoke the recipe and name the results
    fn construct(
        &mut self,
        id: DescriptorId,
        concrete: &ComponentType,
        recipe: &Recipe,
    ) -> Result<Vec<ResolvedInstance>> {
        let mut values = Vec::with_capacity(recipe.requirements().len());
        for requirement in recipe.requirements() {
            let value = match requirement.quantifier() {
                Quantifier::Single => Argument::Single(self.resolve_one(requirement.capability())?),
                Quantifier::Collection => {
                    Argument::Collection(self.resolve_all(requirement.capability())?)
                }
            };
            values.push(value);
        }
        let arguments = Arguments::new(concrete.name(), values);
        let invocation = recipe.invocation(concrete);

        match recipe {
            Recipe::Constructor { construct, .. } => {
                let object = construct(&arguments)?;
                let symbol = self.symbols.allocate(&concrete.short_name());
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.record_constructor(
                        &symbol,
                        &invocation,
                        recipe.requirements(),
                        &arguments,
                    );
                }
                Ok(vec![ResolvedInstance::new(id, object, symbol)])
            }
            Recipe::Factory {
                output: FactoryOutput::One(produce),
                ..
            } => {
                let object = produce(&arguments)?;
                let symbol = self.symbols.allocate(&concrete.short_name());
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.record_factory(
                        &symbol,
                        &invocation,
                        recipe.requirements(),
                        &arguments,
                    );
                }
                Ok(vec![ResolvedInstance::new(id, object, symbol)])
            }
            Recipe::Factory {
                output: FactoryOutput::Many(produce),
                ..
            } => {
                let objects = produce(&arguments)?;
                let parent = self.symbols.allocate(&concrete.short_name());
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.record_factory(
                        &parent,
                        &invocation,
                        recipe.requirements(),
                        &arguments,
                    );
                }
                Ok(objects
                    .into_iter()
                    .enumerate()
                    .map(|(index, object)| {
                        ResolvedInstance::new(id, object, format!("{parent}[{index}]"))
                    })
                    .collect())
            }
        }
    }

    /// Instances already built for the concrete type, without duplicates
    fn existing_instances_of(&self, concrete: &ComponentType) -> Vec<ResolvedInstance> {
        let mut found: Vec<ResolvedInstance> = Vec::new();
        for descriptor in self.registry.descriptors().filter(|d| d.is_initialized()) {
            for instance in descriptor.instances() {
                if instance.object().component_type().id() == concrete.id()
                    && !found.iter().any(|seen| seen.same_instance(instance))
                {
                    found.push(instance.clone());
                }
            }
        }
        found
    }

    /// Attach fresh instances to the other capability buckets they satisfy
    ///
    /// Only buckets that already exist are touched, and no descriptor is
    /// created. The attached instance is the same `ResolvedInstance`,
    /// symbol included.
    fn back_register(&mut self, instances: &[ResolvedInstance], capability: &CapabilityKey) {
        for instance in instances {
            let component = instance.object().component_type().clone();
            for view in component.views() {
                let other = view.capability();
                if other != capability && self.registry.attach(other, instance) {
                    debug!(
                        capability = other.name(),
                        symbol = instance.symbol(),
                        "Back-registered instance"
                    );
                }
            }
        }
    }

    fn initialize(
        &mut self,
        id: DescriptorId,
        instances: Vec<ResolvedInstance>,
    ) -> Result<Vec<ResolvedInstance>> {
        let descriptor = self.registry.descriptor_mut(id)?;
        descriptor.initialize(instances);
        Ok(descriptor.instances().to_vec())
    }
}
