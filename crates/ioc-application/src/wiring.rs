//! Wiring pass
//!
//! Pulls tagged types and factory types from a discovery adapter, once, and
//! registers them. Every per-item failure is handed to the wire-error
//! handler and the pass moves on to the next item.

use std::sync::Arc;

use ioc_domain::constants::{DEFAULT_EXCLUDED_PREFIXES, DEFAULT_TRANSCRIPT_FUNCTION};
use ioc_domain::error::{Error, Result};
use ioc_domain::ports::{Discovery, FactoryType, TaggedType};
use serde::Serialize;
use tracing::{info, trace};

use crate::registry::ComponentRegistry;

/// Receives errors raised while wiring individual types
pub type WireErrorHandler = Arc<dyn Fn(Error) + Send + Sync>;

/// Which discovered types are wired and how transcripts are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringOptions {
    /// Type-name prefixes to wire; empty wires everything
    pub include_prefixes: Vec<String>,
    /// Type-name prefixes never wired, checked after the include list
    pub exclude_prefixes: Vec<String>,
    /// Name of the function a rendered transcript defines
    pub transcript_function: String,
    /// Log every capability bucket after the wiring pass
    pub log_registrations: bool,
}

impl Default for WiringOptions {
    fn default() -> Self {
        Self {
            include_prefixes: Vec::new(),
            exclude_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            transcript_function: DEFAULT_TRANSCRIPT_FUNCTION.to_string(),
            log_registrations: false,
        }
    }
}

impl WiringOptions {
    /// Only wire types whose name starts with one of `prefixes`
    #[must_use]
    pub fn with_include_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Also skip types whose name starts with `prefix`
    #[must_use]
    pub fn with_excluded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.exclude_prefixes.push(prefix.into());
        self
    }

    #[must_use]
    pub fn with_transcript_function(mut self, name: impl Into<String>) -> Self {
        self.transcript_function = name.into();
        self
    }

    /// Whether a type with this name takes part in wiring
    pub fn accepts(&self, type_name: &str) -> bool {
        let included = self.include_prefixes.is_empty()
            || self
                .include_prefixes
                .iter()
                .any(|prefix| type_name.starts_with(prefix.as_str()));
        included
            && !self
                .exclude_prefixes
                .iter()
                .any(|prefix| type_name.starts_with(prefix.as_str()))
    }
}

/// Outcome of one wiring pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WiringReport {
    /// Descriptors registered (one per capability a type is wired under)
    pub registered: usize,
    /// Types skipped by the prefix filters
    pub filtered: usize,
    /// Errors forwarded to the handler
    pub errors: usize,
}

/// Register everything `discovery` offers
///
/// Tagged types are registered before factory types.
pub fn wire(
    registry: &mut ComponentRegistry,
    discovery: &mut dyn Discovery,
    options: &WiringOptions,
    on_error: &(dyn Fn(Error) + Send + Sync),
) -> WiringReport {
    let mut report = WiringReport::default();

    for tagged in discovery.tagged_types() {
        let outcome = tagged.and_then(|tagged| {
            if options.accepts(tagged.name()) {
                register_tagged(registry, tagged).map(Some)
            } else {
                trace!(component = tagged.name(), "Filtered out tagged type");
                Ok(None)
            }
        });
        report.record(outcome, on_error);
    }

    for factory in discovery.factory_types() {
        let outcome = factory.and_then(|factory| {
            if options.accepts(factory.owner().name()) {
                register_factory(registry, factory).map(Some)
            } else {
                trace!(owner = factory.owner().name(), "Filtered out factory type");
                Ok(None)
            }
        });
        report.record(outcome, on_error);
    }

    info!(
        registered = report.registered,
        filtered = report.filtered,
        errors = report.errors,
        "Wiring pass complete"
    );
    if options.log_registrations {
        for registration in registry.registrations() {
            info!(
                capability = %registration.capability,
                descriptors = ?registration.descriptors,
                "Registration"
            );
        }
    }
    report
}

impl WiringReport {
    fn record(&mut self, outcome: Result<Option<usize>>, on_error: &(dyn Fn(Error) + Send + Sync)) {
        match outcome {
            Ok(Some(count)) => self.registered += count,
            Ok(None) => self.filtered += 1,
            Err(error) => {
                self.errors += 1;
                on_error(error);
            }
        }
    }
}

fn register_tagged(registry: &mut ComponentRegistry, tagged: TaggedType) -> Result<usize> {
    match tagged {
        TaggedType::Concrete {
            component,
            capability: Some(capability),
            recipe,
        } => {
            if !component.provides(&capability) {
                return Err(Error::configuration(format!(
                    "{} is wired as {} but does not implement it",
                    component.name(),
                    capability
                )));
            }
            registry.register(component, capability, recipe);
            Ok(1)
        }
        TaggedType::Concrete {
            component,
            capability: None,
            recipe,
        } => {
            if component.views().is_empty() {
                return Err(Error::configuration(format!(
                    "{} is wired but implements no capability",
                    component.name()
                )));
            }
            let capabilities: Vec<_> = component
                .views()
                .iter()
                .map(|view| view.capability().clone())
                .collect();
            for capability in &capabilities {
                registry.register(component.clone(), capability.clone(), recipe.clone());
            }
            Ok(capabilities.len())
        }
        TaggedType::Generic {
            template,
            capability,
        } => {
            let capabilities = match capability {
                Some(capability) if template.provided().contains(&capability) => vec![capability],
                Some(capability) => {
                    return Err(Error::configuration(format!(
                        "{} is wired as {} but does not implement it",
                        template.name(),
                        capability
                    )));
                }
                None => template.provided().to_vec(),
            };
            if capabilities.is_empty() {
                return Err(Error::configuration(format!(
                    "{} is wired but implements no capability",
                    template.name()
                )));
            }
            let template = Arc::new(template);
            for capability in &capabilities {
                registry.register_template(Arc::clone(&template), capability.clone());
            }
            Ok(capabilities.len())
        }
    }
}

fn register_factory(registry: &mut ComponentRegistry, factory: FactoryType) -> Result<usize> {
    let (owner, capability, recipe) = factory.into_parts();
    let Some(recipe) = recipe else {
        return Err(Error::configuration(format!(
            "Type {} does not have a static wire function",
            owner.name()
        )));
    };
    registry.register(owner, capability, Some(recipe));
    Ok(1)
}
