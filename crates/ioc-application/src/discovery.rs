//! Explicit-list discovery
//!
//! The simplest discovery adapter: the host lists its components and
//! wirers by hand. Failed entries can be listed too, which is how a host
//! reports a type it could not describe without aborting the rest.

use std::mem;

use ioc_domain::error::{Error, Result};
use ioc_domain::ports::{Discovery, FactoryType, TaggedType};

/// Discovery over an explicit registration list
#[derive(Debug, Default)]
pub struct ManualDiscovery {
    tagged: Vec<Result<TaggedType>>,
    factories: Vec<Result<FactoryType>>,
}

impl ManualDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tagged type
    #[must_use]
    pub fn with(mut self, tagged: TaggedType) -> Self {
        self.tagged.push(Ok(tagged));
        self
    }

    /// Add a factory type
    #[must_use]
    pub fn with_wirer(mut self, factory: FactoryType) -> Self {
        self.factories.push(Ok(factory));
        self
    }

    /// Add a tagged type that failed to be described
    #[must_use]
    pub fn with_failure(mut self, error: Error) -> Self {
        self.tagged.push(Err(error));
        self
    }

    pub fn len(&self) -> usize {
        self.tagged.len() + self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tagged.is_empty() && self.factories.is_empty()
    }
}

impl Discovery for ManualDiscovery {
    fn tagged_types(&mut self) -> Vec<Result<TaggedType>> {
        mem::take(&mut self.tagged)
    }

    fn factory_types(&mut self) -> Vec<Result<FactoryType>> {
        mem::take(&mut self.factories)
    }
}
