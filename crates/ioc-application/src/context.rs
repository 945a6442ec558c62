//! Execution context
//!
//! The host-facing entry point. A context owns one registry, one engine and
//! the not-yet-consumed discovery adapter. Discovery runs lazily on the
//! first call, inside the same lock every resolution takes, so concurrent
//! first use wires exactly once.
//!
//! Recipes run while the lock is held; a recipe must not call back into the
//! context that is building it.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use ioc_domain::entities::ResolvedInstance;
use ioc_domain::error::{Error, Result};
use ioc_domain::ports::{Capability, Discovery};
use ioc_domain::value_objects::{CapabilityKey, Object};
use tracing::warn;

use crate::engine::{ResolutionEngine, Substitution};
use crate::registry::{ComponentRegistry, Registration};
use crate::wiring::{self, WireErrorHandler, WiringOptions};

struct State {
    engine: ResolutionEngine,
    discovery: Option<Box<dyn Discovery>>,
}

/// Lazily wired object-graph context
pub struct ExecutionContext {
    state: Mutex<State>,
    options: WiringOptions,
    on_wire_error: WireErrorHandler,
}

impl ExecutionContext {
    /// Context that will wire whatever `discovery` offers on first use
    pub fn new<D: Discovery + 'static>(discovery: D) -> Self {
        Self::with_engine(ResolutionEngine::new(ComponentRegistry::new()), discovery)
    }

    /// Context for exercising `R` against stand-ins
    ///
    /// Every descriptor whose capability is not `R` is offered to
    /// `substitute` first; `R` itself is always genuinely built.
    pub fn for_test<R, D, F>(discovery: D, substitute: F) -> Self
    where
        R: Capability + ?Sized,
        D: Discovery + 'static,
        F: Fn(&CapabilityKey) -> Option<Object> + Send + Sync + 'static,
    {
        let substitution = Substitution::new(R::capability_key(), substitute);
        Self::with_engine(
            ResolutionEngine::with_substitution(ComponentRegistry::new(), substitution),
            discovery,
        )
    }

    fn with_engine<D: Discovery + 'static>(engine: ResolutionEngine, discovery: D) -> Self {
        Self {
            state: Mutex::new(State {
                engine,
                discovery: Some(Box::new(discovery)),
            }),
            options: WiringOptions::default(),
            on_wire_error: Arc::new(|error: Error| warn!(%error, "Failed to wire type")),
        }
    }

    /// Replace the wiring options; takes effect at the first call
    #[must_use]
    pub fn with_options(mut self, options: WiringOptions) -> Self {
        self.options = options;
        self
    }

    /// Receive errors raised while wiring individual types
    ///
    /// The default handler logs them at `warn` level.
    #[must_use]
    pub fn with_wire_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Error) + Send + Sync + 'static,
    {
        self.on_wire_error = Arc::new(handler);
        self
    }

    pub fn options(&self) -> &WiringOptions {
        &self.options
    }

    /// The first registered implementation of `C`
    pub fn resolve_one<C: Capability + ?Sized>(&self) -> Result<Arc<C>> {
        self.resolve_instance::<C>()?.cast::<C>()
    }

    /// Every registered implementation of `C`, in registration order
    pub fn resolve_all<C: Capability + ?Sized>(&self) -> Result<Vec<Arc<C>>> {
        let instances = self.ready()?.engine.resolve_all(&C::capability_key())?;
        instances.iter().map(ResolvedInstance::cast::<C>).collect()
    }

    /// The resolved instance behind [`resolve_one`](Self::resolve_one)
    ///
    /// Carries the producing descriptor and the symbolic name as well.
    pub fn resolve_instance<C: Capability + ?Sized>(&self) -> Result<ResolvedInstance> {
        self.ready()?.engine.resolve_one(&C::capability_key())
    }

    /// Capability buckets and their descriptor names
    pub fn list_registrations(&self) -> Result<Vec<Registration>> {
        Ok(self.ready()?.engine.registry().registrations())
    }

    /// Resolve `C` while recording a construction transcript
    ///
    /// Only constructions performed by this call are recorded, so call it on
    /// a fresh context to capture the whole graph.
    pub fn emit_transcript_for<C: Capability + ?Sized>(&self) -> Result<String> {
        let key = C::capability_key();
        let mut state = self.ready()?;
        state.engine.begin_transcript();
        let root = state.engine.resolve_one(&key);
        let transcript = state.engine.end_transcript();
        let root = root?;
        Ok(transcript.render(&self.options.transcript_function, &key, root.symbol()))
    }

    /// Lock the state, running discovery the first time
    fn ready(&self) -> Result<MutexGuard<'_, State>> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| Error::internal("Execution context lock poisoned"))?;
        if let Some(mut discovery) = state.discovery.take() {
            wiring::wire(
                state.engine.registry_mut(),
                discovery.as_mut(),
                &self.options,
                self.on_wire_error.as_ref(),
            );
        }
        Ok(state)
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
