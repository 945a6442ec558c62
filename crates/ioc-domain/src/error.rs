//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the object-graph engine
#[derive(Error, Debug)]
pub enum Error {
    /// No descriptor produced an instance for the capability
    #[error("Could not resolve concrete type for capability: {}", attempted.join(", "))]
    NotFound {
        /// Canonical name of the requested capability
        capability: String,
        /// Every key form that was looked up (exact, then template)
        attempted: Vec<String>,
    },

    /// A component cannot be built the way it was registered
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A discovered type or module could not be inspected
    #[error("Discovery error: {message}")]
    Discovery {
        /// Description of the discovery failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Materialization re-entered a descriptor that is still being built
    #[error("Dependency cycle detected: {}", chain.join(" -> "))]
    Cycle {
        /// Capabilities on the materialization stack, closing with the re-entered one
        chain: Vec<String>,
    },

    /// A materialized object does not offer the requested capability view
    #[error("Component {component} cannot be viewed as {capability}")]
    Incompatible {
        /// Concrete type name of the object
        component: String,
        /// Capability that was requested
        capability: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal error, e.g. a poisoned lock
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] BoxError),
}

// Resolution error creation methods
impl Error {
    /// Create a not found error listing every attempted key form
    pub fn not_found<S: Into<String>>(capability: S, attempted: Vec<String>) -> Self {
        Self::NotFound {
            capability: capability.into(),
            attempted,
        }
    }

    /// Create a cycle error from the capability chain
    pub fn cycle(chain: Vec<String>) -> Self {
        Self::Cycle { chain }
    }

    /// Create an incompatible view error
    pub fn incompatible<C: Into<String>, K: Into<String>>(component: C, capability: K) -> Self {
        Self::Incompatible {
            component: component.into(),
            capability: capability.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Discovery and I/O error creation methods
impl Error {
    /// Create a discovery error
    pub fn discovery<S: Into<String>>(message: S) -> Self {
        Self::Discovery {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this error reports a missing capability
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error reports a misconfigured component
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error reports a dependency cycle
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}
