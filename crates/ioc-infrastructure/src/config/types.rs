//! Configuration types

use ioc_application::WiringOptions;
use ioc_domain::constants::{DEFAULT_EXCLUDED_PREFIXES, DEFAULT_TRANSCRIPT_FUNCTION};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER, DEFAULT_LOG_LEVEL};

/// Which discovered types take part in wiring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringConfig {
    /// Type-name prefixes to wire; empty wires everything
    pub include_prefixes: Vec<String>,

    /// Type-name prefixes never wired
    pub exclude_prefixes: Vec<String>,

    /// Log the registration table after the wiring pass
    pub log_registrations: bool,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            include_prefixes: Vec::new(),
            exclude_prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            log_registrations: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Transcript rendering and bootstrap-file markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Name of the generated function
    pub function_name: String,

    /// Line opening the generated region
    pub begin_marker: String,

    /// Line closing the generated region
    pub end_marker: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_TRANSCRIPT_FUNCTION.to_string(),
            begin_marker: DEFAULT_BEGIN_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Wiring filters
    pub wiring: WiringConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Transcript configuration
    pub transcript: TranscriptConfig,
}

impl AppConfig {
    /// Options for the wiring pass of a context built from this config
    pub fn wiring_options(&self) -> WiringOptions {
        WiringOptions {
            include_prefixes: self.wiring.include_prefixes.clone(),
            exclude_prefixes: self.wiring.exclude_prefixes.clone(),
            transcript_function: self.transcript.function_name.clone(),
            log_registrations: self.wiring.log_registrations,
        }
    }
}
