//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Naming conventions of the engine itself live in `ioc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ioc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ioc";

/// Environment variable prefix for configuration (`IOC__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "IOC";

/// Separator between the prefix and nested keys of configuration variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "IOC_LOG";

// ============================================================================
// BOOTSTRAP CONSTANTS
// ============================================================================

/// Line opening the generated region of a bootstrap file
pub const DEFAULT_BEGIN_MARKER: &str = "// @generated ioc-bootstrap begin";

/// Line closing the generated region of a bootstrap file
pub const DEFAULT_END_MARKER: &str = "// @generated ioc-bootstrap end";
