//! Domain constants
//!
//! Naming conventions shared by the registry, the resolution engine and
//! the transcript emitter.

/// Prefix of every symbolic instance name (`_000_leaf`)
pub const SYMBOL_PREFIX: char = '_';

/// Zero-padded width of the counter part of a symbolic name
pub const SYMBOL_COUNTER_WIDTH: usize = 3;

/// Prefix `std::any::type_name` puts in front of trait-object types
pub const TRAIT_OBJECT_PREFIX: &str = "dyn ";

/// Path separator used in type names
pub const PATH_SEPARATOR: &str = "::";

/// Default transcript function name
pub const DEFAULT_TRANSCRIPT_FUNCTION: &str = "create";

/// Type-name prefixes that are never wired by default
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["std::", "core::", "alloc::"];
