//! Registration diagnostics

use ioc_application::ExecutionContext;
use ioc_domain::error::Result;

use crate::error_ext::ErrorContext;

/// The registration table of `context` as pretty-printed JSON
///
/// Wires the context if it has not been used yet.
pub fn registrations_json(context: &ExecutionContext) -> Result<String> {
    let registrations = context.list_registrations()?;
    serde_json::to_string_pretty(&registrations).config_context("Failed to serialize registrations")
}
