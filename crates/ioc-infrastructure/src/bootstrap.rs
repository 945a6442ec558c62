//! Bootstrap file update
//!
//! A bootstrap file holds a generated region delimited by two marker lines.
//! Updating it replaces the region with a fresh transcript, so a host can
//! later build its graph from plain code without discovery.

use std::fs;
use std::path::Path;

use ioc_application::ExecutionContext;
use ioc_domain::error::{Error, Result};
use ioc_domain::ports::{Capability, Discovery};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, TranscriptConfig};
use crate::error_ext::ErrorContext;
use crate::logging::log_wire_error;

/// Context wired with the filters and transcript name of `config`
pub fn build_context<D: Discovery + 'static>(config: &AppConfig, discovery: D) -> ExecutionContext {
    ExecutionContext::new(discovery)
        .with_options(config.wiring_options())
        .with_wire_error_handler(log_wire_error)
}

/// Replace the lines between the markers with `generated`
///
/// Marker lines are matched ignoring surrounding whitespace and are kept.
/// Text without a begin marker comes back unchanged.
pub fn splice_generated(existing: &str, generated: &str, config: &TranscriptConfig) -> Result<String> {
    let begin = config.begin_marker.trim();
    let end = config.end_marker.trim();

    let mut output = String::with_capacity(existing.len() + generated.len());
    let mut lines = existing.lines();
    while let Some(line) = lines.next() {
        output.push_str(line);
        output.push('\n');
        if line.trim() != begin {
            continue;
        }

        output.push_str(generated);
        if !generated.is_empty() && !generated.ends_with('\n') {
            output.push('\n');
        }
        let closing = lines.by_ref().find(|line| line.trim() == end).ok_or_else(|| {
            Error::configuration(format!(
                "Unexpected end of bootstrap code, nothing after: {begin}"
            ))
        })?;
        output.push_str(closing);
        output.push('\n');
    }

    if !existing.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}

/// Regenerate the region of the bootstrap file at `path` for capability `C`
///
/// Returns whether the file was rewritten. A missing file is left alone.
/// Only constructions the call performs are transcribed, so `context`
/// should be fresh.
pub fn update_bootstrap_file<C: Capability + ?Sized>(
    context: &ExecutionContext,
    path: &Path,
    config: &TranscriptConfig,
) -> Result<bool> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "Not updating bootstrap file because it doesn't exist"
        );
        return Ok(false);
    }

    let existing = fs::read_to_string(path)
        .io_context(format!("Failed to read bootstrap file {}", path.display()))?;
    let generated = context.emit_transcript_for::<C>()?;
    let updated = splice_generated(&existing, &generated, config)?;

    if updated == existing {
        debug!(path = %path.display(), "Bootstrap file already up to date");
        return Ok(false);
    }
    fs::write(path, updated)
        .io_context(format!("Failed to write bootstrap file {}", path.display()))?;
    info!(path = %path.display(), "Updated bootstrap file");
    Ok(true)
}
