//! Implementation of `readmegen listen`.
//!
//! Reads host events as NDJSON from an input stream and hands each one to an
//! [`EventHandler`]. Events are processed in arrival order; a line that is not
//! a valid event is logged and skipped so one bad line does not end the
//! session. Every generation outcome is written to the output as one JSON line.

use crate::error::{ReadmeError, Result};
use crate::events::HostEvent;
use crate::plugin::EventHandler;
use std::io::{BufRead, Write};

/// Counters for a finished listen session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenSummary {
    /// Valid events received.
    pub events: usize,
    /// Lines that could not be decoded.
    pub malformed: usize,
    /// Generations started by trigger messages.
    pub generations: usize,
    /// Generations that reported failure.
    pub failures: usize,
}

/// Feed every event from `input` to `handler` until end of stream.
pub fn listen<I, O, H>(input: I, mut output: O, handler: &H) -> Result<ListenSummary>
where
    I: BufRead,
    O: Write,
    H: EventHandler + ?Sized,
{
    let mut summary = ListenSummary::default();

    // Split on raw bytes so a line that is not UTF-8 is skipped like bad JSON.
    for (index, bytes) in input.split(b'\n').enumerate() {
        let bytes = bytes
            .map_err(|e| ReadmeError::UserError(format!("failed to read event stream: {}", e)))?;
        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line.trim(),
            Err(e) => {
                tracing::warn!(line = index + 1, "skipping event: not valid UTF-8: {}", e);
                summary.malformed += 1;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let event = match HostEvent::from_json_line(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(line = index + 1, "skipping event: {}", e);
                summary.malformed += 1;
                continue;
            }
        };
        summary.events += 1;

        let Some(report) = handler.handle_event(&event) else {
            continue;
        };

        summary.generations += 1;
        if !report.success {
            summary.failures += 1;
        }

        let json = serde_json::to_string(&report)
            .map_err(|e| ReadmeError::UserError(format!("failed to serialize report: {}", e)))?;
        writeln!(output, "{}", json)
            .and_then(|_| output.flush())
            .map_err(|e| ReadmeError::UserError(format!("failed to write report: {}", e)))?;
    }

    Ok(summary)
}
