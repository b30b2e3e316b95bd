//! Host-facing plugin interface.
//!
//! The host builds a [`ReadmePlugin`] once per activation and feeds it every
//! event. A `message` event whose content contains the trigger phrase starts
//! a generation.
//!
//! Generations are guarded by a single slot: with [`InFlightPolicy::Skip`] a
//! trigger that arrives while another generation is running is dropped, with
//! [`InFlightPolicy::Wait`] it runs once the first one has finished. Either
//! way two generations never write the README at the same time.

use crate::config::InFlightPolicy;
use crate::events::HostEvent;
use crate::git::CommandRunner;
use crate::readme::{GenerationReport, ReadmeGenerator};
use std::sync::{Mutex, TryLockError};

/// Receives events from the host runtime.
pub trait EventHandler {
    /// Handle one event.
    ///
    /// Returns the generation outcome when the event started one, `None`
    /// when it was ignored or skipped.
    fn handle_event(&self, event: &HostEvent) -> Option<GenerationReport>;
}

/// Whether `event` is a message containing `trigger`.
pub fn is_trigger(event: &HostEvent, trigger: &str) -> bool {
    event
        .message_content()
        .is_some_and(|content| content.contains(trigger))
}

/// README generator bound to host events.
pub struct ReadmePlugin<R> {
    generator: ReadmeGenerator<R>,
    in_flight: Mutex<()>,
}

impl<R: CommandRunner> ReadmePlugin<R> {
    pub fn new(generator: ReadmeGenerator<R>) -> Self {
        let trigger = &generator.config().trigger;
        tracing::info!(
            worktree = %generator.context().worktree.display(),
            "README generator ready; send \"{}\" to create {}",
            trigger,
            generator.config().output_file
        );

        Self {
            generator,
            in_flight: Mutex::new(()),
        }
    }

    #[allow(dead_code)]
    pub fn generator(&self) -> &ReadmeGenerator<R> {
        &self.generator
    }

    fn run_guarded(&self) -> Option<GenerationReport> {
        let _slot = match self.generator.config().in_flight {
            InFlightPolicy::Wait => self
                .in_flight
                .lock()
                .unwrap_or_else(|poison| poison.into_inner()),
            InFlightPolicy::Skip => match self.in_flight.try_lock() {
                Ok(slot) => slot,
                Err(TryLockError::Poisoned(poison)) => poison.into_inner(),
                Err(TryLockError::WouldBlock) => {
                    tracing::warn!("README generation already in progress; trigger skipped");
                    return None;
                }
            },
        };

        Some(self.generator.generate())
    }
}

impl<R: CommandRunner> EventHandler for ReadmePlugin<R> {
    fn handle_event(&self, event: &HostEvent) -> Option<GenerationReport> {
        if !is_trigger(event, &self.generator.config().trigger) {
            return None;
        }

        tracing::info!("generating {}", self.generator.config().output_file);
        self.run_guarded()
    }
}
