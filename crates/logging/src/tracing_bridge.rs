//! crates/logging/src/tracing_bridge.rs
//!
//! Bridge from `tracing` events into jot severities.
//!
//! # Design
//!
//! [`JotLayer`] owns a [`Logger`] and forwards each event's `message`
//! field to it, mapped by level: `ERROR` to `error`, `WARN` to `warn`,
//! `INFO` to `info`, `DEBUG` to `debug` with the event target as the
//! category, and `TRACE` to `trace`. Events without a `message` field
//! are dropped.
//!
//! Call sites come from event metadata rather than
//! [`Location`](std::panic::Location) capture, so the suffix carries
//! the file and line of the `tracing` macro invocation; metadata has no
//! column, which is reported as 0. The sites still pass the logger's
//! `ignoreLogsFor` and `basePath` screening.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::logger::Logger;
use jot_core::call_site::CallSite;
use jot_core::severity::Severity;

/// A `tracing_subscriber` layer that renders events through a
/// [`Logger`].
#[derive(Debug)]
pub struct JotLayer {
    logger: Logger,
}

impl JotLayer {
    /// Wraps `logger` so events are rendered through it.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Returns the logger events are rendered through.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl<S: Subscriber> Layer<S> for JotLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let metadata = event.metadata();
        let site = metadata
            .line()
            .map(|line| CallSite::from_parts(metadata.file().unwrap_or(metadata.target()), line, 0));

        let severity = severity_for(*metadata.level());
        if severity == Severity::Debug {
            self.logger
                .debug_with_site(message, metadata.target(), site);
        } else {
            self.logger
                .emit_with_site(severity, site, &[message.into()]);
        }
    }
}

fn severity_for(level: Level) -> Severity {
    match level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warn,
        Level::INFO => Severity::Info,
        Level::DEBUG => Severity::Debug,
        _ => Severity::Trace,
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`JotLayer`] over `logger` as the global subscriber.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing(logger: Logger) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(JotLayer::new(logger))
        .try_init()
}

/// Installs a [`JotLayer`] together with an additional filtering layer,
/// typically an [`EnvFilter`](tracing_subscriber::EnvFilter):
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(logger, EnvFilter::from_default_env())?;
/// ```
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(JotLayer::new(logger))
        .try_init()
}

#[cfg(test)]
#[path = "tracing_bridge_tests.rs"]
mod tests;
