//! # Overview
//!
//! `jot` is a console logger with a fixed set of severities, each with
//! its own styling and output channel: `error` prints red on stderr,
//! `success` green on stdout, `data` pretty-prints JSON in magenta, and
//! so on. Every line can end with a muted ` @ <path>:<line>:<column>`
//! suffix naming the call site, captured through `#[track_caller]`, so
//! a log line points back at the code that produced it.
//!
//! Behaviour is driven by options in two scopes: each logger's private
//! store and a shared store visible to every logger built over it. A
//! truthy instance value wins; otherwise the shared value applies.
//! `debug` messages carry a category and can be switched on and off
//! per category, with a `*` wildcard for the rest.
//!
//! This crate is a facade over the two workspace members: `jot-core`
//! (severities, styling, argument rendering, call sites) and
//! `jot-logging` (the logger, options, categories, sinks, and the
//! optional `tracing` bridge).
//!
//! # Examples
//!
//! Most programs use the process-wide logger:
//!
//! ```
//! use jot::logger;
//!
//! logger().info("starting up");
//! logger().success("ready");
//! ```
//!
//! Tests build their own logger and capture its output:
//!
//! ```
//! use jot::{Capture, Logger, Scope, SharedOptions, Sink};
//!
//! # colored::control::set_override(false);
//! let capture = Capture::new();
//! let logger = Logger::with_parts(SharedOptions::new(), None);
//! logger.set_sink(Sink::capture(&capture));
//! logger.set_option("showLogLine", false, Scope::Instance);
//!
//! logger.warn("low disk");
//! assert_eq!(capture.lines(), ["low disk"]);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::OnceLock;

pub use jot_logging::{
    Argument, CallSite, Capture, CategoryOp, CategoryState, Channel, DEVICE_NAME_VAR,
    DebugCategories, Logger, OptionStore, ParseCallSiteError, ParseCategoryOpError,
    ParseCategoryStateError, ParseSeverityError, RenderMode, Resolution, Scope, Severity,
    SharedOptions, Sink, Style, WILDCARD, is_truthy, keys,
};
pub use jot_logging::{
    jot_data, jot_debug, jot_emit, jot_error, jot_error_heading, jot_fatal, jot_fixme, jot_help,
    jot_info, jot_json, jot_log, jot_success, jot_todo, jot_trace, jot_verbose, jot_warn,
    jot_warn_heading,
};
#[cfg(feature = "tracing")]
pub use jot_logging::{JotLayer, init_tracing, init_tracing_with_filter};

static PROCESS_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger.
///
/// Built on first use over [`SharedOptions::process_default`]; the
/// device name is read from [`DEVICE_NAME_VAR`] at that point. Every
/// call returns the same instance, so options and categories set
/// through it apply process-wide.
#[must_use]
pub fn logger() -> &'static Logger {
    PROCESS_LOGGER.get_or_init(Logger::new)
}
