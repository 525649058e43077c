//! # Overview
//!
//! Console logging with per-severity styling, channel routing, and
//! call-site reporting. This crate carries the runtime pieces: the
//! [`Logger`] itself, the instance and shared option stores, debug
//! category gating, and the output sinks. The severity table, styling,
//! argument rendering, and call-site types live in `jot-core` and are
//! re-exported here.
//!
//! # Design
//!
//! A [`Logger`] works entirely through `&self`; configuration calls
//! chain. Output goes to the process streams by default and can be
//! redirected into in-memory [`Capture`] buffers for assertions. The
//! optional `tracing` feature adds a [`tracing_bridge`] that renders
//! `tracing` events through a logger.
//!
//! # Examples
//!
//! ```
//! use jot_logging::{Capture, Logger, Scope, SharedOptions, Sink};
//!
//! # colored::control::set_override(false);
//! let capture = Capture::new();
//! let logger = Logger::with_parts(SharedOptions::new(), None);
//! logger.set_sink(Sink::capture(&capture));
//! logger.set_option("showLogLine", false, Scope::Instance);
//!
//! logger.log("starting up");
//! logger.debug("cache warm", "CACHE");
//! assert_eq!(capture.lines(), ["starting up", "CACHE: cache warm"]);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod categories;
pub mod logger;
mod macros;
pub mod options;
pub mod sink;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use categories::{
    CategoryOp, CategoryState, DebugCategories, ParseCategoryOpError, ParseCategoryStateError,
    WILDCARD,
};
pub use jot_core::argument::Argument;
pub use jot_core::call_site::{CallSite, ParseCallSiteError, Resolution};
pub use jot_core::severity::{Channel, ParseSeverityError, RenderMode, Severity};
pub use jot_core::style::Style;
pub use logger::{DEVICE_NAME_VAR, Logger};
pub use options::{OptionStore, Scope, SharedOptions, is_truthy, keys};
pub use sink::{Capture, Sink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{JotLayer, init_tracing, init_tracing_with_filter};
