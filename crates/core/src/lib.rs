#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `jot-core` provides the value types shared by the jot logging workspace:
//! the closed [`Severity`] set with its compile-time styling and routing
//! policy, the [`Style`] descriptor applied to rendered text, the
//! [`Argument`] type that turns heterogeneous log-call inputs into printable
//! segments, and the [`CallSite`] location captured at each public logging
//! entry point.
//!
//! # Design
//!
//! Every severity maps at compile time to its label, ANSI style, output
//! channel, and render mode; there is no runtime-mutable style table. Source
//! locations come from [`std::panic::Location`] via `#[track_caller]` entry
//! points, so resolving "the caller of the public API" needs no stack-frame
//! arithmetic. The crate performs no I/O: the logging layer composes these
//! pieces into lines and owns the output streams.
//!
//! # Invariants
//!
//! - [`Severity::label`] and [`Severity::from_str`](std::str::FromStr)
//!   round-trip for every variant.
//! - [`Argument`] rendering yields exactly one segment, except error
//!   arguments which yield two (display form, then source-chain text).
//! - [`CallSite`] parsing strips exactly the last two colon-delimited
//!   segments, so Windows drive letters survive in the path component.

/// The [`Argument`] type that turns heterogeneous log-call inputs into
/// printable segments.
pub mod argument;
/// The [`CallSite`] location captured at each public logging entry point.
pub mod call_site;
/// The closed [`Severity`] set with its compile-time styling and routing
/// policy.
pub mod severity;
/// The [`Style`] descriptor applied to rendered text.
pub mod style;

pub use argument::Argument;
pub use call_site::{CallSite, ParseCallSiteError, Resolution};
pub use severity::{Channel, ParseSeverityError, RenderMode, Severity};
pub use style::Style;
