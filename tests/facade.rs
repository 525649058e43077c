//! Integration tests for the facade surface: the process-wide logger,
//! the re-exported macros, and argument rendering through the public
//! API.

use std::io;

use jot::{Argument, Capture, Logger, Scope, Severity, SharedOptions, Sink, keys};
use serde_json::json;

fn capturing_logger() -> (Logger, Capture) {
    colored::control::set_override(false);
    let capture = Capture::new();
    let logger = Logger::with_parts(SharedOptions::new(), None);
    logger.set_sink(Sink::capture(&capture));
    logger.set_option(keys::SHOW_LOG_LINE, false, Scope::Instance);
    (logger, capture)
}

// ============================================================================
// Process-Wide Logger
// ============================================================================

/// Verifies `jot::logger()` always hands back the same instance.
#[test]
fn process_logger_is_a_singleton() {
    assert!(std::ptr::eq(jot::logger(), jot::logger()));
}

// ============================================================================
// Macros
// ============================================================================

/// Verifies the re-exported macros reach the logger.
#[test]
fn macros_work_through_the_facade() {
    let (logger, capture) = capturing_logger();

    jot::jot_log!(logger, "plain");
    jot::jot_warn!(logger, "careful:", 2, "retries left");
    jot::jot_debug!(logger, "cache warm", "CACHE");

    assert_eq!(
        capture.lines(),
        ["plain", "careful: 2 retries left", "CACHE: cache warm"]
    );
}

/// Verifies `jot_emit!` takes the severity as an expression.
#[test]
fn emit_macro_takes_a_severity_expression() {
    let (logger, capture) = capturing_logger();
    let severity = Severity::Success;

    jot::jot_emit!(logger, severity, "done");

    assert_eq!(capture.lines(), ["done"]);
}

// ============================================================================
// Scalar Arguments
// ============================================================================

/// Verifies strings pass through verbatim, not JSON-quoted.
#[test]
fn strings_render_verbatim() {
    let (logger, capture) = capturing_logger();

    logger.log("no \"quoting\" added");

    assert_eq!(capture.lines(), ["no \"quoting\" added"]);
}

/// Verifies numbers, bools, and chars render their plain forms.
#[test]
fn scalars_render_plainly() {
    let (logger, capture) = capturing_logger();

    logger.log(42);
    logger.log(true);
    logger.log('x');
    logger.log(-3.5);

    assert_eq!(capture.lines(), ["42", "true", "x", "-3.5"]);
}

/// Verifies the special float values use spelled-out names.
#[test]
fn special_floats_render_as_names() {
    let (logger, capture) = capturing_logger();

    logger.log(f64::NAN);
    logger.log(f64::INFINITY);
    logger.log(f64::NEG_INFINITY);

    assert_eq!(capture.lines(), ["NaN", "Infinity", "-Infinity"]);
}

/// Verifies `None` renders as the word and `Some` unwraps.
#[test]
fn options_render_their_contents() {
    let (logger, capture) = capturing_logger();

    logger.log(Option::<&str>::None);
    logger.log(Some("present"));

    assert_eq!(capture.lines(), ["None", "present"]);
}

// ============================================================================
// Structured Arguments
// ============================================================================

/// Verifies JSON values render compactly at plain severities.
#[test]
fn structured_values_render_compact_json() {
    let (logger, capture) = capturing_logger();
    let value = json!({"b": 1, "a": [true, null]});

    logger.log(value.clone());

    assert_eq!(capture.lines(), [value.to_string()]);
}

/// Verifies `Argument::structured` serialises arbitrary values.
#[test]
fn structured_wraps_serialisable_types() {
    let (logger, capture) = capturing_logger();

    logger.emit(
        Severity::Log,
        &[Argument::structured(&[("size", 10), ("used", 7)])],
    );

    assert_eq!(capture.lines(), ["[[\"size\",10],[\"used\",7]]"]);
}

// ============================================================================
// Error Arguments
// ============================================================================

/// Verifies an error renders its display form and a trace segment.
#[test]
fn errors_render_display_and_trace() {
    let (logger, capture) = capturing_logger();
    let failure = io::Error::new(io::ErrorKind::NotFound, "disk offline");
    let expected = format!("{failure} {failure:?}");

    logger.emit(Severity::Error, &[Argument::error(&failure)]);

    assert_eq!(capture.lines(), [expected]);
}

// ============================================================================
// Set Arguments
// ============================================================================

/// Verifies sets render with their length and a JSON array body.
#[test]
fn sets_render_length_and_body() {
    let (logger, capture) = capturing_logger();

    logger.emit(Severity::Log, &[Argument::set(["alpha", "beta"])]);
    logger.emit(Severity::Log, &[Argument::set(Vec::<u8>::new())]);

    assert_eq!(
        capture.lines(),
        ["Set(2) [\"alpha\",\"beta\"]", "Set(0) []"]
    );
}
