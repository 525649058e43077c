//! Integration tests for the call-site suffix.
//!
//! Every line can end with ` @ <path>:<line>:<column>` naming the call
//! that produced it. These tests parse the suffix back through
//! [`CallSite`]'s `FromStr` instead of asserting exact columns, and pin
//! lines by calling `line!()` on the same line as the log call, so they
//! stay correct when the file is edited above them.

use jot::{CallSite, Capture, Logger, Scope, SharedOptions, Sink, keys};
use serde_json::json;

fn capturing_logger() -> (Logger, Capture) {
    colored::control::set_override(false);
    let capture = Capture::new();
    let logger = Logger::with_parts(SharedOptions::new(), None);
    logger.set_sink(Sink::capture(&capture));
    (logger, capture)
}

/// Splits `line` into the message and the parsed call site.
fn split_suffix(line: &str) -> (String, CallSite) {
    let (message, suffix) = line
        .split_once(" @ ")
        .unwrap_or_else(|| panic!("no suffix in {line:?}"));
    let site = suffix
        .parse::<CallSite>()
        .unwrap_or_else(|error| panic!("bad suffix {suffix:?}: {error}"));
    (message.to_owned(), site)
}

// ============================================================================
// Suffix Contents
// ============================================================================

/// Verifies the suffix names this file and the line of the call.
#[test]
fn suffix_names_the_calling_line() {
    let (logger, capture) = capturing_logger();

    logger.log("located"); let expected_line = line!();

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    let (message, site) = split_suffix(&lines[0]);
    assert_eq!(message, "located");
    assert_eq!(site.path(), file!());
    assert_eq!(site.line(), expected_line);
    assert!(site.column() >= 1);
}

/// Verifies identically shaped calls on consecutive lines report the
/// same column and consecutive lines.
#[test]
fn suffix_is_stable_across_identical_calls() {
    let (logger, capture) = capturing_logger();

    logger.log("aaaa");
    logger.log("bbbb");

    let lines = capture.lines();
    let (_, first) = split_suffix(&lines[0]);
    let (_, second) = split_suffix(&lines[1]);
    assert_eq!(second.line(), first.line() + 1);
    assert_eq!(second.column(), first.column());
}

/// Verifies a multi-argument call carries one suffix at the end.
#[test]
fn multi_argument_lines_carry_one_suffix() {
    let (logger, capture) = capturing_logger();

    jot::jot_log!(logger, "copied", 3, "files");

    let lines = capture.lines();
    let (message, _site) = split_suffix(&lines[0]);
    assert_eq!(message, "copied 3 files");
    assert_eq!(lines[0].matches(" @ ").count(), 1);
}

// ============================================================================
// The showLogLine Option
// ============================================================================

/// Verifies a falsy `showLogLine` omits the suffix.
#[test]
fn falsy_show_log_line_omits_the_suffix() {
    let (logger, capture) = capturing_logger();

    logger.set_option(keys::SHOW_LOG_LINE, false, Scope::Instance);
    logger.log("bare");

    assert_eq!(capture.lines(), ["bare"]);
}

/// Verifies removing the seeded instance option leaves no fallback and
/// the suffix disappears.
#[test]
fn removing_show_log_line_disables_the_suffix() {
    let (logger, capture) = capturing_logger();

    logger.remove_option(keys::SHOW_LOG_LINE, Scope::Instance);
    logger.log("bare");

    assert_eq!(capture.lines(), ["bare"]);
}

/// Verifies a shared `showLogLine` backs up a removed instance value.
#[test]
fn shared_show_log_line_backs_up_the_instance() {
    let shared = SharedOptions::new();
    shared.set(keys::SHOW_LOG_LINE, json!(true));
    colored::control::set_override(false);
    let capture = Capture::new();
    let logger = Logger::with_parts(shared, None);
    logger.set_sink(Sink::capture(&capture));

    logger.remove_option(keys::SHOW_LOG_LINE, Scope::Instance);
    logger.log("suffixed");

    assert!(capture.lines()[0].starts_with("suffixed @ "));
}

// ============================================================================
// The basePath Option
// ============================================================================

/// Verifies `basePath` strips a leading directory and removing it
/// reports the path as captured again.
#[test]
fn base_path_relativises_and_reverts() {
    let (logger, capture) = capturing_logger();

    logger.set_option(keys::BASE_PATH, "tests", Scope::Instance);
    logger.log("near");
    logger.remove_option(keys::BASE_PATH, Scope::Instance);
    logger.log("far");

    let lines = capture.lines();
    let (_, near) = split_suffix(&lines[0]);
    let (_, far) = split_suffix(&lines[1]);
    assert_eq!(near.path(), "call_site_suffix.rs");
    assert_eq!(far.path(), file!());
}

/// Verifies a `basePath` that is not a prefix leaves the path alone.
#[test]
fn unrelated_base_path_changes_nothing() {
    let (logger, capture) = capturing_logger();

    logger.set_option(keys::BASE_PATH, "/nonexistent/root", Scope::Instance);
    logger.log("somewhere");

    let (_, site) = split_suffix(&capture.lines()[0]);
    assert_eq!(site.path(), file!());
}

// ============================================================================
// The ignoreLogsFor Option
// ============================================================================

/// Verifies a matching ignore pattern drops the suffix but keeps the
/// message.
#[test]
fn matching_ignore_pattern_suppresses_the_suffix() {
    let (logger, capture) = capturing_logger();

    logger.set_option(keys::IGNORE_LOGS_FOR, json!(["call_site_suffix"]), Scope::Instance);
    logger.log("quiet");
    logger.set_option(keys::IGNORE_LOGS_FOR, json!(["some_other_file"]), Scope::Instance);
    logger.log("loud");

    let lines = capture.lines();
    assert_eq!(lines[0], "quiet");
    assert!(lines[1].starts_with("loud @ "));
}

/// Verifies any needle in the list is enough to suppress.
#[test]
fn any_needle_in_the_list_suppresses() {
    let (logger, capture) = capturing_logger();

    logger.set_option(
        keys::IGNORE_LOGS_FOR,
        json!(["unrelated.rs", "call_site_suffix"]),
        Scope::Instance,
    );
    logger.log("quiet");

    assert_eq!(capture.lines(), ["quiet"]);
}

// ============================================================================
// Wrappers
// ============================================================================

/// Verifies a `#[track_caller]` helper reports its caller's line.
#[test]
fn tracked_wrappers_report_their_caller() {
    let (logger, capture) = capturing_logger();

    #[track_caller]
    fn announce(logger: &Logger, text: &str) {
        logger.log(text);
    }

    announce(&logger, "routed"); let expected_line = line!();

    let (message, site) = split_suffix(&capture.lines()[0]);
    assert_eq!(message, "routed");
    assert_eq!(site.line(), expected_line);
    assert_eq!(site.path(), file!());
}

/// Verifies an untracked helper reports its own interior line instead.
#[test]
fn untracked_wrappers_report_their_own_line() {
    let (logger, capture) = capturing_logger();

    fn announce(logger: &Logger) -> u32 {
        logger.log("inside"); line!()
    }

    let interior_line = announce(&logger);

    let (_, site) = split_suffix(&capture.lines()[0]);
    assert_eq!(site.line(), interior_line);
}
