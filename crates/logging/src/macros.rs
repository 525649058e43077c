//! crates/logging/src/macros.rs
//!
//! Variadic front ends over [`Logger::emit`](crate::logger::Logger::emit).
//!
//! Each macro takes a logger expression followed by any number of
//! argument expressions convertible with [`Argument::from`]; arguments
//! render to segments joined with single spaces. The macros expand to a
//! plain `emit` call, so the reported call site is the macro invocation.
//!
//! [`Argument::from`]: crate::Argument

/// Logs at an explicit severity: `jot_emit!(logger, severity, args...)`.
///
/// # Examples
///
/// ```
/// use jot_logging::{Capture, Logger, Scope, SharedOptions, Severity, Sink, jot_emit};
///
/// let capture = Capture::new();
/// let logger = Logger::with_parts(SharedOptions::new(), None);
/// logger.set_sink(Sink::capture(&capture));
/// logger.set_option("showLogLine", false, Scope::Instance);
///
/// jot_emit!(logger, Severity::Log, "copied", 3, "files");
/// assert_eq!(capture.lines(), ["copied 3 files"]);
/// ```
#[macro_export]
macro_rules! jot_emit {
    ($logger:expr, $severity:expr $(, $argument:expr)* $(,)?) => {
        $logger.emit($severity, &[$($crate::Argument::from($argument)),*])
    };
}

/// Logs at the `error` severity.
#[macro_export]
macro_rules! jot_error {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Error $(, $argument)*)
    };
}

/// Logs at the `errorHeading` severity.
#[macro_export]
macro_rules! jot_error_heading {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::ErrorHeading $(, $argument)*)
    };
}

/// Logs at the `fatal` severity.
#[macro_export]
macro_rules! jot_fatal {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Fatal $(, $argument)*)
    };
}

/// Logs at the `fixme` severity.
#[macro_export]
macro_rules! jot_fixme {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Fixme $(, $argument)*)
    };
}

/// Logs at the `help` severity.
#[macro_export]
macro_rules! jot_help {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Help $(, $argument)*)
    };
}

/// Logs at the `info` severity.
#[macro_export]
macro_rules! jot_info {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Info $(, $argument)*)
    };
}

/// Logs at the `log` severity.
#[macro_export]
macro_rules! jot_log {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Log $(, $argument)*)
    };
}

/// Logs at the `success` severity.
#[macro_export]
macro_rules! jot_success {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Success $(, $argument)*)
    };
}

/// Logs at the `todo` severity.
#[macro_export]
macro_rules! jot_todo {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Todo $(, $argument)*)
    };
}

/// Logs at the `trace` severity.
#[macro_export]
macro_rules! jot_trace {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Trace $(, $argument)*)
    };
}

/// Logs at the `warn` severity.
#[macro_export]
macro_rules! jot_warn {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Warn $(, $argument)*)
    };
}

/// Logs at the `warnHeading` severity.
#[macro_export]
macro_rules! jot_warn_heading {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::WarnHeading $(, $argument)*)
    };
}

/// Logs at the `data` severity.
#[macro_export]
macro_rules! jot_data {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Data $(, $argument)*)
    };
}

/// Logs at the `json` severity.
#[macro_export]
macro_rules! jot_json {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Json $(, $argument)*)
    };
}

/// Logs at the `verbose` severity.
#[macro_export]
macro_rules! jot_verbose {
    ($logger:expr $(, $argument:expr)* $(,)?) => {
        $crate::jot_emit!($logger, $crate::Severity::Verbose $(, $argument)*)
    };
}

/// Logs at the `debug` severity under a category:
/// `jot_debug!(logger, message, category)`.
#[macro_export]
macro_rules! jot_debug {
    ($logger:expr, $message:expr, $category:expr $(,)?) => {
        $logger.debug($message, $category)
    };
}

#[cfg(test)]
mod tests {
    use crate::logger::Logger;
    use crate::options::{Scope, SharedOptions, keys};
    use crate::sink::{Capture, Sink};

    fn capturing_logger() -> (Logger, Capture) {
        colored::control::set_override(false);
        let capture = Capture::new();
        let logger = Logger::with_parts(SharedOptions::new(), None);
        logger.set_sink(Sink::capture(&capture));
        logger.set_option(keys::SHOW_LOG_LINE, false, Scope::Instance);
        (logger, capture)
    }

    #[test]
    fn severity_macros_join_arguments() {
        let (logger, capture) = capturing_logger();

        jot_log!(logger, "moved", 2, "entries");
        jot_success!(logger, "done");
        assert_eq!(capture.lines(), ["moved 2 entries", "done"]);
    }

    #[test]
    fn macros_accept_zero_arguments() {
        let (logger, capture) = capturing_logger();

        jot_log!(logger);
        assert_eq!(capture.lines(), [""]);
    }

    #[test]
    fn debug_macro_forwards_the_category() {
        let (logger, capture) = capturing_logger();

        jot_debug!(logger, "probing", "NET");
        assert_eq!(capture.lines(), ["NET: probing"]);
    }

    #[test]
    fn trailing_commas_are_accepted() {
        let (logger, capture) = capturing_logger();

        jot_warn!(logger, "careful",);
        jot_debug!(logger, "probing", "NET",);
        assert_eq!(capture.lines(), ["careful", "NET: probing"]);
    }
}
