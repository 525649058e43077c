use std::fmt;
use std::str::FromStr;

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::style::Style;

/// Output stream a rendered line is routed to.
///
/// Error- and warning-class severities share the error stream; everything
/// else goes to standard output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl Channel {
    /// Reports whether this channel is the error stream.
    #[must_use]
    pub const fn is_stderr(self) -> bool {
        matches!(self, Self::Stderr)
    }
}

/// How structured argument values are inspected when rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RenderMode {
    /// Single-line JSON, the default for most severities.
    Compact,
    /// Indented JSON for severities meant for inspecting values.
    Pretty,
}

/// Severity of a log call.
///
/// The set is closed: each variant carries its label, [`Style`], output
/// [`Channel`], and [`RenderMode`] as compile-time policy, replacing any
/// runtime-mutable table keyed by severity name.
///
/// # Examples
///
/// ```
/// use jot_core::severity::{Channel, Severity};
///
/// assert_eq!(Severity::ErrorHeading.label(), "errorHeading");
/// assert_eq!(Severity::Success.channel(), Channel::Stdout);
/// assert!(Severity::Fatal.channel().is_stderr());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Failure report, red.
    Error,
    /// Banner-style failure report, white on red.
    ErrorHeading,
    /// Unrecoverable failure, white on red.
    Fatal,
    /// Marker for known-broken code paths, yellow.
    Fixme,
    /// Usage guidance, black on white.
    Help,
    /// General informational message, cyan.
    Info,
    /// Plain unstyled output.
    Log,
    /// Positive completion report, green.
    Success,
    /// Marker for pending work, yellow.
    Todo,
    /// Execution-flow note, yellow.
    Trace,
    /// Recoverable problem report, yellow.
    Warn,
    /// Banner-style problem report, black on yellow.
    WarnHeading,
    /// Structured-value dump, magenta, pretty-printed.
    Data,
    /// Category-gated diagnostic, cyan.
    Debug,
    /// Structured-value dump, magenta, pretty-printed.
    Json,
    /// Low-priority detail, dimmed, pretty-printed.
    Verbose,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Error,
        Self::ErrorHeading,
        Self::Fatal,
        Self::Fixme,
        Self::Help,
        Self::Info,
        Self::Log,
        Self::Success,
        Self::Todo,
        Self::Trace,
        Self::Warn,
        Self::WarnHeading,
        Self::Data,
        Self::Debug,
        Self::Json,
        Self::Verbose,
    ];

    /// Returns the camel-case label used when naming the severity.
    ///
    /// The labels double as the [`FromStr`] vocabulary, so
    /// `label().parse::<Severity>()` round-trips for every variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_core::severity::Severity;
    ///
    /// assert_eq!(Severity::Warn.label(), "warn");
    /// assert_eq!(Severity::WarnHeading.label(), "warnHeading");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::ErrorHeading => "errorHeading",
            Self::Fatal => "fatal",
            Self::Fixme => "fixme",
            Self::Help => "help",
            Self::Info => "info",
            Self::Log => "log",
            Self::Success => "success",
            Self::Todo => "todo",
            Self::Trace => "trace",
            Self::Warn => "warn",
            Self::WarnHeading => "warnHeading",
            Self::Data => "data",
            Self::Debug => "debug",
            Self::Json => "json",
            Self::Verbose => "verbose",
        }
    }

    /// Reports whether this severity reports a failure.
    #[must_use]
    pub const fn is_error_class(self) -> bool {
        matches!(self, Self::Error | Self::ErrorHeading | Self::Fatal)
    }

    /// Reports whether this severity reports a recoverable problem.
    #[must_use]
    pub const fn is_warning_class(self) -> bool {
        matches!(self, Self::Warn | Self::WarnHeading | Self::Todo | Self::Fixme)
    }

    /// Returns the output channel lines of this severity are written to.
    ///
    /// Both the error class and the warning class route to the error stream,
    /// mirroring console semantics where warnings share stderr with errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_core::severity::{Channel, Severity};
    ///
    /// assert_eq!(Severity::Warn.channel(), Channel::Stderr);
    /// assert_eq!(Severity::Trace.channel(), Channel::Stdout);
    /// ```
    #[must_use]
    pub const fn channel(self) -> Channel {
        if self.is_error_class() || self.is_warning_class() {
            Channel::Stderr
        } else {
            Channel::Stdout
        }
    }

    /// Returns the style applied to each rendered segment.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Error => Style::fg(Color::Red),
            Self::ErrorHeading | Self::Fatal => Style::fg_bg(Color::White, Color::Red),
            Self::Fixme | Self::Todo | Self::Trace | Self::Warn => Style::fg(Color::Yellow),
            Self::Help => Style::fg_bg(Color::Black, Color::White),
            Self::Info | Self::Debug => Style::fg(Color::Cyan),
            Self::Log => Style::plain(),
            Self::Success => Style::fg(Color::Green),
            Self::WarnHeading => Style::fg_bg(Color::Black, Color::Yellow),
            Self::Data | Self::Json => Style::fg(Color::Magenta),
            Self::Verbose => Style::dim(),
        }
    }

    /// Returns how structured arguments are inspected for this severity.
    #[must_use]
    pub const fn render_mode(self) -> RenderMode {
        match self {
            Self::Data | Self::Json | Self::Verbose => RenderMode::Pretty,
            _ => RenderMode::Compact,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "error" => Ok(Self::Error),
            "errorHeading" => Ok(Self::ErrorHeading),
            "fatal" => Ok(Self::Fatal),
            "fixme" => Ok(Self::Fixme),
            "help" => Ok(Self::Help),
            "info" => Ok(Self::Info),
            "log" => Ok(Self::Log),
            "success" => Ok(Self::Success),
            "todo" => Ok(Self::Todo),
            "trace" => Ok(Self::Trace),
            "warn" => Ok(Self::Warn),
            "warnHeading" => Ok(Self::WarnHeading),
            "data" => Ok(Self::Data),
            "debug" => Ok(Self::Debug),
            "json" => Ok(Self::Json),
            "verbose" => Ok(Self::Verbose),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}
