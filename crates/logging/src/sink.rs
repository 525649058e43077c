//! crates/logging/src/sink.rs
//!
//! Output routing for composed log lines.
//!
//! # Design
//!
//! A [`Sink`] receives finished lines together with the [`Channel`]
//! their severity routes to. The default sink writes to the real
//! stdout and stderr; [`Sink::capture`] and [`Sink::split`] redirect
//! lines into in-memory [`Capture`] buffers so behaviour can be
//! asserted without touching the process streams. Write failures on
//! the console are swallowed; a closed pipe must not turn logging into
//! a panic.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use jot_core::severity::Channel;

/// A shared in-memory buffer of captured log lines.
///
/// Cloning yields a handle to the same buffer, so a capture can be
/// handed to a [`Sink`] while the test keeps its own handle for
/// assertions.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything captured so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Returns the captured lines, without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToOwned::to_owned).collect()
    }

    /// Returns and clears the captured contents.
    pub fn take(&self) -> String {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&std::mem::take(&mut *buffer)).into_owned()
    }

    /// Returns `true` while nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    fn push_line(&self, line: &str) {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.extend_from_slice(line.as_bytes());
        buffer.push(b'\n');
    }
}

/// Destination for composed log lines.
#[derive(Clone, Debug)]
pub struct Sink {
    kind: SinkKind,
}

#[derive(Clone, Debug)]
enum SinkKind {
    Console,
    Capture(Capture),
    Split { out: Capture, err: Capture },
}

impl Sink {
    /// The process stdout and stderr. This is the default.
    #[must_use]
    pub fn console() -> Self {
        Self {
            kind: SinkKind::Console,
        }
    }

    /// Sends both channels into one capture buffer.
    #[must_use]
    pub fn capture(capture: &Capture) -> Self {
        Self {
            kind: SinkKind::Capture(capture.clone()),
        }
    }

    /// Sends each channel into its own capture buffer.
    #[must_use]
    pub fn split(out: &Capture, err: &Capture) -> Self {
        Self {
            kind: SinkKind::Split {
                out: out.clone(),
                err: err.clone(),
            },
        }
    }

    /// Writes one finished line, appending a newline.
    pub fn write_line(&self, channel: Channel, line: &str) {
        match &self.kind {
            SinkKind::Console => {
                if channel.is_stderr() {
                    let mut stream = io::stderr().lock();
                    let _ = writeln!(stream, "{line}");
                } else {
                    let mut stream = io::stdout().lock();
                    let _ = writeln!(stream, "{line}");
                    let _ = stream.flush();
                }
            }
            SinkKind::Capture(capture) => capture.push_line(line),
            SinkKind::Split { out, err } => {
                if channel.is_stderr() {
                    err.push_line(line);
                } else {
                    out.push_line(line);
                }
            }
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::console()
    }
}
