//! crates/logging/src/logger.rs
//!
//! The logger: severity methods, option resolution, category gating,
//! call-site capture, and dispatch to a sink.
//!
//! # Design
//!
//! A [`Logger`] is cheap to construct and safe to share behind a
//! reference; all mutable state sits behind locks so the whole API
//! works through `&self` and chains. Call sites are captured with
//! [`#[track_caller]`](std::panic::Location), so a log call made
//! through any chain of `#[track_caller]` wrappers reports the line
//! of the outermost caller.
//!
//! # Invariants
//!
//! - The disabled gate is checked before any argument is rendered.
//! - Every emitted line goes to the channel of its severity in one
//!   `write_line` call; lines from concurrent loggers never interleave
//!   mid-line.
//! - Category operation warnings bypass the disabled gate and carry no
//!   styling or call-site suffix.

use std::collections::BTreeMap;
use std::env;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use jot_core::argument::Argument;
use jot_core::call_site::CallSite;
use jot_core::severity::{Channel, RenderMode, Severity};
use jot_core::style::Style;
use serde_json::Value;

use crate::categories::{CategoryOp, CategoryState, DebugCategories};
use crate::options::{OptionStore, Scope, SharedOptions, is_truthy, keys};
use crate::sink::Sink;

/// Environment variable consulted for the device name prefix.
///
/// When set and non-empty at construction time, every line the logger
/// emits starts with a muted `[<name>] ` prefix.
pub const DEVICE_NAME_VAR: &str = "JOT_DEVICE_NAME";

/// A console logger with per-severity styling and channel routing.
///
/// See the [module docs](self) for the dispatch pipeline.
#[derive(Debug)]
pub struct Logger {
    options: RwLock<OptionStore>,
    shared: SharedOptions,
    categories: RwLock<DebugCategories>,
    sink: RwLock<Sink>,
    device_name: Option<String>,
}

impl Logger {
    /// Creates a logger over the process-wide shared option store.
    ///
    /// The device name is read from [`DEVICE_NAME_VAR`] once, here.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shared(SharedOptions::process_default())
    }

    /// Creates a logger over an explicit shared option store.
    #[must_use]
    pub fn with_shared(shared: SharedOptions) -> Self {
        Self::with_parts(shared, device_name_from_env())
    }

    /// Creates a logger with every input explicit. No environment or
    /// process-global state is consulted.
    ///
    /// The instance store is seeded from `shared`: a truthy shared
    /// `disabled` is copied in, `basePath` falls back to the current
    /// working directory, and `showLogLine` falls back to `true`.
    #[must_use]
    pub fn with_parts(shared: SharedOptions, device_name: Option<String>) -> Self {
        let options = RwLock::new(seeded_options(&shared));
        Self {
            options,
            shared,
            categories: RwLock::new(DebugCategories::new()),
            sink: RwLock::new(Sink::default()),
            device_name,
        }
    }

    /// Returns the device name this logger prefixes lines with, if any.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Returns a handle to the shared option store this logger reads.
    #[must_use]
    pub fn shared_options(&self) -> &SharedOptions {
        &self.shared
    }

    /// Replaces the output sink.
    pub fn set_sink(&self, sink: Sink) -> &Self {
        *self.sink_write() = sink;
        self
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// Stores an option in the chosen scope.
    pub fn set_option<V: Into<Value>>(&self, name: &str, value: V, scope: Scope) -> &Self {
        let value = value.into();
        match scope {
            Scope::Instance => self.options_write().set(name, value),
            Scope::Global => self.shared.set(name, value),
        }
        self
    }

    /// Returns the raw option from the chosen scope, without fallback.
    #[must_use]
    pub fn get_option(&self, name: &str, scope: Scope) -> Option<Value> {
        match scope {
            Scope::Instance => self.options_read().get(name).cloned(),
            Scope::Global => self.shared.get(name),
        }
    }

    /// Removes an option from the chosen scope.
    pub fn remove_option(&self, name: &str, scope: Scope) -> &Self {
        match scope {
            Scope::Instance => self.options_write().remove(name),
            Scope::Global => self.shared.remove(name),
        }
        self
    }

    /// Resolves an option with instance-over-shared fallback.
    ///
    /// A truthy instance value wins; otherwise the shared value is
    /// returned as stored. See [`OptionStore::computed`].
    #[must_use]
    pub fn computed_option(&self, name: &str) -> Option<Value> {
        self.options_read().computed(&self.shared, name)
    }

    /// Silences this logger by setting the instance `disabled` option.
    pub fn disable(&self) -> &Self {
        self.set_option(keys::DISABLED, true, Scope::Instance)
    }

    /// Alias for [`Logger::disable`].
    pub fn off(&self) -> &Self {
        self.disable()
    }

    /// Clears the instance `disabled` option by setting it falsy.
    ///
    /// A truthy shared `disabled` still silences the logger afterwards;
    /// the falsy instance value defers to the shared store.
    pub fn enable(&self) -> &Self {
        self.set_option(keys::DISABLED, false, Scope::Instance)
    }

    /// Alias for [`Logger::enable`].
    pub fn on(&self) -> &Self {
        self.enable()
    }

    // ------------------------------------------------------------------
    // Debug categories
    // ------------------------------------------------------------------

    /// Marks a debug category enabled.
    pub fn enable_category(&self, category: &str) -> &Self {
        self.categories_write().enable(category);
        self
    }

    /// Marks a debug category disabled.
    pub fn disable_category(&self, category: &str) -> &Self {
        self.categories_write().disable(category);
        self
    }

    /// Removes a debug category's entry, reverting it to the wildcard
    /// default.
    pub fn remove_category(&self, category: &str) -> &Self {
        self.categories_write().remove(category);
        self
    }

    /// Returns the explicit state recorded for a category, if any.
    #[must_use]
    pub fn category_state(&self, category: &str) -> Option<CategoryState> {
        self.categories_read().state(category)
    }

    /// Returns a copy of every explicit category entry, sorted by name.
    #[must_use]
    pub fn category_states(&self) -> BTreeMap<String, CategoryState> {
        self.categories_read().snapshot()
    }

    /// String-driven front end over the category operations.
    ///
    /// `operation` is one of `enable`, `disable`, `delete`, `get`, or
    /// `getAll`. Unknown operations, and empty categories for anything
    /// but `getAll`, write a plain warning to stderr and change
    /// nothing. `get` and `getAll` are accepted for compatibility and
    /// change nothing; use [`Logger::category_state`] and
    /// [`Logger::category_states`] to read entries back.
    pub fn debug_category_operation(&self, operation: &str, category: &str) -> &Self {
        let Ok(op) = operation.parse::<CategoryOp>() else {
            self.operation_warning(&format!(
                "Warning: unexpected operation `{operation}` for debug_category_operation"
            ));
            return self;
        };
        if category.is_empty() && op != CategoryOp::GetAll {
            self.operation_warning(&format!(
                "Warning: unexpected category for debug_category_operation `{op}`"
            ));
            return self;
        }
        match op {
            CategoryOp::Enable => {
                self.categories_write().enable(category);
            }
            CategoryOp::Disable => {
                self.categories_write().disable(category);
            }
            CategoryOp::Delete => {
                self.categories_write().remove(category);
            }
            CategoryOp::Get | CategoryOp::GetAll => {}
        }
        self
    }

    // ------------------------------------------------------------------
    // Severity methods
    // ------------------------------------------------------------------

    /// Logs `message` in red, to stderr.
    #[track_caller]
    pub fn error(&self, message: impl Into<Argument>) {
        self.emit(Severity::Error, &[message.into()]);
    }

    /// Logs `message` as a white-on-red heading, to stderr.
    #[track_caller]
    pub fn error_heading(&self, message: impl Into<Argument>) {
        self.emit(Severity::ErrorHeading, &[message.into()]);
    }

    /// Logs an unrecoverable failure, styled like
    /// [`Logger::error_heading`]. Exiting is left to the caller.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<Argument>) {
        self.emit(Severity::Fatal, &[message.into()]);
    }

    /// Logs a known defect in yellow, to stderr.
    #[track_caller]
    pub fn fixme(&self, message: impl Into<Argument>) {
        self.emit(Severity::Fixme, &[message.into()]);
    }

    /// Logs usage guidance in black on white, to stdout.
    #[track_caller]
    pub fn help(&self, message: impl Into<Argument>) {
        self.emit(Severity::Help, &[message.into()]);
    }

    /// Logs `message` in cyan, to stdout.
    #[track_caller]
    pub fn info(&self, message: impl Into<Argument>) {
        self.emit(Severity::Info, &[message.into()]);
    }

    /// Logs `message` unstyled, to stdout.
    #[track_caller]
    pub fn log(&self, message: impl Into<Argument>) {
        self.emit(Severity::Log, &[message.into()]);
    }

    /// Logs `message` in green, to stdout.
    #[track_caller]
    pub fn success(&self, message: impl Into<Argument>) {
        self.emit(Severity::Success, &[message.into()]);
    }

    /// Logs pending work in yellow, to stderr.
    #[track_caller]
    pub fn todo(&self, message: impl Into<Argument>) {
        self.emit(Severity::Todo, &[message.into()]);
    }

    /// Logs diagnostic detail in yellow, to stdout.
    #[track_caller]
    pub fn trace(&self, message: impl Into<Argument>) {
        self.emit(Severity::Trace, &[message.into()]);
    }

    /// Logs `message` in yellow, to stderr.
    #[track_caller]
    pub fn warn(&self, message: impl Into<Argument>) {
        self.emit(Severity::Warn, &[message.into()]);
    }

    /// Logs `message` as a black-on-yellow heading, to stderr.
    #[track_caller]
    pub fn warn_heading(&self, message: impl Into<Argument>) {
        self.emit(Severity::WarnHeading, &[message.into()]);
    }

    /// Logs structured data in magenta, pretty-printed, to stdout.
    #[track_caller]
    pub fn data(&self, message: impl Into<Argument>) {
        self.emit(Severity::Data, &[message.into()]);
    }

    /// Logs JSON in magenta, pretty-printed, to stdout.
    #[track_caller]
    pub fn json(&self, message: impl Into<Argument>) {
        self.emit(Severity::Json, &[message.into()]);
    }

    /// Logs low-importance detail dimmed, pretty-printed, to stdout.
    #[track_caller]
    pub fn verbose(&self, message: impl Into<Argument>) {
        self.emit(Severity::Verbose, &[message.into()]);
    }

    /// Logs `message` under a debug category, in cyan, to stdout.
    ///
    /// The category gate is checked first; a hidden category skips the
    /// call entirely. Shown messages render as `<category>: <message>`.
    #[track_caller]
    pub fn debug(&self, message: impl Into<Argument>, category: &str) {
        let caller = Location::caller();
        if !self.categories_read().is_shown(category) {
            return;
        }
        self.dispatch(Severity::Debug, caller, &[categorised(category, &message.into())]);
    }

    /// Logs `arguments` at an explicit severity.
    ///
    /// Each argument renders to its own segments; segments are styled
    /// individually and joined with single spaces.
    #[track_caller]
    pub fn emit(&self, severity: Severity, arguments: &[Argument]) {
        self.dispatch(severity, Location::caller(), arguments);
    }

    /// Logs `arguments` with an explicit call site instead of the
    /// captured one.
    ///
    /// The site still passes through the `ignoreLogsFor` and `basePath`
    /// screening that captured sites get. `None` omits the suffix.
    pub fn emit_with_site(&self, severity: Severity, site: Option<CallSite>, arguments: &[Argument]) {
        if self.is_disabled() {
            return;
        }
        let site = if self.show_log_line() {
            site.and_then(|site| {
                site.screened(&self.ignore_patterns(), self.base_path().as_deref())
                    .resolved()
            })
        } else {
            None
        };
        self.write_rendered(severity, arguments, site);
    }

    /// Logs under a debug category with an explicit call site.
    pub fn debug_with_site(&self, message: impl Into<Argument>, category: &str, site: Option<CallSite>) {
        if !self.categories_read().is_shown(category) {
            return;
        }
        self.emit_with_site(
            Severity::Debug,
            site,
            &[categorised(category, &message.into())],
        );
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    fn dispatch(&self, severity: Severity, caller: &Location<'_>, arguments: &[Argument]) {
        if self.is_disabled() {
            return;
        }
        let site = if self.show_log_line() {
            CallSite::resolve(caller, &self.ignore_patterns(), self.base_path().as_deref())
                .resolved()
        } else {
            None
        };
        self.write_rendered(severity, arguments, site);
    }

    fn write_rendered(&self, severity: Severity, arguments: &[Argument], site: Option<CallSite>) {
        let style = severity.style();
        let mode = severity.render_mode();
        let mut segments = Vec::new();
        for argument in arguments {
            for segment in argument.to_segments(mode) {
                segments.push(style.apply(&segment));
            }
        }

        let mut line = String::new();
        if let Some(name) = &self.device_name {
            line.push_str(&Style::MUTED.apply(&format!("[{name}] ")));
        }
        line.push_str(&segments.join(" "));
        if let Some(site) = site {
            line.push_str(&Style::MUTED.apply(&format!(" @ {site}")));
        }
        self.sink_read().write_line(severity.channel(), &line);
    }

    fn is_disabled(&self) -> bool {
        self.computed_option(keys::DISABLED)
            .is_some_and(|value| is_truthy(&value))
    }

    fn show_log_line(&self) -> bool {
        self.computed_option(keys::SHOW_LOG_LINE)
            .is_some_and(|value| is_truthy(&value))
    }

    fn base_path(&self) -> Option<PathBuf> {
        self.computed_option(keys::BASE_PATH)
            .filter(|value| is_truthy(value))
            .and_then(|value| value.as_str().map(PathBuf::from))
    }

    fn ignore_patterns(&self) -> Vec<String> {
        match self.computed_option(keys::IGNORE_LOGS_FOR) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(ToOwned::to_owned))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn operation_warning(&self, text: &str) {
        self.sink_read().write_line(Channel::Stderr, text);
    }

    fn options_read(&self) -> RwLockReadGuard<'_, OptionStore> {
        self.options.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn options_write(&self) -> RwLockWriteGuard<'_, OptionStore> {
        self.options.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn categories_read(&self) -> RwLockReadGuard<'_, DebugCategories> {
        self.categories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn categories_write(&self) -> RwLockWriteGuard<'_, DebugCategories> {
        self.categories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn sink_read(&self) -> RwLockReadGuard<'_, Sink> {
        self.sink.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn sink_write(&self) -> RwLockWriteGuard<'_, Sink> {
        self.sink.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn categorised(category: &str, message: &Argument) -> Argument {
    let rendered = message.to_segments(RenderMode::Compact).join(" ");
    Argument::text(format!("{category}: {rendered}"))
}

fn device_name_from_env() -> Option<String> {
    env::var(DEVICE_NAME_VAR).ok().filter(|name| !name.is_empty())
}

fn seeded_options(shared: &SharedOptions) -> OptionStore {
    let mut store = OptionStore::new();

    if let Some(value) = shared.get(keys::DISABLED) {
        if is_truthy(&value) {
            store.set(keys::DISABLED, value);
        }
    }

    match shared.get(keys::BASE_PATH).filter(|value| is_truthy(value)) {
        Some(value) => store.set(keys::BASE_PATH, value),
        None => {
            if let Ok(cwd) = env::current_dir() {
                store.set(keys::BASE_PATH, Value::String(cwd.display().to_string()));
            }
        }
    }

    match shared
        .get(keys::SHOW_LOG_LINE)
        .filter(|value| is_truthy(value))
    {
        Some(value) => store.set(keys::SHOW_LOG_LINE, value),
        None => store.set(keys::SHOW_LOG_LINE, Value::Bool(true)),
    }

    store
}
