//! crates/logging/src/options.rs
//!
//! Option stores and the fallback rule that resolves an option across
//! the instance and shared scopes.
//!
//! # Design
//!
//! Every option is a named [`serde_json::Value`]. A [`Logger`] owns a
//! private [`OptionStore`] and a handle to a [`SharedOptions`] store;
//! the [`OptionStore::computed`] rule decides which of the two wins for
//! a given name. Truthiness ([`is_truthy`]) is deliberately loose so
//! that `"disabled": 1` and `"disabled": true` behave the same.
//!
//! [`Logger`]: crate::logger::Logger

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde_json::Value;

/// Well-known option names.
///
/// Options are an open namespace; these are the names the logger itself
/// consults.
pub mod keys {
    /// Master gate. While truthy, every log call is dropped.
    pub const DISABLED: &str = "disabled";

    /// Controls the ` @ <path>:<line>:<column>` suffix. Seeded to `true`.
    pub const SHOW_LOG_LINE: &str = "showLogLine";

    /// Directory that call-site paths are reported relative to.
    pub const BASE_PATH: &str = "basePath";

    /// Array of substrings; call sites whose path contains one are not
    /// reported.
    pub const IGNORE_LOGS_FOR: &str = "ignoreLogsFor";
}

/// Which store an option operation addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Scope {
    /// The store owned by one logger.
    Instance,
    /// The store shared by every logger built over it.
    Global,
}

/// Loose truthiness over JSON values.
///
/// `null`, `false`, `0`, `-0.0`, and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
///
/// # Examples
///
/// ```
/// use jot_logging::options::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(1)));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(null)));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A single logger's private option store.
#[derive(Clone, Debug, Default)]
pub struct OptionStore {
    values: HashMap<String, Value>,
}

impl OptionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set<N: Into<String>>(&mut self, name: N, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Returns the stored value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Removes `name` from the store.
    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Resolves `name` with instance-over-shared fallback.
    ///
    /// A truthy instance value wins outright. Otherwise the shared
    /// value is returned as stored, without a truthiness check, so a
    /// falsy shared value still surfaces to the caller.
    #[must_use]
    pub fn computed(&self, shared: &SharedOptions, name: &str) -> Option<Value> {
        if let Some(value) = self.get(name) {
            if is_truthy(value) {
                return Some(value.clone());
            }
        }
        shared.get(name)
    }
}

/// An option store shared by every logger holding a handle to it.
///
/// Cloning is cheap and yields a handle to the same underlying map.
/// Lock poisoning is absorbed; a panic in one writer never makes the
/// store unusable for others.
#[derive(Clone, Debug, Default)]
pub struct SharedOptions {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

static PROCESS_DEFAULT: OnceLock<SharedOptions> = OnceLock::new();

impl SharedOptions {
    /// Creates an empty shared store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the process-wide default store.
    ///
    /// Loggers built with [`Logger::new`] all share this store.
    ///
    /// [`Logger::new`]: crate::logger::Logger::new
    #[must_use]
    pub fn process_default() -> Self {
        PROCESS_DEFAULT.get_or_init(Self::new).clone()
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set<N: Into<String>>(&self, name: N, value: Value) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value);
    }

    /// Returns a clone of the stored value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Removes `name` from the store.
    pub fn remove(&self, name: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}
