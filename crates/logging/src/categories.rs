//! crates/logging/src/categories.rs
//!
//! Per-category gating for `debug` severity messages.
//!
//! # Design
//!
//! Categories are free-form strings mapped to an explicit
//! [`CategoryState`]. The [`WILDCARD`] entry sets the default for
//! categories without an entry of their own, and a category's own
//! `Enabled` entry always beats a disabled wildcard. Entries live in a
//! `BTreeMap` so snapshots come back in a stable order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category name that stands for "every category without its own entry".
pub const WILDCARD: &str = "*";

/// Explicit visibility of one debug category.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryState {
    /// Messages for the category are shown.
    Enabled,
    /// Messages for the category are dropped.
    Disabled,
}

impl CategoryState {
    /// Returns the lowercase token for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for CategoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`CategoryState`] from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseCategoryStateError {
    _private: (),
}

impl fmt::Display for ParseCategoryStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown category state, expected `enabled` or `disabled`")
    }
}

impl std::error::Error for ParseCategoryStateError {}

impl FromStr for CategoryState {
    type Err = ParseCategoryStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            _ => Err(ParseCategoryStateError { _private: () }),
        }
    }
}

/// Operation names accepted by the string-driven category front end.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CategoryOp {
    /// Mark a category [`CategoryState::Enabled`].
    Enable,
    /// Mark a category [`CategoryState::Disabled`].
    Disable,
    /// Drop a category's entry, reverting it to the wildcard default.
    Delete,
    /// Look up one category's explicit state.
    Get,
    /// Look up every explicit entry.
    GetAll,
}

impl CategoryOp {
    /// Returns the camelCase token for this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Delete => "delete",
            Self::Get => "get",
            Self::GetAll => "getAll",
        }
    }
}

impl fmt::Display for CategoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`CategoryOp`] from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseCategoryOpError {
    _private: (),
}

impl fmt::Display for ParseCategoryOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "unknown category operation, expected one of \
             `enable`, `disable`, `delete`, `get`, `getAll`",
        )
    }
}

impl std::error::Error for ParseCategoryOpError {}

impl FromStr for CategoryOp {
    type Err = ParseCategoryOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enable" => Ok(Self::Enable),
            "disable" => Ok(Self::Disable),
            "delete" => Ok(Self::Delete),
            "get" => Ok(Self::Get),
            "getAll" => Ok(Self::GetAll),
            _ => Err(ParseCategoryOpError { _private: () }),
        }
    }
}

/// The set of explicit category entries held by a logger.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DebugCategories {
    entries: BTreeMap<String, CategoryState>,
}

impl DebugCategories {
    /// Creates an empty set. With no entries, every category is shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `category` enabled.
    pub fn enable<N: Into<String>>(&mut self, category: N) {
        self.entries.insert(category.into(), CategoryState::Enabled);
    }

    /// Marks `category` disabled.
    pub fn disable<N: Into<String>>(&mut self, category: N) {
        self.entries.insert(category.into(), CategoryState::Disabled);
    }

    /// Removes the entry for `category`, reverting it to the wildcard
    /// default.
    pub fn remove(&mut self, category: &str) {
        self.entries.remove(category);
    }

    /// Returns the explicit state recorded for `category`, if any.
    #[must_use]
    pub fn state(&self, category: &str) -> Option<CategoryState> {
        self.entries.get(category).copied()
    }

    /// Returns a copy of every explicit entry, sorted by category name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, CategoryState> {
        self.entries.clone()
    }

    /// Decides whether a `debug` message for `category` is shown.
    ///
    /// A category starts shown. A disabled wildcard or a disabled entry
    /// for the category hides it; the category's own enabled entry wins
    /// over both.
    #[must_use]
    pub fn is_shown(&self, category: &str) -> bool {
        let mut shown = true;
        if self.state(WILDCARD) == Some(CategoryState::Disabled)
            || self.state(category) == Some(CategoryState::Disabled)
        {
            shown = false;
        }
        if self.state(category) == Some(CategoryState::Enabled) {
            shown = true;
        }
        shown
    }
}
