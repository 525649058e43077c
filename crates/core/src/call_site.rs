use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// The source location of the code that issued a log call.
///
/// Locations are captured from [`std::panic::Location`] at `#[track_caller]`
/// entry points, so the stored path, line, and column always describe the
/// caller of the public API rather than any internal helper. A location can
/// also be reconstructed from its rendered `<path>:<line>:<column>` form via
/// [`FromStr`], which strips exactly the last two colon-delimited segments so
/// paths containing colons (Windows drive letters, unusual directory names)
/// survive the round trip.
///
/// # Examples
///
/// ```
/// use jot_core::call_site::CallSite;
///
/// let site: CallSite = r"C:\repo\src\main.rs:10:5".parse().unwrap();
/// assert_eq!(site.path(), r"C:\repo\src\main.rs");
/// assert_eq!(site.line(), 10);
/// assert_eq!(site.column(), 5);
/// assert_eq!(site.to_string(), r"C:\repo\src\main.rs:10:5");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    path: String,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Builds a call site from its parts, normalising the path.
    ///
    /// Normalisation strips a leading `file://` scheme so URI-flavoured
    /// script paths render as plain filesystem paths.
    #[must_use]
    pub fn from_parts<P: Into<String>>(path: P, line: u32, column: u32) -> Self {
        let path = path.into();
        let path = if let Some(stripped) = path.strip_prefix("file://") {
            stripped.to_owned()
        } else {
            path
        };
        Self { path, line, column }
    }

    /// Builds a call site from a captured [`Location`].
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::from_parts(location.file(), location.line(), location.column())
    }

    /// The (possibly relativised) source path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The 1-based line of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based column of the call.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns the call site with its path relativised to `base`.
    ///
    /// Paths under `base` become relative; anything else, including paths on
    /// another root entirely, is returned unchanged. Line and column are
    /// never affected. The comparison is lexical; no filesystem access
    /// happens here.
    #[must_use]
    pub fn relative_to(&self, base: &Path) -> Self {
        match Path::new(&self.path).strip_prefix(base) {
            Ok(stripped) if !stripped.as_os_str().is_empty() => Self {
                path: stripped.display().to_string(),
                line: self.line,
                column: self.column,
            },
            _ => self.clone(),
        }
    }

    /// Resolves the location reported for a log call.
    ///
    /// Shorthand for [`CallSite::from_location`] followed by
    /// [`CallSite::screened`].
    #[must_use]
    pub fn resolve(location: &Location<'_>, ignore: &[String], base: Option<&Path>) -> Resolution {
        Self::from_location(location).screened(ignore, base)
    }

    /// Screens the site against an ignore list, then relativises it.
    ///
    /// The path is first checked against `ignore`: when any needle occurs
    /// as a substring of the path the result is [`Resolution::Suppressed`]
    /// and no location is reported for the call. An empty needle matches
    /// every path. Otherwise the site is relativised to `base` when one is
    /// configured.
    #[must_use]
    pub fn screened(self, ignore: &[String], base: Option<&Path>) -> Resolution {
        if ignore.iter().any(|needle| self.path.contains(needle.as_str())) {
            return Resolution::Suppressed;
        }
        match base {
            Some(base) => Resolution::Resolved(self.relative_to(base)),
            None => Resolution::Resolved(self),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}

/// Outcome of resolving the call site for one log call.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Resolution {
    /// The caller's location, relativised when a base path is configured.
    Resolved(CallSite),
    /// The caller's path matched the ignore list; no location is reported.
    Suppressed,
}

impl Resolution {
    /// Returns the resolved call site, if any.
    #[must_use]
    pub fn resolved(self) -> Option<CallSite> {
        match self {
            Self::Resolved(site) => Some(site),
            Self::Suppressed => None,
        }
    }

    /// Reports whether the location was suppressed by the ignore list.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

/// Error returned when parsing a [`CallSite`] from a string fails.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseCallSiteError {
    /// The string contains no colon-delimited column segment.
    #[error("call site is missing the column segment")]
    MissingColumn,
    /// The string contains no colon-delimited line segment.
    #[error("call site is missing the line segment")]
    MissingLine,
    /// The line segment is not an unsigned integer.
    #[error("call site line segment is not a number: {0}")]
    InvalidLine(std::num::ParseIntError),
    /// The column segment is not an unsigned integer.
    #[error("call site column segment is not a number: {0}")]
    InvalidColumn(std::num::ParseIntError),
    /// The path segment is empty.
    #[error("call site path segment is empty")]
    EmptyPath,
}

impl FromStr for CallSite {
    type Err = ParseCallSiteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (rest, column) = input
            .rsplit_once(':')
            .ok_or(ParseCallSiteError::MissingColumn)?;
        let column: u32 = column.parse().map_err(ParseCallSiteError::InvalidColumn)?;
        let (path, line) = rest.rsplit_once(':').ok_or(ParseCallSiteError::MissingLine)?;
        let line: u32 = line.parse().map_err(ParseCallSiteError::InvalidLine)?;
        if path.is_empty() {
            return Err(ParseCallSiteError::EmptyPath);
        }
        Ok(Self::from_parts(path, line, column))
    }
}
