use std::fmt;
use std::panic::Location;

/// Source position of an assertion call.
///
/// Captured once at the public entry point with `#[track_caller]` and handed
/// down by value, so internal layering never shifts the reported position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
    source_hint: Option<&'static str>,
}

impl CallSite {
    /// Captures the location of the caller.
    ///
    /// Inside a `#[track_caller]` function this is the location of the
    /// outermost caller that is not itself `#[track_caller]`; inside a macro
    /// expansion it is the macro invocation site.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    /// Builds a call site from a file path, 1-based line and 1-based column.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self {
            file,
            line,
            column,
            source_hint: None,
        }
    }

    /// Attaches compile-time text of the asserted expression, used when the
    /// source file cannot be read.
    #[must_use]
    pub const fn with_source_hint(mut self, hint: &'static str) -> Self {
        self.source_hint = Some(hint);
        self
    }

    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    #[must_use]
    pub const fn source_hint(&self) -> Option<&'static str> {
        self.source_hint
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
