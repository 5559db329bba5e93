//! Comparison values accepted by the assertion entry points.

use std::fmt;

const EMPTY_FAILURE_MESSAGE: &str = "comparison failed";

/// Something an assertion can evaluate.
///
/// Evaluated exactly once per assertion call.
pub enum Comparison<'a> {
    /// A plain condition. On failure the message names the source expression.
    Bool(bool),
    /// A closure returning a success flag and a failure message.
    ///
    /// Kept for comparisons written before [`ComparisonResult`] existed; new
    /// comparisons should use [`Comparison::Structured`].
    Legacy(Box<dyn FnOnce() -> (bool, String) + 'a>),
    /// A closure returning a [`ComparisonResult`].
    Structured(Box<dyn FnOnce() -> ComparisonResult + 'a>),
}

impl<'a> Comparison<'a> {
    pub fn legacy<F>(compare: F) -> Self
    where
        F: FnOnce() -> (bool, String) + 'a,
    {
        Self::Legacy(Box::new(compare))
    }

    pub fn structured<F>(compare: F) -> Self
    where
        F: FnOnce() -> ComparisonResult + 'a,
    {
        Self::Structured(Box::new(compare))
    }
}

impl From<bool> for Comparison<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<ComparisonResult> for Comparison<'_> {
    fn from(result: ComparisonResult) -> Self {
        Self::structured(move || result)
    }
}

impl fmt::Debug for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Legacy(_) => f.write_str("Legacy(..)"),
            Self::Structured(_) => f.write_str("Structured(..)"),
        }
    }
}

/// Outcome of a structured comparison.
#[derive(Debug)]
pub enum ComparisonResult {
    Success,
    Failure(FailureMessage),
}

impl ComparisonResult {
    #[must_use]
    pub const fn success() -> Self {
        Self::Success
    }

    /// A failure with a fixed message. An empty message is replaced by a
    /// generic one.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(FailureMessage::Plain(non_empty(message.into())))
    }

    /// A failure whose message is built from the source text of the
    /// comparison's arguments, as selected by the entry point's
    /// [`ArgsFilter`](crate::ArgsFilter).
    ///
    /// `render` receives an empty slice when the source could not be
    /// recovered and must still produce a useful message.
    pub fn failure_with_args<F>(render: F) -> Self
    where
        F: FnOnce(&[String]) -> String + 'static,
    {
        Self::Failure(FailureMessage::WithArgs(Box::new(render)))
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Failure message of a structured comparison.
pub enum FailureMessage {
    Plain(String),
    WithArgs(Box<dyn FnOnce(&[String]) -> String>),
}

impl FailureMessage {
    #[must_use]
    pub const fn needs_args(&self) -> bool {
        matches!(self, Self::WithArgs(_))
    }

    /// Produces the message text; never empty.
    #[must_use]
    pub fn render(self, args: &[String]) -> String {
        match self {
            Self::Plain(message) => message,
            Self::WithArgs(render) => non_empty(render(args)),
        }
    }
}

impl fmt::Debug for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(message) => f.debug_tuple("Plain").field(message).finish(),
            Self::WithArgs(_) => f.write_str("WithArgs(..)"),
        }
    }
}

fn non_empty(message: String) -> String {
    if message.is_empty() {
        EMPTY_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}
