//! Assertions and checks for tests, with failure messages that say what was
//! asserted.
//!
//! [`assert`] and [`check`] both accept a [`Comparison`] and fail the test
//! when it fails. [`assert`] ends the test immediately through
//! [`TestingT::fail_now`]; [`check`] marks the test failed through
//! [`TestingT::fail`], returns the outcome and lets the test continue.
//!
//! ```
//! use verity::{cmp, TestContext};
//!
//! let mut t = TestContext::new();
//! let total = 12;
//! let parsed = "12".parse::<i32>();
//!
//! // booleans
//! verity::assert(&mut t, total != 10);
//!
//! // values and errors
//! verity::equal(&mut t, total, 12);
//! verity::assert(&mut t, cmp::equal(total % 4, 0));
//! verity::nil_error(&mut t, parsed);
//!
//! // extra context, formatted only on failure
//! verity::assert_that!(&mut t, total > 10, "total was {}", total);
//! ```
//!
//! When a `bool` comparison fails, the message is built from the source text
//! of the argument: `verity::assert(t, total != 10)` logs
//! `assertion failed: total != 10 is false`. The source is read from the test
//! file at failure time (see the `verity-source` crate); when it cannot be
//! read, the raw error is logged and the message falls back to the
//! `stringify!` text captured by the macros, or to a generic word.
//!
//! # Comparisons
//!
//! [`cmp`] holds the comparisons the entry points use. Others are plain
//! closures returning a [`ComparisonResult`]:
//!
//! ```
//! use verity::{Comparison, ComparisonResult};
//!
//! fn starts_with<'a>(value: &'a str, prefix: &'a str) -> Comparison<'a> {
//!     Comparison::structured(move || {
//!         if value.starts_with(prefix) {
//!             ComparisonResult::success()
//!         } else {
//!             ComparisonResult::failure(format!("{value:?} does not start with {prefix:?}"))
//!         }
//!     })
//! }
//!
//! let mut t = verity::TestContext::new();
//! verity::assert(&mut t, starts_with("verity", "ver"));
//! ```

mod asserts;
pub mod cmp;
mod comparison;
mod dispatch;
mod macros;
mod message;
mod testing;

pub use asserts::{
    assert, assert_with, check, check_with, equal, equal_with, nil_error, nil_error_with,
};
pub use comparison::{Comparison, ComparisonResult, FailureMessage};
pub use dispatch::{evaluate, Escalation, FAILURE_PREFIX};
pub use message::{with_custom_message, Message};
pub use testing::{TestContext, TestingT, HALT_MESSAGE};
pub use verity_source::{ArgsFilter, CallSite, SourceError};
