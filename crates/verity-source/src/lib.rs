//! Call-site source expression recovery.
//!
//! Assertion helpers want to say *what* was asserted, not only that something
//! was false. This crate takes a [`CallSite`] captured with `#[track_caller]`,
//! reads the source file of that call, finds the call expression starting
//! there and renders its arguments back to the text the developer wrote.
//!
//! ```
//! use verity_source::{CallSite, SourceError};
//!
//! #[track_caller]
//! fn described(_condition: bool) -> Result<String, SourceError> {
//!     verity_source::formatted_call_expr_arg(&CallSite::capture(), 0)
//! }
//!
//! let total = 10;
//! // `Ok("total != 10")` when the calling file is readable, an error otherwise.
//! let _ = described(total != 10);
//! ```
//!
//! Recovery is best effort. Every failure is reported as a [`SourceError`] and
//! callers are expected to degrade to a less descriptive message.

mod cache;
mod call_site;
mod config;
mod error;
mod filter;
mod index;
mod recovery;
mod render;

pub use cache::clear_cache;
pub use call_site::CallSite;
pub use config::{RecoveryConfig, RecoveryMode, CACHE_ENV, RECOVERY_ENV};
pub use error::{ConfigError, SourceError};
pub use filter::ArgsFilter;
pub use index::{CallArg, CallExpr, SourceIndex};
pub use recovery::Recovery;

/// Renders argument `position` of the call expression at `site`.
///
/// Uses the process-wide [`RecoveryConfig`].
pub fn formatted_call_expr_arg(site: &CallSite, position: usize) -> Result<String, SourceError> {
    Recovery::global().formatted_call_expr_arg(site, position)
}

/// Returns every argument of the call expression at `site`.
///
/// Uses the process-wide [`RecoveryConfig`].
pub fn call_expr_args(site: &CallSite) -> Result<Vec<CallArg>, SourceError> {
    Recovery::global().call_expr_args(site)
}
