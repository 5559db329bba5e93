//! Comparison dispatch: turns a comparison into a reported outcome.

use tracing::debug;
use verity_source::{ArgsFilter, CallSite, Recovery, SourceError};

use crate::comparison::{Comparison, ComparisonResult, FailureMessage};
use crate::message::{with_custom_message, Message};
use crate::testing::TestingT;

pub const FAILURE_PREFIX: &str = "assertion failed: ";

/// Position of the comparison among the assertion call's arguments; the
/// test context comes first.
const COMPARISON_ARG_POSITION: usize = 1;
const FALLBACK_EXPRESSION: &str = "condition";

/// What happens to the test after a failed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Stop the test immediately through [`TestingT::fail_now`].
    Assert,
    /// Record the failure through [`TestingT::fail`] and keep going.
    Check,
}

/// Evaluates `comparison` and reports a failure to `t`.
///
/// Returns `true` when the comparison succeeded. On failure the message is
/// logged exactly once and `escalation` is applied, so with
/// [`Escalation::Assert`] this never returns `false`.
///
/// `site` is where the assertion was written; it is only read when a message
/// needs source text. Source recovery problems never fail the evaluation.
pub fn evaluate<T>(
    t: &mut T,
    escalation: Escalation,
    filter: ArgsFilter,
    site: &CallSite,
    comparison: Comparison<'_>,
    message: Message<'_>,
) -> bool
where
    T: TestingT + ?Sized,
{
    let (base, recovery_error) = match comparison {
        Comparison::Bool(true) => return true,
        Comparison::Bool(false) => bool_failure(site),
        Comparison::Legacy(compare) => {
            let (success, failure) = compare();
            if success {
                return true;
            }
            (format!("{FAILURE_PREFIX}{failure}"), None)
        }
        Comparison::Structured(compare) => match compare() {
            ComparisonResult::Success => return true,
            ComparisonResult::Failure(failure) => (
                format!("{FAILURE_PREFIX}{}", render_failure(failure, filter, site)),
                None,
            ),
        },
    };

    let mut text = with_custom_message(&base, message);
    if let Some(err) = recovery_error {
        text = format!("{err}\n{text}");
    }
    debug!("assertion failed site={site} escalation={escalation:?}");
    t.log(&text);

    match escalation {
        Escalation::Assert => t.fail_now(),
        Escalation::Check => {
            t.fail();
            false
        }
    }
}

fn bool_failure(site: &CallSite) -> (String, Option<SourceError>) {
    match Recovery::global().formatted_call_expr_arg(site, COMPARISON_ARG_POSITION) {
        Ok(source) => (format!("{FAILURE_PREFIX}{source} is false"), None),
        Err(err) => {
            debug!("source recovery failed site={site}: {err}");
            let source = site.source_hint().unwrap_or(FALLBACK_EXPRESSION);
            let reported = (!err.is_disabled()).then_some(err);
            (format!("{FAILURE_PREFIX}{source} is false"), reported)
        }
    }
}

fn render_failure(failure: FailureMessage, filter: ArgsFilter, site: &CallSite) -> String {
    if !failure.needs_args() {
        return failure.render(&[]);
    }
    let args = match Recovery::global().call_expr_args(site) {
        Ok(args) => filter.apply(&args),
        Err(err) => {
            debug!("argument recovery failed site={site}: {err}");
            Vec::new()
        }
    };
    failure.render(&args)
}
