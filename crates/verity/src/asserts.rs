//! Public assertion entry points.
//!
//! Each captures its call site once and hands it to [`evaluate`].

use std::fmt;

use verity_source::{ArgsFilter, CallSite};

use crate::cmp;
use crate::comparison::Comparison;
use crate::dispatch::{evaluate, Escalation};
use crate::message::Message;
use crate::testing::TestingT;

/// Evaluates `comparison` and stops the test if it fails.
///
/// A failed `bool` is reported with the source text of the expression:
/// `assert(t, total != 10)` logs `assertion failed: total != 10 is false`.
#[track_caller]
pub fn assert<'a, T>(t: &mut T, comparison: impl Into<Comparison<'a>>)
where
    T: TestingT + ?Sized,
{
    evaluate(
        t,
        Escalation::Assert,
        ArgsFilter::FromComparison,
        &CallSite::capture(),
        comparison.into(),
        Message::Empty,
    );
}

/// [`assert`] with extra text appended to the failure message.
#[track_caller]
pub fn assert_with<'a, 'm, T>(
    t: &mut T,
    comparison: impl Into<Comparison<'a>>,
    message: impl Into<Message<'m>>,
) where
    T: TestingT + ?Sized,
{
    evaluate(
        t,
        Escalation::Assert,
        ArgsFilter::FromComparison,
        &CallSite::capture(),
        comparison.into(),
        message.into(),
    );
}

/// Evaluates `comparison`, marks the test failed if it fails, and returns
/// whether it succeeded. The test keeps running either way.
#[track_caller]
pub fn check<'a, T>(t: &mut T, comparison: impl Into<Comparison<'a>>) -> bool
where
    T: TestingT + ?Sized,
{
    evaluate(
        t,
        Escalation::Check,
        ArgsFilter::FromComparison,
        &CallSite::capture(),
        comparison.into(),
        Message::Empty,
    )
}

#[track_caller]
pub fn check_with<'a, 'm, T>(
    t: &mut T,
    comparison: impl Into<Comparison<'a>>,
    message: impl Into<Message<'m>>,
) -> bool
where
    T: TestingT + ?Sized,
{
    evaluate(
        t,
        Escalation::Check,
        ArgsFilter::FromComparison,
        &CallSite::capture(),
        comparison.into(),
        message.into(),
    )
}

/// Stops the test unless `x == y`. Same as `assert(t, cmp::equal(x, y))`.
#[track_caller]
pub fn equal<T, X, Y>(t: &mut T, x: X, y: Y)
where
    T: TestingT + ?Sized,
    X: PartialEq<Y> + fmt::Debug,
    Y: fmt::Debug,
{
    evaluate(
        t,
        Escalation::Assert,
        ArgsFilter::ExcludeFirst,
        &CallSite::capture(),
        cmp::equal(x, y),
        Message::Empty,
    );
}

#[track_caller]
pub fn equal_with<'m, T, X, Y>(t: &mut T, x: X, y: Y, message: impl Into<Message<'m>>)
where
    T: TestingT + ?Sized,
    X: PartialEq<Y> + fmt::Debug,
    Y: fmt::Debug,
{
    evaluate(
        t,
        Escalation::Assert,
        ArgsFilter::ExcludeFirst,
        &CallSite::capture(),
        cmp::equal(x, y),
        message.into(),
    );
}

/// Stops the test if `result` is an error.
#[track_caller]
pub fn nil_error<T, V, E>(t: &mut T, result: Result<V, E>)
where
    T: TestingT + ?Sized,
    E: fmt::Display,
{
    evaluate(
        t,
        Escalation::Assert,
        ArgsFilter::ExcludeFirst,
        &CallSite::capture(),
        cmp::nil_error(result),
        Message::Empty,
    );
}

#[track_caller]
pub fn nil_error_with<'m, T, V, E>(t: &mut T, result: Result<V, E>, message: impl Into<Message<'m>>)
where
    T: TestingT + ?Sized,
    E: fmt::Display,
{
    evaluate(
        t,
        Escalation::Assert,
        ArgsFilter::ExcludeFirst,
        &CallSite::capture(),
        cmp::nil_error(result),
        message.into(),
    );
}
