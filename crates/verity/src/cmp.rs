//! Comparisons used by the convenience entry points.
//!
//! Any closure returning a [`ComparisonResult`] is a comparison; these are the
//! two the crate itself relies on.

use std::fmt;

use crate::comparison::{Comparison, ComparisonResult};

/// Succeeds when `x == y`.
///
/// The failure message shows both values, each followed by the source text
/// of its argument when that differs from the value (`2 (count) != 3`).
pub fn equal<'a, X, Y>(x: X, y: Y) -> Comparison<'a>
where
    X: PartialEq<Y> + fmt::Debug + 'a,
    Y: fmt::Debug + 'a,
{
    Comparison::structured(move || {
        if x == y {
            return ComparisonResult::success();
        }
        let x = format!("{x:?}");
        let y = format!("{y:?}");
        ComparisonResult::failure_with_args(move |args| match args {
            [x_source, y_source, ..] => {
                format!("{} != {}", annotate(&x, x_source), annotate(&y, y_source))
            }
            _ => format!("{x} != {y}"),
        })
    })
}

/// Succeeds when `result` is `Ok`.
pub fn nil_error<'a, T, E>(result: Result<T, E>) -> Comparison<'a>
where
    T: 'a,
    E: fmt::Display + 'a,
{
    Comparison::structured(move || match result {
        Ok(_) => ComparisonResult::success(),
        Err(err) => ComparisonResult::failure(format!("error is not nil: {err}")),
    })
}

fn annotate(value: &str, source: &str) -> String {
    if value == source {
        value.to_string()
    } else {
        format!("{value} ({source})")
    }
}
