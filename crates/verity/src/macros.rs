/// Like [`assert`](crate::assert()), with optional `format!` arguments that are
/// only formatted when the assertion fails.
///
/// ```
/// let mut t = verity::TestContext::new();
/// let retries = 2;
/// verity::assert_that!(&mut t, retries < 3, "retried {} times", retries);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($t:expr, $comparison:expr $(,)?) => {{
        $crate::evaluate(
            $t,
            $crate::Escalation::Assert,
            $crate::ArgsFilter::FromComparison,
            &$crate::CallSite::capture().with_source_hint(::std::stringify!($comparison)),
            $crate::Comparison::from($comparison),
            $crate::Message::Empty,
        );
    }};
    ($t:expr, $comparison:expr, $($arg:tt)+) => {{
        $crate::evaluate(
            $t,
            $crate::Escalation::Assert,
            $crate::ArgsFilter::FromComparison,
            &$crate::CallSite::capture().with_source_hint(::std::stringify!($comparison)),
            $crate::Comparison::from($comparison),
            $crate::Message::lazy(|| ::std::format!($($arg)+)),
        );
    }};
}

/// Like [`check`](crate::check()), with lazily formatted extra message
/// arguments. Evaluates to `true` when the comparison succeeded.
#[macro_export]
macro_rules! check_that {
    ($t:expr, $comparison:expr $(,)?) => {
        $crate::evaluate(
            $t,
            $crate::Escalation::Check,
            $crate::ArgsFilter::FromComparison,
            &$crate::CallSite::capture().with_source_hint(::std::stringify!($comparison)),
            $crate::Comparison::from($comparison),
            $crate::Message::Empty,
        )
    };
    ($t:expr, $comparison:expr, $($arg:tt)+) => {
        $crate::evaluate(
            $t,
            $crate::Escalation::Check,
            $crate::ArgsFilter::FromComparison,
            &$crate::CallSite::capture().with_source_hint(::std::stringify!($comparison)),
            $crate::Comparison::from($comparison),
            $crate::Message::lazy(|| ::std::format!($($arg)+)),
        )
    };
}

/// Like [`equal`](crate::equal()), with lazily formatted extra message arguments.
#[macro_export]
macro_rules! assert_equal {
    ($t:expr, $x:expr, $y:expr $(,)?) => {{
        $crate::evaluate(
            $t,
            $crate::Escalation::Assert,
            $crate::ArgsFilter::ExcludeFirst,
            &$crate::CallSite::capture(),
            $crate::cmp::equal($x, $y),
            $crate::Message::Empty,
        );
    }};
    ($t:expr, $x:expr, $y:expr, $($arg:tt)+) => {{
        $crate::evaluate(
            $t,
            $crate::Escalation::Assert,
            $crate::ArgsFilter::ExcludeFirst,
            &$crate::CallSite::capture(),
            $crate::cmp::equal($x, $y),
            $crate::Message::lazy(|| ::std::format!($($arg)+)),
        );
    }};
}

/// Like [`nil_error`](crate::nil_error()), with lazily formatted extra message
/// arguments.
#[macro_export]
macro_rules! assert_nil_error {
    ($t:expr, $result:expr $(,)?) => {{
        $crate::evaluate(
            $t,
            $crate::Escalation::Assert,
            $crate::ArgsFilter::ExcludeFirst,
            &$crate::CallSite::capture(),
            $crate::cmp::nil_error($result),
            $crate::Message::Empty,
        );
    }};
    ($t:expr, $result:expr, $($arg:tt)+) => {{
        $crate::evaluate(
            $t,
            $crate::Escalation::Assert,
            $crate::ArgsFilter::ExcludeFirst,
            &$crate::CallSite::capture(),
            $crate::cmp::nil_error($result),
            $crate::Message::lazy(|| ::std::format!($($arg)+)),
        );
    }};
}
