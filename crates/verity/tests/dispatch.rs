mod common;

use std::cell::Cell;
use std::fmt;

use common::{run, Recorder};
use verity::{
    cmp, evaluate, ArgsFilter, CallSite, Comparison, ComparisonResult, Escalation, Message,
    TestingT,
};

#[track_caller]
fn check_equal<X, Y>(t: &mut Recorder, x: X, y: Y) -> bool
where
    X: PartialEq<Y> + fmt::Debug,
    Y: fmt::Debug,
{
    evaluate(
        t,
        Escalation::Check,
        ArgsFilter::ExcludeFirst,
        &CallSite::capture(),
        cmp::equal(x, y),
        Message::Empty,
    )
}

#[test]
fn true_bool_succeeds_without_logging() {
    let outcome = run(|t| {
        assert!(verity::check(t, true));
    });

    assert!(!outcome.halted);
    assert!(outcome.recorder.logs.is_empty());
    assert_eq!(outcome.recorder.fails, 0);
    assert_eq!(outcome.recorder.fail_nows, 0);
}

#[test]
fn false_bool_assert_logs_expression_and_halts() {
    let total = 10;
    let mut reached = false;
    let outcome = run(|t| {
        verity::assert(t, total != 10);
        reached = true;
    });

    assert!(outcome.halted);
    assert!(!reached);
    insta::assert_snapshot!(outcome.single_log(), @"assertion failed: total != 10 is false");
    assert_eq!(outcome.recorder.fail_nows, 1);
    assert_eq!(outcome.recorder.fails, 0);
}

#[test]
fn false_bool_check_marks_failure_and_continues() {
    let items: Vec<u8> = Vec::new();
    let mut returned = None;
    let outcome = run(|t| {
        let ok = verity::check(t, !items.is_empty());
        returned = Some(ok);
    });

    assert!(!outcome.halted);
    assert_eq!(returned, Some(false));
    assert_eq!(outcome.single_log(), "assertion failed: !items.is_empty() is false");
    assert_eq!(outcome.recorder.fails, 1);
    assert_eq!(outcome.recorder.fail_nows, 0);
}

#[test]
fn legacy_failure_logs_message_verbatim() {
    let outcome = run(|t| {
        let ok = verity::check(t, Comparison::legacy(|| (false, "legacy says no".to_string())));
        assert!(!ok);
    });

    assert_eq!(outcome.single_log(), "assertion failed: legacy says no");
    assert_eq!(outcome.recorder.fails, 1);
}

#[test]
fn legacy_failure_never_reads_source() {
    let site = CallSite::new("missing/legacy.rs", 1, 1);
    let outcome = run(|t| {
        let compare = Comparison::legacy(|| (false, "values differ".to_string()));
        evaluate(
            t,
            Escalation::Check,
            ArgsFilter::FromComparison,
            &site,
            compare,
            Message::Empty,
        );
    });

    assert_eq!(outcome.single_log(), "assertion failed: values differ");
}

#[test]
fn legacy_success_is_silent() {
    let outcome = run(|t| {
        assert!(verity::check(t, Comparison::legacy(|| (true, "unused".to_string()))));
    });

    assert!(outcome.recorder.logs.is_empty());
}

#[test]
fn structured_failure_logs_message_verbatim() {
    let outcome = run(|t| {
        verity::assert(t, ComparisonResult::failure("expected 3 items, got 1"));
    });

    assert!(outcome.halted);
    assert_eq!(outcome.single_log(), "assertion failed: expected 3 items, got 1");
}

#[test]
fn structured_success_is_silent() {
    let outcome = run(|t| {
        assert!(verity::check(t, ComparisonResult::success()));
        assert!(verity::check(t, cmp::equal("a", "a")));
    });

    assert!(outcome.recorder.logs.is_empty());
    assert_eq!(outcome.recorder.fails, 0);
}

#[test]
fn structured_comparisons_are_evaluated_once() {
    let calls = Cell::new(0);
    let outcome = run(|t| {
        verity::check(
            t,
            Comparison::structured(|| {
                calls.set(calls.get() + 1);
                ComparisonResult::failure("counted")
            }),
        );
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(outcome.recorder.fails, 1);
}

#[test]
fn empty_failure_message_is_replaced() {
    let outcome = run(|t| {
        verity::check(t, ComparisonResult::failure(""));
    });

    assert_eq!(outcome.single_log(), "assertion failed: comparison failed");
}

#[test]
fn comparison_arguments_are_named_in_equal_failures() {
    let count = 2;
    let outcome = run(|t| {
        verity::check(t, cmp::equal(count, 3));
    });

    assert_eq!(outcome.single_log(), "assertion failed: 2 (count) != 3");
}

#[test]
fn check_equal_reports_both_literals() {
    let mut returned = true;
    let outcome = run(|t| {
        returned = check_equal(t, 1, 2);
    });

    assert!(!returned);
    assert!(!outcome.halted);
    let log = outcome.single_log();
    assert!(log.contains('1') && log.contains('2'), "{log}");
    assert_eq!(log, "assertion failed: 1 != 2");
    assert_eq!(outcome.recorder.fails, 1);
}

#[test]
fn missing_source_still_reports_failure() {
    let site = CallSite::new("missing/assertions.rs", 4, 9);
    let outcome = run(|t| {
        let ok = evaluate(
            t,
            Escalation::Check,
            ArgsFilter::FromComparison,
            &site,
            Comparison::Bool(false),
            Message::Empty,
        );
        assert!(!ok);
    });

    let log = outcome.single_log();
    assert!(log.starts_with("failed to read source file missing/assertions.rs"), "{log}");
    assert!(log.ends_with("\nassertion failed: condition is false"), "{log}");
    assert_eq!(outcome.recorder.fails, 1);
}

#[test]
fn missing_source_falls_back_to_hint() {
    let site = CallSite::new("missing/assertions.rs", 4, 9).with_source_hint("queue.is_empty()");
    let outcome = run(|t| {
        evaluate(
            t,
            Escalation::Assert,
            ArgsFilter::FromComparison,
            &site,
            Comparison::Bool(false),
            Message::from("while draining"),
        );
    });

    assert!(outcome.halted);
    assert!(outcome
        .single_log()
        .ends_with("assertion failed: queue.is_empty() is false while draining"));
}

#[test]
fn missing_source_degrades_equal_message_to_values() {
    let site = CallSite::new("missing/assertions.rs", 4, 9);
    let outcome = run(|t| {
        evaluate(
            t,
            Escalation::Check,
            ArgsFilter::ExcludeFirst,
            &site,
            cmp::equal(Some(1), None::<i32>),
            Message::Empty,
        );
    });

    assert_eq!(outcome.single_log(), "assertion failed: Some(1) != None");
}

#[test]
fn works_through_trait_objects() {
    let outcome = run(|recorder| {
        let t: &mut dyn TestingT = recorder;
        let ok = verity::check(t, 1 + 1 == 3);
        assert!(!ok);
    });

    assert_eq!(outcome.single_log(), "assertion failed: 1 + 1 == 3 is false");
}
