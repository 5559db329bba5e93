use std::cell::Cell;

use verity::{with_custom_message, Comparison, ComparisonResult, FailureMessage, Message};

#[test]
fn custom_message_is_separated_by_one_space() {
    assert_eq!(
        with_custom_message("assertion failed: x is false", Message::from("retry 2")),
        "assertion failed: x is false retry 2"
    );
}

#[test]
fn empty_parts_leave_the_other_side_untouched() {
    assert_eq!(with_custom_message("base", Message::Empty), "base");
    assert_eq!(with_custom_message("base", Message::from(String::new())), "base");
    assert_eq!(with_custom_message("", Message::from("custom")), "custom");
}

#[test]
fn lazy_message_is_built_when_rendered() {
    let built = Cell::new(false);
    let message = Message::lazy(|| {
        built.set(true);
        format!("attempt {}", 3)
    });
    assert!(!built.get());

    assert_eq!(with_custom_message("base", message), "base attempt 3");
    assert!(built.get());
}

#[test]
fn failure_with_args_receives_argument_text() {
    let ComparisonResult::Failure(failure) =
        ComparisonResult::failure_with_args(|args| format!("args: {}", args.join(", ")))
    else {
        panic!("expected a failure");
    };

    assert!(failure.needs_args());
    assert_eq!(failure.render(&["a".to_string(), "b".to_string()]), "args: a, b");
}

#[test]
fn failure_messages_are_never_empty() {
    let failure = FailureMessage::WithArgs(Box::new(|_| String::new()));
    assert_eq!(failure.render(&[]), "comparison failed");
    assert!(!ComparisonResult::failure("").is_success());
}

#[test]
fn comparisons_debug_without_running() {
    assert_eq!(format!("{:?}", Comparison::from(true)), "Bool(true)");
    assert_eq!(
        format!("{:?}", Comparison::legacy(|| (true, String::new()))),
        "Legacy(..)"
    );
    assert_eq!(
        format!("{:?}", Comparison::from(ComparisonResult::success())),
        "Structured(..)"
    );
    assert_eq!(format!("{:?}", Message::lazy(String::new)), "Lazy(..)");
}
