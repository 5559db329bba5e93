//! Test context capability used to report assertion outcomes.

use std::panic;
use std::thread;

use tracing::debug;

/// Panic payload of [`TestContext::fail_now`].
pub const HALT_MESSAGE: &str = "test halted after assertion failure";

/// The part of a test runner an assertion needs.
pub trait TestingT {
    /// Marks the test as failed and lets it continue.
    fn fail(&mut self);
    /// Marks the test as failed and stops it by unwinding to the runner.
    fn fail_now(&mut self) -> !;
    fn log(&mut self, message: &str);
}

/// [`TestingT`] for the built-in `#[test]` harness.
///
/// Logged messages go to stderr, which the harness captures per test.
/// [`fail_now`](TestingT::fail_now) unwinds immediately; failures recorded with
/// [`fail`](TestingT::fail) fail the test when the context is dropped.
#[derive(Debug, Default)]
pub struct TestContext {
    failures: usize,
    messages: Vec<String>,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failures > 0
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl TestingT for TestContext {
    fn fail(&mut self) {
        self.failures += 1;
    }

    fn fail_now(&mut self) -> ! {
        self.failures += 1;
        panic::resume_unwind(Box::new(HALT_MESSAGE.to_string()))
    }

    fn log(&mut self, message: &str) {
        debug!("test log: {message}");
        eprintln!("{message}");
        self.messages.push(message.to_string());
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if self.failures > 0 && !thread::panicking() {
            panic!(
                "{} check(s) failed:\n{}",
                self.failures,
                self.messages.join("\n")
            );
        }
    }
}
