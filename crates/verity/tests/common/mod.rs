#![allow(dead_code)]

use std::panic::{self, AssertUnwindSafe};

use verity::TestingT;

/// Records every call an assertion makes on its test context.
#[derive(Debug, Default)]
pub struct Recorder {
    pub logs: Vec<String>,
    pub fails: usize,
    pub fail_nows: usize,
}

/// Unwind payload of [`Recorder::fail_now`].
pub struct Halted;

impl TestingT for Recorder {
    fn fail(&mut self) {
        self.fails += 1;
    }

    fn fail_now(&mut self) -> ! {
        self.fail_nows += 1;
        panic::resume_unwind(Box::new(Halted))
    }

    fn log(&mut self, message: &str) {
        self.logs.push(message.to_string());
    }
}

pub struct Run {
    pub recorder: Recorder,
    pub halted: bool,
}

impl Run {
    pub fn single_log(&self) -> &str {
        assert_eq!(self.recorder.logs.len(), 1, "logs: {:?}", self.recorder.logs);
        &self.recorder.logs[0]
    }
}

/// Runs `test` the way a harness runs a test unit, catching `fail_now`.
pub fn run(test: impl FnOnce(&mut Recorder)) -> Run {
    let mut recorder = Recorder::default();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| test(&mut recorder)));
    let halted = match outcome {
        Ok(()) => false,
        Err(payload) if payload.is::<Halted>() => true,
        Err(payload) => panic::resume_unwind(payload),
    };
    Run { recorder, halted }
}
