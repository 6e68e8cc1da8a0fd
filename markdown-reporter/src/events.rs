// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Events consumed by the reporter.

use chrono::{DateTime, FixedOffset, Local};

/// A test event.
///
/// Events are produced by a host test runner and consumed by a
/// [`MarkdownReporter`](crate::MarkdownReporter).
#[derive(Clone, Debug)]
pub struct TestEvent {
    /// The time at which the event was generated, including the offset from UTC.
    pub timestamp: DateTime<FixedOffset>,

    /// The kind of test event this is.
    pub kind: TestEventKind,
}

impl TestEvent {
    /// Creates a new `TestEvent` stamped with the current local time.
    pub fn new(kind: TestEventKind) -> Self {
        Self {
            timestamp: Local::now().fixed_offset(),
            kind,
        }
    }
}

/// The kind of test event this is.
///
/// Forms part of [`TestEvent`].
#[derive(Clone, Debug)]
pub enum TestEventKind {
    /// A suite started running.
    SuiteStarted {
        /// The suite that started. Only its uid is recorded at this point.
        suite: Suite,
    },

    /// A suite finished running.
    SuiteFinished {
        /// The suite that finished, with its recorded test results.
        suite: Suite,
    },

    /// A test passed.
    TestPassed,

    /// A test was skipped.
    TestSkipped,

    /// A test failed.
    TestFailed,

    /// The test run finished.
    ///
    /// This is the terminal event for the run: it triggers report generation.
    RunFinished,
}

/// A suite of tests, as reported by the host runner.
#[derive(Clone, Debug)]
pub struct Suite {
    /// The unique id of this suite.
    pub uid: String,

    /// The tests contained in this suite, in execution order.
    pub tests: Vec<Test>,
}

/// A single test result within a [`Suite`].
#[derive(Clone, Debug)]
pub struct Test {
    /// The outcome of the test.
    pub state: TestState,

    /// The failure attached to the test, present when the test failed.
    pub failure: Option<TestFailure>,
}

/// The outcome of a single test.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TestState {
    /// The test passed.
    Passed,

    /// The test failed.
    Failed,

    /// The test was skipped.
    Skipped,
}

/// Failure data attached to a failed [`Test`].
#[derive(Clone, Debug)]
pub struct TestFailure {
    /// The failure message.
    pub message: String,

    /// The stack trace captured at the point of failure.
    pub stack: String,
}
