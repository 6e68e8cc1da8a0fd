// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::SerializeError,
    serialize::{serialize_report, serialize_report_impl},
};
use chrono::{DateTime, FixedOffset};
use std::{fmt, io};

/// The root element of a Markdown test report.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// The time at which the report was generated.
    ///
    /// Rendered through [`format_timestamp`](crate::format_timestamp) when present.
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// Outcome counters displayed in the summary block.
    ///
    /// Counters are supplied by the caller and are not derived from the
    /// recorded suites.
    pub counts: RunCounts,

    /// The test suites contained in this report, in display order.
    pub test_suites: Vec<TestSuite>,
}

impl Report {
    /// Creates a new `Report`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generation timestamp for the report.
    pub fn set_timestamp(&mut self, timestamp: impl Into<DateTime<FixedOffset>>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the outcome counters displayed in the summary block.
    pub fn set_counts(&mut self, counts: RunCounts) -> &mut Self {
        self.counts = counts;
        self
    }

    /// Adds a test suite to this report.
    pub fn add_test_suite(&mut self, test_suite: TestSuite) -> &mut Self {
        self.test_suites.push(test_suite);
        self
    }

    /// Adds several test suites to this report.
    pub fn add_test_suites(
        &mut self,
        test_suites: impl IntoIterator<Item = TestSuite>,
    ) -> &mut Self {
        self.test_suites.extend(test_suites);
        self
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_report(self, writer)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_report_impl(self, f)
    }
}

/// Outcome counters for a test run.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub struct RunCounts {
    /// The number of tests that passed.
    pub passed: usize,

    /// The number of tests that failed.
    pub failed: usize,

    /// The number of tests that were skipped.
    ///
    /// Tracked for hosts deriving an exit status; not rendered in the
    /// document.
    pub skipped: usize,
}

impl RunCounts {
    /// Returns true if any tests failed.
    #[inline]
    pub fn any_failed(&self) -> bool {
        self.failed > 0
    }
}

/// Represents a single test suite.
///
/// A `TestSuite` groups together several [`TestCase`] instances.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TestSuite {
    /// The name of this test suite.
    pub name: String,

    /// The test cases that form this test suite.
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new `TestSuite`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test_cases: vec![],
        }
    }

    /// Adds a test case to this test suite.
    pub fn add_test_case(&mut self, test_case: TestCase) -> &mut Self {
        self.test_cases.push(test_case);
        self
    }

    /// Adds several test cases to this test suite.
    pub fn add_test_cases(&mut self, test_cases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        self.test_cases.extend(test_cases);
        self
    }
}

/// Represents a single test case.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TestCase {
    /// The status of this test case.
    pub status: TestCaseStatus,
}

impl TestCase {
    /// Creates a new test case.
    pub fn new(status: TestCaseStatus) -> Self {
        Self { status }
    }
}

/// Represents the outcome of a test case.
#[derive(Clone, Debug)]
pub enum TestCaseStatus {
    /// This test case passed.
    Passed,

    /// This test case failed.
    Failed {
        /// The failure message.
        message: Option<String>,

        /// The stack trace captured at the point of failure.
        stack_trace: Option<String>,
    },

    /// This test case was not run.
    Skipped,
}

impl TestCaseStatus {
    /// Creates a new `TestCaseStatus` that represents a passed test.
    pub fn passed() -> Self {
        TestCaseStatus::Passed
    }

    /// Creates a new `TestCaseStatus` that represents a failed test.
    pub fn failed() -> Self {
        TestCaseStatus::Failed {
            message: None,
            stack_trace: None,
        }
    }

    /// Creates a new `TestCaseStatus` that represents a skipped test.
    pub fn skipped() -> Self {
        TestCaseStatus::Skipped
    }

    /// Sets the message. No-op if this test case did not fail.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        if let TestCaseStatus::Failed {
            message: message_mut,
            ..
        } = self
        {
            *message_mut = Some(message.into());
        }
        self
    }

    /// Sets the stack trace. No-op if this test case did not fail.
    pub fn set_stack_trace(&mut self, stack_trace: impl Into<String>) -> &mut Self {
        if let TestCaseStatus::Failed {
            stack_trace: stack_trace_mut,
            ..
        } = self
        {
            *stack_trace_mut = Some(stack_trace.into());
        }
        self
    }

    /// Returns true if this test case failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, TestCaseStatus::Failed { .. })
    }
}
