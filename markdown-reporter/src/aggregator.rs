// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accumulate test events into a Markdown report.

use crate::{
    config::MarkdownConfig,
    errors::WriteEventError,
    events::{Suite, Test, TestEvent, TestEventKind, TestState},
};
use chrono::{DateTime, FixedOffset};
use quick_markdown::{Report, RunCounts, TestCase, TestCaseStatus, TestSuite};
use std::fs::File;
use tracing::{debug, warn};

/// Collects lifecycle events for a single test run and writes a Markdown
/// summary when the run finishes.
///
/// Suites may finish in a different order than they started (nested or async
/// completion); the report lists them in start order.
#[derive(Clone, Debug)]
pub struct MarkdownReporter {
    config: MarkdownConfig,
    // order suites were started in
    suite_uids: Vec<String>,
    // suites in finish-arrival order
    suites: Vec<Suite>,
    counts: RunCounts,
}

impl MarkdownReporter {
    /// Creates a new `MarkdownReporter` with the given configuration.
    pub fn new(config: MarkdownConfig) -> Self {
        Self {
            config,
            suite_uids: Vec::new(),
            suites: Vec::new(),
            counts: RunCounts::default(),
        }
    }

    /// Returns the outcome counters accumulated so far.
    ///
    /// The reporter never sets an exit status; hosts derive theirs from these
    /// counts.
    pub fn counts(&self) -> RunCounts {
        self.counts
    }

    /// Records a single test event.
    ///
    /// [`TestEventKind::RunFinished`] is the terminal event: it writes the
    /// report to the configured path. Write failures propagate to the caller;
    /// there is no retry path.
    pub fn write_event(&mut self, event: TestEvent) -> Result<(), WriteEventError> {
        match event.kind {
            TestEventKind::SuiteStarted { suite } => {
                self.suite_uids.push(suite.uid);
            }
            TestEventKind::SuiteFinished { suite } => {
                self.suites.push(suite);
            }
            TestEventKind::TestPassed => {
                self.counts.passed += 1;
            }
            TestEventKind::TestSkipped => {
                self.counts.skipped += 1;
            }
            TestEventKind::TestFailed => {
                self.counts.failed += 1;
            }
            TestEventKind::RunFinished => {
                self.write_report(event.timestamp)?;
            }
        }

        Ok(())
    }

    /// Returns the collected suites in the order they were started, rather
    /// than the order their finish events arrived in.
    fn ordered_suites(&self) -> Vec<&Suite> {
        let mut ordered = Vec::with_capacity(self.suites.len());
        for uid in &self.suite_uids {
            for suite in &self.suites {
                if suite.uid == *uid {
                    ordered.push(suite);
                }
            }
        }
        ordered
    }

    fn build_report(&self, timestamp: DateTime<FixedOffset>) -> Report {
        let mut report = Report::new();
        report
            .set_timestamp(timestamp)
            .set_counts(self.counts)
            .add_test_suites(self.ordered_suites().into_iter().map(to_test_suite));
        report
    }

    fn write_report(&self, timestamp: DateTime<FixedOffset>) -> Result<(), WriteEventError> {
        let report = self.build_report(timestamp);

        let report_path = self.config.report_path();
        let report_dir = report_path
            .parent()
            .expect("report path must have a parent");
        std::fs::create_dir_all(report_dir).map_err(|error| WriteEventError::Fs {
            file: report_dir.to_path_buf(),
            error,
        })?;

        let f = File::create(&report_path).map_err(|error| WriteEventError::Fs {
            file: report_path.clone(),
            error,
        })?;
        report
            .serialize(f)
            .map_err(|error| WriteEventError::Markdown {
                file: report_path.clone(),
                error,
            })?;

        debug!("wrote Markdown report to {report_path}");
        Ok(())
    }
}

fn to_test_suite(suite: &Suite) -> TestSuite {
    let mut test_suite = TestSuite::new(suite.uid.as_str());
    test_suite.add_test_cases(suite.tests.iter().map(|test| to_test_case(&suite.uid, test)));
    test_suite
}

fn to_test_case(suite_uid: &str, test: &Test) -> TestCase {
    let status = match test.state {
        TestState::Passed => TestCaseStatus::passed(),
        TestState::Skipped => TestCaseStatus::skipped(),
        TestState::Failed => {
            let mut status = TestCaseStatus::failed();
            match &test.failure {
                Some(failure) => {
                    status
                        .set_message(failure.message.as_str())
                        .set_stack_trace(failure.stack.as_str());
                }
                None => {
                    warn!("failed test in suite {suite_uid} has no failure attached");
                }
            }
            status
        }
    };
    TestCase::new(status)
}
