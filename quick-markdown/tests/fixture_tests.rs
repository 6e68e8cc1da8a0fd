// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{FixedOffset, TimeZone};
use goldenfile::Mint;
use quick_markdown::{Report, RunCounts, TestCase, TestCaseStatus, TestSuite};

#[test]
fn fixtures() {
    let mut mint = Mint::new("tests/fixtures");

    let f = mint
        .new_goldenfile("basic_report.md")
        .expect("creating new goldenfile succeeds");

    let basic_report = basic_report();
    basic_report
        .serialize(f)
        .expect("serializing basic_report succeeds");
}

fn basic_report() -> Report {
    let mut report = Report::new();
    report
        .set_timestamp(
            FixedOffset::east_opt(0)
                .expect("offset is in range")
                .with_ymd_and_hms(2024, 1, 1, 3, 4, 5)
                .single()
                .expect("timestamp is valid"),
        )
        .set_counts(RunCounts {
            passed: 2,
            failed: 2,
            skipped: 1,
        });

    let mut suite = TestSuite::new("login suite");
    suite.add_test_case(TestCase::new(TestCaseStatus::passed()));

    let mut status = TestCaseStatus::failed();
    status
        .set_message("expected true to equal false")
        .set_stack_trace(
            "AssertionError: expected true to equal false\n    \
             at Context.<anonymous> (test/login.spec.js:12:9)",
        );
    suite.add_test_case(TestCase::new(status));
    report.add_test_suite(suite);

    let mut suite = TestSuite::new("checkout suite");
    suite.add_test_case(TestCase::new(TestCaseStatus::skipped()));

    // message but no stack trace, to exercise the empty rendering
    let mut status = TestCaseStatus::failed();
    status.set_message("timed out waiting for element");
    suite.add_test_case(TestCase::new(status));
    report.add_test_suite(suite);

    report
}
