// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `Report`.

use crate::{Report, SerializeError, TestCaseStatus, timestamp::format_timestamp};
use std::{fmt, io};

static REPORT_TITLE: &str = "# Markdown Test Report";
static FAILED_TESTS_HEADING: &str = "## Failed Tests";

pub(crate) fn serialize_report(
    report: &Report,
    mut writer: impl io::Write,
) -> Result<(), SerializeError> {
    writer.write_all(report.to_string().as_bytes())?;
    Ok(())
}

/// Renders the document. Blocks are separated by a blank line; every block
/// ends with its own newline.
pub(crate) fn serialize_report_impl(report: &Report, f: &mut impl fmt::Write) -> fmt::Result {
    writeln!(f, "{REPORT_TITLE}")?;
    if let Some(timestamp) = &report.timestamp {
        writeln!(f, "_Report generated on {}_", format_timestamp(timestamp))?;
    }

    f.write_str("\n")?;
    writeln!(f, "- {} failed", report.counts.failed)?;
    writeln!(f, "- {} passed", report.counts.passed)?;

    f.write_str("\n")?;
    writeln!(f, "{FAILED_TESTS_HEADING}")?;

    for test_suite in &report.test_suites {
        for test_case in &test_suite.test_cases {
            if let TestCaseStatus::Failed {
                message,
                stack_trace,
            } = &test_case.status
            {
                f.write_str("\n")?;
                writeln!(f, "__{}__", message.as_deref().unwrap_or_default())?;
                writeln!(
                    f,
                    "  > **AssertionError:**  {}",
                    stack_trace.as_deref().unwrap_or_default()
                )?;
            }
        }
    }

    Ok(())
}
