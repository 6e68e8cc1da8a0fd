// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporter configuration.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

static DEFAULT_FILENAME: &str = "markdownReport";

/// Configuration for a [`MarkdownReporter`](crate::MarkdownReporter).
///
/// Unrecognized keys are ignored during deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarkdownConfig {
    #[serde(default)]
    output_dir: Option<Utf8PathBuf>,

    #[serde(default)]
    filename: Option<String>,
}

impl MarkdownConfig {
    /// Creates a new `MarkdownConfig` with every option left at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory the report is written to.
    pub fn set_output_dir(&mut self, output_dir: impl Into<Utf8PathBuf>) -> &mut Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Sets the base name of the report file. A `.md` suffix is appended.
    pub fn set_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        self.filename = Some(filename.into());
        self
    }

    /// Returns the directory the report is written to.
    ///
    /// Defaults to the current working directory.
    pub fn output_dir(&self) -> &Utf8Path {
        self.output_dir.as_deref().unwrap_or(Utf8Path::new("."))
    }

    /// Returns the full path of the report file.
    pub fn report_path(&self) -> Utf8PathBuf {
        let filename = self.filename.as_deref().unwrap_or(DEFAULT_FILENAME);
        self.output_dir().join(format!("{filename}.md"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_report_path() {
        assert_eq!(MarkdownConfig::new().report_path(), "./markdownReport.md");
    }

    #[test]
    fn configured_report_path() {
        let mut config = MarkdownConfig::new();
        config
            .set_output_dir("target/reports")
            .set_filename("summary");
        assert_eq!(config.report_path(), "target/reports/summary.md");
    }

    #[test]
    fn deserialize_ignores_unrecognized_keys() {
        let config: MarkdownConfig = serde_json::from_value(json!({
            "output-dir": "reports",
            "filename": "run",
            "stdout": true,
        }))
        .expect("config deserializes");
        assert_eq!(config.report_path(), "reports/run.md");
    }
}
