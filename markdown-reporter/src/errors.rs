// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while handling test events.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurs while writing a test event.
///
/// Returned by [`MarkdownReporter::write_event`](crate::MarkdownReporter::write_event).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteEventError {
    /// An error occurred while operating on the file system.
    #[error("error operating on path {file}")]
    Fs {
        /// The file being operated on.
        file: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// An error occurred while producing the Markdown document.
    #[error("error writing Markdown report to {file}")]
    Markdown {
        /// The output file.
        file: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: quick_markdown::SerializeError,
    },
}
