// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing a [`Report`](crate::Report).
///
/// Returned by [`Report::serialize`](crate::Report::serialize).
#[derive(Debug, Error)]
#[error("error serializing Markdown report")]
pub struct SerializeError {
    #[from]
    inner: std::io::Error,
}
