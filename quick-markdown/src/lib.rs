// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate Markdown test reports in Rust.

mod errors;
mod report;
mod serialize;
mod timestamp;

pub use errors::*;
pub use report::*;
pub use timestamp::format_timestamp;
