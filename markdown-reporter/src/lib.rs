// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Markdown test reports from test-runner lifecycle events.
//!
//! The main type here is [`MarkdownReporter`], which consumes
//! [`TestEvent`](events::TestEvent) values from a host test runner and writes
//! a Markdown summary of the run when the terminal
//! [`RunFinished`](events::TestEventKind::RunFinished) event arrives.

mod aggregator;
pub mod config;
pub mod errors;
pub mod events;

pub use aggregator::MarkdownReporter;
