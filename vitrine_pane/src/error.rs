// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors raised while attaching a pane to a page.
///
/// Switching content and handling clicks never fail; only construction does.
#[derive(Debug, thiserror::Error)]
pub enum PaneError {
    /// The container element was not found.
    #[error("no element with id `{id}` in the page")]
    MissingElement {
        /// The id that was looked up.
        id: String,
    },
    /// No window or document is available.
    #[error("no document available")]
    NoDocument,
    /// The supplied configuration could not be parsed.
    #[error("invalid pane configuration: {0}")]
    Config(String),
}
