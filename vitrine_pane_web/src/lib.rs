// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_pane_web --heading-base-level=0

//! Browser host for Vitrine viewer panes.
//!
//! This crate provides `WebHost`, a `vitrine_pane::PaneHost` over real DOM
//! elements, and the JavaScript entry points generated report pages call when
//! targeting `wasm32`.
//!
//! # Usage
//!
//! The page loads the generated module and installs one viewer. Sidebar links
//! then call `switchContent` with a resource name:
//!
//! ```js
//! import init, { installViewer, switchContent } from "./vitrine_pane_web.js";
//!
//! await init();
//! installViewer(null);                     // or a JSON `PaneConfig`
//! switchContent("plots/scatter.png");
//! ```
//!
//! A page built around `view_div` with no summary block can select the classic
//! layout and bounded zoom:
//!
//! ```js
//! installViewer(JSON.stringify({
//!   ids: { container: "view_div", anchor: null },
//!   document_size: { width_percent: 98, height_percent: 100 },
//!   zoom: { variant: { Bounded: { max_steps: 5 } } },
//! }));
//! ```
//!
//! Rust callers can build a `WebViewer` directly with `WebViewer::with_config`.
//!
//! Notes:
//! - DOM exceptions after attachment are logged with `log::warn!` and the
//!   affected step is skipped. Install a `log` implementation to see them.
//! - The click listener is owned by the host and bound with `onclick`, so
//!   rebinding after every switch never stacks handlers.
//!
//! The string conversions in this crate are target independent and are
//! available (and tested) on every platform.

mod convert;

pub use convert::{config_from_json, css_max_width, css_number, css_percent};

#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod viewer;

#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
#[cfg(target_arch = "wasm32")]
pub use viewer::{WebViewer, install_viewer, switch_content};
