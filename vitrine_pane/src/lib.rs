// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_pane --heading-base-level=0

//! Vitrine Pane: the content switcher of a report viewer pane.
//!
//! A viewer pane is a scrolling container on a generated report page. Sidebar
//! links call [`ViewerPane::switch_content`] with a resource name; the pane
//! shows HTML resources in an embedded document element and everything else
//! in an image element, keeping exactly one of the two in the container.
//! Clicks on the image are routed through [`ViewerPane::click`] into the
//! zoom state machine from `vitrine_zoom`.
//!
//! The pane talks to its page only through the [`PaneHost`] trait. Two hosts
//! exist:
//! - [`MemoryDom`], a headless element tree with a small layout model, used by
//!   tests and for server-side reasoning about pane behavior.
//! - `vitrine_pane_web`'s `WebHost`, over real DOM elements via `web-sys`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vitrine_pane::{ContentKind, ElementKind, MemoryDom, PaneConfig, ViewerPane};
//! use vitrine_zoom::Click;
//!
//! let mut dom = MemoryDom::new();
//! let viewer = dom.create_block("viewer", Rect::new(0.0, 0.0, 800.0, 600.0));
//! let summary = dom.create_block("summary", Rect::ZERO);
//! dom.append(dom.root(), viewer);
//! dom.append(viewer, summary);
//!
//! let mut pane = ViewerPane::attach(dom, PaneConfig::default()).unwrap();
//!
//! pane.switch_content("report/index.html");
//! assert_eq!(pane.host().count_attached(ElementKind::Document), 1);
//!
//! pane.switch_content("plots/scatter.png");
//! assert_eq!(pane.host().count_attached(ElementKind::Document), 0);
//! assert_eq!(pane.host().count_attached(ElementKind::Image), 1);
//!
//! // Clicking the image zooms it.
//! let img = *pane.active().unwrap().node();
//! assert!(pane.click(&img, Click::plain(Point::new(10.0, 10.0))));
//! assert_eq!(pane.zoom_state().unwrap().step_count, 1);
//! ```
//!
//! ## Errors and logging
//!
//! Switching and clicking never fail. Only attaching to a page can, with a
//! [`PaneError`]. Decisions are reported through the `log` facade; the
//! embedding application chooses the logger.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`PaneConfig`].
//! - `json`: [`PaneConfig::from_json`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod error;
mod host;
mod kind;
mod memory;
mod pane;

pub use config::{DocumentSize, ElementIds, PaneConfig};
pub use error::PaneError;
pub use host::{PaneElements, PaneHost};
pub use kind::{ContentKind, extension};
pub use memory::{ElementKind, MemoryDom, MemoryElement, NodeId};
pub use pane::{ActiveContent, ViewerPane};
