// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_zoom --heading-base-level=0

//! Vitrine Zoom: the click-zoom state machine of a viewer pane.
//!
//! A viewer pane shows an image inside a scrolling container. Each click on
//! the image resizes it and scrolls the container so that the clicked point
//! stays under the pointer. This crate models that interaction headlessly:
//! - [`ZoomState`] is the per-image bookkeeping (step count, direction,
//!   baseline width).
//! - [`compute_zoom_transition`] maps a state, a [`Click`] and the pre-click
//!   [`ClickLayout`] to the next state plus a [`ZoomEffect`] describing the
//!   mutations to perform.
//! - [`ZoomController`] wraps a state and advances it click by click.
//!
//! It does **not** touch any DOM. Hosts sample the geometry, call the
//! transition, then apply the effect themselves. Scroll targets that depend on
//! the post-resize extent are resolved with [`ScrollTarget::resolve`] once the
//! new width is in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use vitrine_zoom::{Click, ClickLayout, WidthChange, ZoomConfig, ZoomState, compute_zoom_transition};
//!
//! let layout = ClickLayout {
//!     image_bounds: Rect::new(0.0, 0.0, 200.0, 100.0),
//!     rendered_width: 200.0,
//!     container: Rect::new(0.0, 0.0, 800.0, 600.0),
//! };
//!
//! // Click on the middle of the image.
//! let click = Click::plain(Point::new(100.0, 50.0));
//! let t = compute_zoom_transition(&ZoomState::new(), &ZoomConfig::default(), click, &layout);
//! assert_eq!(t.effect.width, WidthChange::Set(250.0));
//!
//! // After applying the width, the host measures the scrollable range and
//! // resolves the scroll target: a centered click lands mid-range.
//! let scroll = t.effect.scroll.resolve(Point::ORIGIN, Vec2::new(50.0, 30.0));
//! assert_eq!(scroll, Point::new(25.0, 15.0));
//! ```
//!
//! ## Variants
//!
//! [`ZoomVariant::Directional`] is modifier-aware: shift flips the zoom
//! direction, control jumps to an "inspect" view with a large `max-width` cap
//! and scrolls to the origin. [`ZoomVariant::Bounded`] ignores modifiers,
//! zooms in a fixed number of times and then returns to the capped view.
//!
//! This crate is `no_std`.

#![no_std]

mod click;
mod config;
mod state;
mod transition;

pub use click::{Click, Modifiers};
pub use config::{MaxWidth, ZoomConfig, ZoomVariant};
pub use state::{ZoomDirection, ZoomState};
pub use transition::{
    ClickLayout, ScrollTarget, WidthChange, ZoomController, ZoomEffect, ZoomTransition,
    compute_zoom_transition,
};
