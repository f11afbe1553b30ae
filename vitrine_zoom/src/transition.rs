// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The click-zoom transition and the effects it asks the host to apply.

use kurbo::{Point, Rect, Vec2};

use crate::click::Click;
use crate::config::{MaxWidth, ZoomConfig, ZoomVariant};
use crate::state::ZoomState;

/// Geometry sampled from the host at the moment of a click, before any
/// mutation is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickLayout {
    /// Bounding box of the image in client coordinates.
    pub image_bounds: Rect,
    /// Rendered (client) width of the image.
    pub rendered_width: f64,
    /// Offset rectangle of the scrolling container.
    pub container: Rect,
}

/// Change to the image's explicit pixel width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidthChange {
    /// Leave the width as is.
    Keep,
    /// Set the explicit width in pixels.
    Set(f64),
    /// Remove the explicit width so the `max-width` cap governs.
    Clear,
}

/// Where the container should scroll once the width change has taken effect.
///
/// The scroll extent of a resized image is only known after the host has
/// applied the new width, so centering targets stay symbolic until
/// [`ScrollTarget::resolve`] is called with the post-resize extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    /// Leave the scroll offsets untouched.
    Keep,
    /// Scroll to `(0, 0)`.
    Origin,
    /// Scroll to an absolute offset.
    Absolute(Point),
    /// Scroll to the middle of the scrollable range, shifted by an offset.
    CenterWithOffset(Vec2),
}

impl ScrollTarget {
    /// Resolves this target into concrete scroll offsets.
    ///
    /// `current` is the container's scroll position and `scroll_max` the
    /// scrollable range (content extent minus container size), both measured
    /// after the width change.
    #[must_use]
    pub fn resolve(self, current: Point, scroll_max: Vec2) -> Point {
        match self {
            Self::Keep => current,
            Self::Origin => Point::ORIGIN,
            Self::Absolute(pt) => pt,
            Self::CenterWithOffset(offset) => (scroll_max * 0.5 + offset).to_point(),
        }
    }
}

/// DOM-level mutations produced by one click.
///
/// Hosts apply them in field order: `max_width`, then `width`, then `scroll`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomEffect {
    /// New `max-width` style, if it changes.
    pub max_width: Option<MaxWidth>,
    /// Change to the explicit width attribute.
    pub width: WidthChange,
    /// Scroll target for the container.
    pub scroll: ScrollTarget,
}

impl ZoomEffect {
    /// An effect that changes nothing.
    pub const NONE: Self = Self {
        max_width: None,
        width: WidthChange::Keep,
        scroll: ScrollTarget::Keep,
    };
}

/// Result of [`compute_zoom_transition`]: the next state and what to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransition {
    /// State after the click.
    pub state: ZoomState,
    /// Mutations the host must apply.
    pub effect: ZoomEffect,
}

/// Computes the outcome of a click on the active image.
///
/// This is a pure function: it reads the current state, the configuration,
/// the click and the pre-click layout, and returns the next state together
/// with the mutations to perform. It never fails; every input has a defined
/// transition.
#[must_use]
pub fn compute_zoom_transition(
    state: &ZoomState,
    config: &ZoomConfig,
    click: Click,
    layout: &ClickLayout,
) -> ZoomTransition {
    match config.variant {
        ZoomVariant::Directional => directional(state, config, click, layout),
        ZoomVariant::Bounded { max_steps } => bounded(state, config, max_steps, click, layout),
    }
}

fn directional(
    state: &ZoomState,
    config: &ZoomConfig,
    click: Click,
    layout: &ClickLayout,
) -> ZoomTransition {
    let mut next = *state;
    if click.shift() {
        next.direction = next.direction.flipped();
    }

    if click.ctrl() {
        return ZoomTransition {
            state: next,
            effect: ZoomEffect {
                max_width: Some(config.inspect_cap()),
                width: WidthChange::Clear,
                scroll: ScrollTarget::Origin,
            },
        };
    }

    let factor = config.factor(next.direction);
    next.record_step(layout.rendered_width);

    // Keep the clicked point under the pointer: its displacement from the
    // image center grows with the image, so offset the centered scroll by it.
    let bounds = layout.image_bounds;
    let from_center = click.position - bounds.center();
    ZoomTransition {
        state: next,
        effect: ZoomEffect {
            max_width: Some(MaxWidth::None),
            width: WidthChange::Set(layout.rendered_width * factor),
            scroll: ScrollTarget::CenterWithOffset(from_center * factor),
        },
    }
}

fn bounded(
    state: &ZoomState,
    config: &ZoomConfig,
    max_steps: u32,
    click: Click,
    layout: &ClickLayout,
) -> ZoomTransition {
    if state.step_count >= max_steps {
        return ZoomTransition {
            state: ZoomState::new(),
            effect: ZoomEffect {
                max_width: Some(config.normal_cap()),
                width: WidthChange::Clear,
                scroll: ScrollTarget::Keep,
            },
        };
    }

    let factor = config.zoom_in_factor;
    let mut next = *state;
    next.record_step(layout.rendered_width);

    let from_center = click.position - layout.container.center();
    let scale = f64::from(next.step_count) * factor;
    ZoomTransition {
        state: next,
        effect: ZoomEffect {
            max_width: Some(MaxWidth::None),
            width: WidthChange::Set(layout.rendered_width * factor),
            scroll: ScrollTarget::Absolute((from_center * scale).to_point()),
        },
    }
}

/// The click handler's record for one installed image.
///
/// Wraps a [`ZoomState`] and advances it through [`compute_zoom_transition`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomController {
    state: ZoomState,
}

impl ZoomController {
    /// Creates a controller in the initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ZoomState::new(),
        }
    }

    /// Current zoom state.
    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    /// Handles a click and returns the mutations to apply.
    pub fn on_click(
        &mut self,
        config: &ZoomConfig,
        click: Click,
        layout: &ClickLayout,
    ) -> ZoomEffect {
        let transition = compute_zoom_transition(&self.state, config, click, layout);
        self.state = transition.state;
        transition.effect
    }

    /// Returns to the initial state.
    pub fn reset(&mut self) {
        self.state = ZoomState::new();
    }
}
