// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction applied by the next unmodified zoom step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomDirection {
    /// Each step enlarges the image.
    #[default]
    In,
    /// Each step shrinks the image.
    Out,
}

impl ZoomDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Per-image zoom bookkeeping.
///
/// A fresh state is created whenever a pane installs an image and is dropped
/// when the pane switches to other content. It carries everything the click
/// handler needs between clicks; the transition itself is a pure function of
/// this state and the click (see [`compute_zoom_transition`](crate::compute_zoom_transition)).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomState {
    /// Number of zoom steps applied since the last reset.
    pub step_count: u32,
    /// Direction of the next unmodified step.
    pub direction: ZoomDirection,
    /// Rendered width of the image when the first step was taken.
    pub baseline_width: Option<f64>,
}

impl ZoomState {
    /// Returns the initial state: no steps, zooming in, no baseline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step_count: 0,
            direction: ZoomDirection::In,
            baseline_width: None,
        }
    }

    /// Returns `true` while no zoom step has been applied.
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        self.step_count == 0
    }

    /// Ratio of `current_width` to the baseline width, if one was captured.
    #[must_use]
    pub fn scale(&self, current_width: f64) -> Option<f64> {
        self.baseline_width
            .filter(|w| *w > 0.0)
            .map(|w| current_width / w)
    }

    /// Records one zoom step taken from `rendered_width`.
    pub(crate) fn record_step(&mut self, rendered_width: f64) {
        if self.baseline_width.is_none() {
            self.baseline_width = Some(rendered_width);
        }
        self.step_count = self.step_count.saturating_add(1);
    }
}
