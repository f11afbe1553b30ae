// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::state::ZoomDirection;

/// A CSS `max-width` value applied to the image.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxWidth {
    /// No cap (`max-width: none`); the explicit width governs.
    None,
    /// Cap at a percentage of the containing block.
    Percent(f64),
}

/// Which of the two click-zoom interactions a pane runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomVariant {
    /// Modifier-aware zoom: shift flips the direction, control jumps to the
    /// inspect cap, every other click zooms about the pointer.
    #[default]
    Directional,
    /// Zoom in `max_steps` times, then fall back to the capped view on the
    /// next click. Modifiers are ignored.
    Bounded {
        /// Number of zoom steps before the cycle resets.
        max_steps: u32,
    },
}

/// Parameters of the click-zoom interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Interaction variant.
    pub variant: ZoomVariant,
    /// Width multiplier applied by a zoom-in step.
    pub zoom_in_factor: f64,
    /// Width multiplier applied by a zoom-out step.
    pub zoom_out_factor: f64,
    /// `max-width` percentage of an unzoomed image.
    pub normal_cap_percent: f64,
    /// `max-width` percentage applied by a control-click.
    pub inspect_cap_percent: f64,
}

impl ZoomConfig {
    /// Default number of steps in the bounded variant.
    pub const DEFAULT_MAX_STEPS: u32 = 5;

    /// Configuration of the bounded five-step cycle with a 98% cap.
    #[must_use]
    pub fn bounded() -> Self {
        Self {
            variant: ZoomVariant::Bounded {
                max_steps: Self::DEFAULT_MAX_STEPS,
            },
            normal_cap_percent: 98.0,
            ..Self::default()
        }
    }

    /// Returns the width multiplier for a step in `direction`.
    #[must_use]
    pub fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        }
    }

    /// The `max-width` of an unzoomed image.
    #[must_use]
    pub fn normal_cap(&self) -> MaxWidth {
        MaxWidth::Percent(self.normal_cap_percent)
    }

    /// The `max-width` applied by the inspect shortcut.
    #[must_use]
    pub fn inspect_cap(&self) -> MaxWidth {
        MaxWidth::Percent(self.inspect_cap_percent)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            variant: ZoomVariant::Directional,
            zoom_in_factor: 1.25,
            zoom_out_factor: 0.75,
            normal_cap_percent: 100.0,
            inspect_cap_percent: 800.0,
        }
    }
}
