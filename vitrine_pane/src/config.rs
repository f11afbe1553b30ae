// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pane configuration and deployment presets.

use alloc::string::String;

use vitrine_zoom::{MaxWidth, ZoomConfig};

/// Element ids the pane reads from and writes to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementIds {
    /// Scrolling container that hosts the content.
    pub container: String,
    /// Element new content is inserted before. `None` appends instead.
    pub anchor: Option<String>,
    /// Id given to the image element.
    pub image: String,
    /// Id given to the embedded document element.
    pub document: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            container: "viewer".into(),
            anchor: Some("summary".into()),
            image: "img0".into(),
            document: "html0".into(),
        }
    }
}

/// Size of the embedded document, in percent of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentSize {
    /// Width in percent.
    pub width_percent: f64,
    /// Height in percent.
    pub height_percent: f64,
}

impl DocumentSize {
    /// Creates a size from width and height percentages.
    #[must_use]
    pub const fn new(width_percent: f64, height_percent: f64) -> Self {
        Self {
            width_percent,
            height_percent,
        }
    }
}

impl Default for DocumentSize {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// Everything a [`ViewerPane`](crate::ViewerPane) needs to know about its page.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaneConfig {
    /// Element ids.
    pub ids: ElementIds,
    /// Size of embedded documents.
    pub document_size: DocumentSize,
    /// Click-zoom behavior. Its `normal_cap_percent` is also the `max-width`
    /// applied to every freshly shown image.
    pub zoom: ZoomConfig,
}

impl PaneConfig {
    /// The older report layout: a `view_div` container without an anchor,
    /// 98% caps and the bounded five-step zoom.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            ids: ElementIds {
                container: "view_div".into(),
                anchor: None,
                ..ElementIds::default()
            },
            document_size: DocumentSize::new(98.0, 100.0),
            zoom: ZoomConfig::bounded(),
        }
    }

    /// `max-width` applied to an image when it is shown.
    #[must_use]
    pub fn image_cap(&self) -> MaxWidth {
        self.zoom.normal_cap()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, crate::PaneError> {
        use alloc::string::ToString;

        serde_json::from_str(json).map_err(|err| crate::PaneError::Config(err.to_string()))
    }
}
