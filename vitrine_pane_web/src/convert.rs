// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-independent conversions between pane values and DOM strings.

use vitrine_pane::{PaneConfig, PaneError};
use vitrine_zoom::MaxWidth;

/// Formats a number for a DOM attribute: `250`, `312.5`.
#[must_use]
pub fn css_number(value: f64) -> String {
    format!("{value}")
}

/// Formats a percentage: `98%`.
#[must_use]
pub fn css_percent(percent: f64) -> String {
    format!("{percent}%")
}

/// Formats a `max-width` style value.
#[must_use]
pub fn css_max_width(max_width: MaxWidth) -> String {
    match max_width {
        MaxWidth::None => "none".to_owned(),
        MaxWidth::Percent(percent) => css_percent(percent),
    }
}

/// Builds the pane configuration from optional page-supplied JSON.
///
/// `None` or a blank string selects [`PaneConfig::default`].
pub fn config_from_json(json: Option<&str>) -> Result<PaneConfig, PaneError> {
    match json.map(str::trim) {
        None | Some("") => Ok(PaneConfig::default()),
        Some(json) => PaneConfig::from_json(json),
    }
}
