// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resource classification by file extension.

/// Returns the extension of `resource`: the text after its last `.`.
///
/// A name without a dot, or ending in one, has no extension. No attempt is
/// made to separate path segments, so `"v1.2/plot"` yields `"2/plot"`; such
/// names are simply not documents.
#[must_use]
pub fn extension(resource: &str) -> Option<&str> {
    match resource.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// The kind of node a resource is displayed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// A raster image shown in an `img` element.
    Image,
    /// An HTML document embedded in an `object` element.
    Document,
}

impl ContentKind {
    /// Classifies a resource name.
    ///
    /// Only an exact, case-sensitive `html` extension selects
    /// [`ContentKind::Document`]; everything else, including names without an
    /// extension, is shown as an image.
    #[must_use]
    pub fn classify(resource: &str) -> Self {
        match extension(resource) {
            Some("html") => Self::Document,
            _ => Self::Image,
        }
    }
}
