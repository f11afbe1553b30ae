// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The DOM seam: what a pane needs from the page it lives in.

use alloc::string::String;
use core::fmt::Debug;

use kurbo::{Point, Rect, Size};
use vitrine_zoom::MaxWidth;

use crate::config::{DocumentSize, ElementIds};
use crate::error::PaneError;

/// Element operations a [`ViewerPane`](crate::ViewerPane) performs.
///
/// Implementations wrap a real DOM (see `vitrine_pane_web`) or a headless
/// model such as [`MemoryDom`](crate::MemoryDom). Methods are infallible by
/// contract: a host that talks to a runtime which can throw reports the
/// failure itself and leaves the tree unchanged.
///
/// Geometry follows the browser's conventions: rectangles returned by
/// [`bounding_rect`](Self::bounding_rect) are in client coordinates, those
/// returned by [`offset_rect`](Self::offset_rect) are relative to the
/// element's offset parent.
pub trait PaneHost {
    /// Handle to an element. Equality is element identity.
    type Node: Clone + PartialEq + Debug;

    /// Looks up an attached element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Creates a detached image element with the given id and source.
    fn create_image(&mut self, id: &str, source: &str) -> Option<Self::Node>;

    /// Creates a detached embedded-document element with the given id, source
    /// and size.
    fn create_document(
        &mut self,
        id: &str,
        source: &str,
        size: DocumentSize,
    ) -> Option<Self::Node>;

    /// Inserts `node` as a child of `parent`, before `reference`.
    ///
    /// When `reference` is `None` or not a child of `parent`, `node` is
    /// appended.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    );

    /// Replaces `old` with `new` at the same position in its parent.
    fn replace_with(&mut self, old: &Self::Node, new: &Self::Node);

    /// Detaches `node` from its parent.
    fn remove(&mut self, node: &Self::Node);

    /// Returns the source an element points at, if any.
    fn source(&self, node: &Self::Node) -> Option<String>;

    /// Points an element at a new source.
    fn set_source(&mut self, node: &Self::Node, source: &str);

    /// Sets or removes the explicit pixel width of an element.
    fn set_width(&mut self, node: &Self::Node, width: Option<f64>);

    /// Sets the `max-width` style of an element.
    fn set_max_width(&mut self, node: &Self::Node, max_width: MaxWidth);

    /// Routes clicks on `node` to the pane.
    ///
    /// Binding is idempotent per element: binding an element that already has
    /// a handler replaces it, so repeated binds never produce repeated
    /// invocations.
    fn bind_click(&mut self, node: &Self::Node);

    /// Removes the handler installed by [`bind_click`](Self::bind_click), if
    /// any.
    fn unbind_click(&mut self, node: &Self::Node);

    /// Rendered width of an element, excluding borders.
    fn client_width(&self, node: &Self::Node) -> f64;

    /// Bounding box of an element in client coordinates.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Full content extent of an element.
    fn scroll_size(&self, node: &Self::Node) -> Size;

    /// Offset rectangle (position and outer size) of an element.
    fn offset_rect(&self, node: &Self::Node) -> Rect;

    /// Current scroll offsets of an element.
    fn scroll_offset(&self, node: &Self::Node) -> Point;

    /// Scrolls an element. Hosts clamp to the scrollable range as browsers do.
    fn set_scroll_offset(&mut self, node: &Self::Node, offset: Point);
}

/// The page elements a pane is anchored to.
#[derive(Clone, Debug, PartialEq)]
pub struct PaneElements<N> {
    /// Scrolling container hosting the content.
    pub container: N,
    /// Trailing element new content is inserted before.
    pub anchor: Option<N>,
}

impl<N> PaneElements<N> {
    /// Creates the element set from explicit handles.
    pub fn new(container: N, anchor: Option<N>) -> Self {
        Self { container, anchor }
    }

    /// Resolves the container and anchor by id.
    ///
    /// A missing container is an error; a missing anchor is not, content is
    /// then appended to the container.
    pub fn locate<H>(host: &H, ids: &ElementIds) -> Result<Self, PaneError>
    where
        H: PaneHost<Node = N>,
    {
        let container = host
            .element_by_id(&ids.container)
            .ok_or_else(|| PaneError::MissingElement {
                id: ids.container.clone(),
            })?;
        let anchor = ids.anchor.as_deref().and_then(|id| {
            let found = host.element_by_id(id);
            if found.is_none() {
                log::debug!("anchor `{id}` not found; content will be appended");
            }
            found
        });
        Ok(Self { container, anchor })
    }
}
