// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer pane: content switching and click routing.

use alloc::string::{String, ToString};

use kurbo::{Point, Vec2};
use vitrine_zoom::{
    Click, ClickLayout, ScrollTarget, WidthChange, ZoomController, ZoomEffect, ZoomState,
};

use crate::config::PaneConfig;
use crate::error::PaneError;
use crate::host::{PaneElements, PaneHost};
use crate::kind::ContentKind;

/// The single content node a pane shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveContent<N> {
    /// An image together with its click-zoom record.
    Image {
        /// The image element.
        node: N,
        /// Resource the image was last pointed at.
        source: String,
        /// Zoom record of this image.
        zoom: ZoomController,
    },
    /// An embedded document.
    Document {
        /// The embed element.
        node: N,
        /// Resource the document points at.
        source: String,
    },
}

impl<N> ActiveContent<N> {
    /// Kind of the active content.
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image { .. } => ContentKind::Image,
            Self::Document { .. } => ContentKind::Document,
        }
    }

    /// The content element.
    #[must_use]
    pub fn node(&self) -> &N {
        match self {
            Self::Image { node, .. } | Self::Document { node, .. } => node,
        }
    }

    /// Resource the content element points at.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Image { source, .. } | Self::Document { source, .. } => source,
        }
    }
}

/// A viewer pane bound to a container element.
///
/// The pane owns its host and is the only writer of the container's content
/// and scroll offsets. At any time it shows at most one content node: an
/// image or an embedded document, never both.
#[derive(Debug)]
pub struct ViewerPane<H: PaneHost> {
    host: H,
    elements: PaneElements<H::Node>,
    config: PaneConfig,
    active: Option<ActiveContent<H::Node>>,
}

impl<H: PaneHost> ViewerPane<H> {
    /// Creates a pane over explicit container and anchor elements.
    ///
    /// Content already on the page under the configured image or document id
    /// (a start screen) is adopted as the active content. If both are present
    /// the image wins and the document is removed.
    pub fn new(host: H, elements: PaneElements<H::Node>, config: PaneConfig) -> Self {
        let mut pane = Self {
            host,
            elements,
            config,
            active: None,
        };
        pane.adopt_start_screen();
        pane
    }

    /// Creates a pane by looking up the configured container and anchor ids.
    pub fn attach(host: H, config: PaneConfig) -> Result<Self, PaneError> {
        let elements = PaneElements::locate(&host, &config.ids)?;
        Ok(Self::new(host, elements, config))
    }

    /// Shows `resource` in the pane.
    ///
    /// Names with an `html` extension are embedded as documents, everything
    /// else is shown as an image. Any node of the other kind is removed, an
    /// existing node of the same kind is reused (image) or replaced in place
    /// (document), and the container is scrolled back to the origin.
    ///
    /// This never fails. Whether the resource actually loads is left to the
    /// page.
    pub fn switch_content(&mut self, resource: &str) -> ContentKind {
        let kind = ContentKind::classify(resource);
        log::debug!("showing `{resource}` as {kind:?}");
        match kind {
            ContentKind::Document => self.show_document(resource),
            ContentKind::Image => self.show_image(resource),
        }
        self.host
            .set_scroll_offset(&self.elements.container, Point::ORIGIN);
        kind
    }

    /// Routes a click on `target` to the zoom controller.
    ///
    /// Returns `false` when `target` is not the active image, in which case
    /// nothing changes.
    pub fn click(&mut self, target: &H::Node, click: Click) -> bool {
        let Some(ActiveContent::Image { node, zoom, .. }) = &mut self.active else {
            return false;
        };
        if *node != *target {
            log::trace!("ignoring click on {target:?}, active image is {node:?}");
            return false;
        }

        let container = &self.elements.container;
        let layout = ClickLayout {
            image_bounds: self.host.bounding_rect(node),
            rendered_width: self.host.client_width(node),
            container: self.host.offset_rect(container),
        };
        let effect = zoom.on_click(&self.config.zoom, click, &layout);
        log::trace!("zoom {:?} -> {effect:?}", zoom.state());
        apply_effect(&mut self.host, node, container, effect);
        true
    }

    /// The active content, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveContent<H::Node>> {
        self.active.as_ref()
    }

    /// Zoom state of the active image, if an image is shown.
    #[must_use]
    pub fn zoom_state(&self) -> Option<&ZoomState> {
        match &self.active {
            Some(ActiveContent::Image { zoom, .. }) => Some(zoom.state()),
            _ => None,
        }
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for embedders that manage other page state.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The elements the pane is anchored to.
    #[must_use]
    pub fn elements(&self) -> &PaneElements<H::Node> {
        &self.elements
    }

    /// The pane configuration.
    #[must_use]
    pub fn config(&self) -> &PaneConfig {
        &self.config
    }

    fn adopt_start_screen(&mut self) {
        let image = self.host.element_by_id(&self.config.ids.image);
        let document = self.host.element_by_id(&self.config.ids.document);
        self.active = match (image, document) {
            (Some(node), document) => {
                if let Some(document) = document {
                    log::debug!("start screen has both an image and a document; keeping the image");
                    self.host.remove(&document);
                }
                let source = self.host.source(&node).unwrap_or_default();
                self.host.bind_click(&node);
                Some(ActiveContent::Image {
                    node,
                    source,
                    zoom: ZoomController::new(),
                })
            }
            (None, Some(node)) => {
                let source = self.host.source(&node).unwrap_or_default();
                Some(ActiveContent::Document { node, source })
            }
            (None, None) => None,
        };
    }

    fn show_document(&mut self, resource: &str) {
        let Some(fresh) = self.host.create_document(
            &self.config.ids.document,
            resource,
            self.config.document_size,
        ) else {
            // The current content stays.
            log::warn!("could not create a document element for `{resource}`");
            return;
        };
        match self.active.take() {
            Some(ActiveContent::Document { node, .. }) => self.host.replace_with(&node, &fresh),
            stale => {
                if let Some(stale) = stale {
                    self.host.remove(stale.node());
                }
                self.insert(&fresh);
            }
        }
        self.active = Some(ActiveContent::Document {
            node: fresh,
            source: resource.to_string(),
        });
    }

    fn show_image(&mut self, resource: &str) {
        let cap = self.config.image_cap();
        let node = match self.active.take() {
            Some(ActiveContent::Image { node, .. }) => {
                self.host.set_width(&node, None);
                self.host.set_max_width(&node, cap);
                self.host.set_source(&node, resource);
                node
            }
            stale => {
                let Some(node) = self.host.create_image(&self.config.ids.image, resource) else {
                    log::warn!("could not create an image element for `{resource}`");
                    self.active = stale;
                    return;
                };
                if let Some(stale) = stale {
                    self.host.remove(stale.node());
                }
                self.host.set_width(&node, None);
                self.host.set_max_width(&node, cap);
                self.insert(&node);
                node
            }
        };
        // Rebinding replaces the previous handler; the zoom record starts over
        // because the explicit width was just cleared.
        self.host.bind_click(&node);
        self.active = Some(ActiveContent::Image {
            node,
            source: resource.to_string(),
            zoom: ZoomController::new(),
        });
    }

    /// Detaches the click handler from the active image, if any.
    ///
    /// Call this before dropping a host whose handlers would outlive it.
    pub fn release_click(&mut self) {
        if let Some(ActiveContent::Image { node, .. }) = &self.active {
            self.host.unbind_click(node);
        }
    }

    fn insert(&mut self, node: &H::Node) {
        self.host
            .insert_before(&self.elements.container, node, self.elements.anchor.as_ref());
    }
}

/// Applies a zoom effect: `max-width`, then width, then scroll.
fn apply_effect<H: PaneHost>(
    host: &mut H,
    image: &H::Node,
    container: &H::Node,
    effect: ZoomEffect,
) {
    if let Some(max_width) = effect.max_width {
        host.set_max_width(image, max_width);
    }
    match effect.width {
        WidthChange::Keep => {}
        WidthChange::Set(width) => host.set_width(image, Some(width)),
        WidthChange::Clear => host.set_width(image, None),
    }
    if effect.scroll == ScrollTarget::Keep {
        return;
    }
    // Measured after the width change.
    let extent = host.scroll_size(image);
    let frame = host.offset_rect(container).size();
    let scroll_max = Vec2::new(extent.width - frame.width, extent.height - frame.height);
    let current = host.scroll_offset(container);
    host.set_scroll_offset(container, effect.scroll.resolve(current, scroll_max));
}
