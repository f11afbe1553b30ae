// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless [`PaneHost`] with a small layout model.
//!
//! [`MemoryDom`] stores elements in a slot arena addressed by generational
//! [`NodeId`]s. It lays images out the way a browser lays out an `img` at the
//! top-left of a scrolling block: the rendered width is the explicit width
//! (or the natural width) limited by the `max-width` cap, the height follows
//! the natural aspect ratio, and scroll offsets are clamped to the scrollable
//! range.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use vitrine_pane::{ContentKind, MemoryDom, PaneConfig, ViewerPane};
//!
//! let mut dom = MemoryDom::new();
//! let viewer = dom.create_block("viewer", Rect::new(0.0, 0.0, 800.0, 600.0));
//! dom.append(dom.root(), viewer);
//! dom.set_natural_size("plot.png", Size::new(1600.0, 1200.0));
//!
//! let mut pane = ViewerPane::attach(dom, PaneConfig::default()).unwrap();
//! assert_eq!(pane.switch_content("plot.png"), ContentKind::Image);
//!
//! let img = pane.host().element_by_id_str("img0").unwrap();
//! assert_eq!(pane.host().rendered_size(img), Size::new(800.0, 600.0));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use vitrine_zoom::MaxWidth;

use crate::config::DocumentSize;
use crate::host::PaneHost;

/// Identifier for an element in a [`MemoryDom`].
///
/// A slot index plus a generation counter. Removing an element frees its
/// slot; a later element reusing the slot gets a higher generation, so stale
/// ids never alias a live element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What an element renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A block with a fixed frame, such as the container or the anchor.
    Block,
    /// An `img` element.
    Image,
    /// An embedded document (`object`) element.
    Document,
}

/// Attributes of one element.
#[derive(Clone, Debug)]
pub struct MemoryElement {
    /// What the element renders as.
    pub kind: ElementKind,
    /// Element id.
    pub id: Option<String>,
    /// `src` of an image or `data` of a document.
    pub source: Option<String>,
    /// Explicit pixel width.
    pub width: Option<f64>,
    /// `max-width` style, if set.
    pub max_width: Option<MaxWidth>,
    /// Size of an embedded document.
    pub document_size: Option<DocumentSize>,
    /// Offset rectangle of a block.
    pub frame: Rect,
    /// Scroll offsets of a block.
    pub scroll: Point,
    /// Token of the click handler currently bound, if any.
    pub click_binding: Option<u32>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl MemoryElement {
    fn new(kind: ElementKind, id: &str) -> Self {
        Self {
            kind,
            id: Some(id.to_string()),
            source: None,
            width: None,
            max_width: None,
            document_size: None,
            frame: Rect::ZERO,
            scroll: Point::ORIGIN,
            click_binding: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent element, if attached to one.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Option<MemoryElement>,
}

/// Headless element tree implementing [`PaneHost`].
#[derive(Clone, Debug)]
pub struct MemoryDom {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    natural_sizes: BTreeMap<String, Size>,
    default_natural_size: Size,
    next_binding: u32,
    bind_calls: u32,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Natural size of images whose source has no registered size.
    pub const DEFAULT_NATURAL_SIZE: Size = Size::new(640.0, 480.0);

    /// Creates a tree holding only a root block (the page body).
    #[must_use]
    pub fn new() -> Self {
        let mut body = MemoryElement::new(ElementKind::Block, "body");
        body.id = None;
        Self {
            slots: alloc::vec![Slot {
                generation: 1,
                element: Some(body),
            }],
            free: Vec::new(),
            root: NodeId(0, 1),
            natural_sizes: BTreeMap::new(),
            default_natural_size: Self::DEFAULT_NATURAL_SIZE,
            next_binding: 0,
            bind_calls: 0,
        }
    }

    /// The root element. It is always attached.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Registers the natural size of images loaded from `source`.
    pub fn set_natural_size(&mut self, source: &str, size: Size) {
        self.natural_sizes.insert(source.to_string(), size);
    }

    /// Creates a detached block with a fixed frame.
    pub fn create_block(&mut self, id: &str, frame: Rect) -> NodeId {
        let mut element = MemoryElement::new(ElementKind::Block, id);
        element.frame = frame;
        self.alloc(element)
    }

    /// Appends `node` to `parent`, detaching it from any previous parent.
    pub fn append(&mut self, parent: NodeId, node: NodeId) {
        self.attach(parent, node, None);
    }

    /// Returns `true` if `node` refers to an element that has not been removed.
    #[must_use]
    pub fn is_alive(&self, node: NodeId) -> bool {
        self.slots
            .get(node.idx())
            .is_some_and(|slot| slot.generation == node.1 && slot.element.is_some())
    }

    /// Returns `true` if `node` is alive and connected to the root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.element(id).and_then(MemoryElement::parent);
        }
        false
    }

    /// Attributes of a live element.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&MemoryElement> {
        let slot = self.slots.get(node.idx())?;
        if slot.generation != node.1 {
            return None;
        }
        slot.element.as_ref()
    }

    /// Children of `node` in document order; empty for stale ids.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map_or(&[], MemoryElement::children)
    }

    /// Convenience lookup for attached elements by id.
    #[must_use]
    pub fn element_by_id_str(&self, id: &str) -> Option<NodeId> {
        PaneHost::element_by_id(self, id)
    }

    /// Number of attached elements of `kind`.
    #[must_use]
    pub fn count_attached(&self, kind: ElementKind) -> usize {
        let mut count = 0;
        self.walk(self.root, &mut |id, element| {
            if element.kind == kind && id != self.root {
                count += 1;
            }
            false
        });
        count
    }

    /// Total number of [`PaneHost::bind_click`] calls served.
    #[must_use]
    pub fn bind_calls(&self) -> u32 {
        self.bind_calls
    }

    /// Size an element currently renders at.
    #[must_use]
    pub fn rendered_size(&self, node: NodeId) -> Size {
        let Some(element) = self.element(node) else {
            return Size::ZERO;
        };
        match element.kind {
            ElementKind::Block => element.frame.size(),
            ElementKind::Image => self.image_size(element),
            ElementKind::Document => {
                let size = element.document_size.unwrap_or_default();
                let frame = self.parent_frame(element).size();
                Size::new(
                    frame.width * size.width_percent / 100.0,
                    frame.height * size.height_percent / 100.0,
                )
            }
        }
    }

    fn image_size(&self, element: &MemoryElement) -> Size {
        let natural = element
            .source
            .as_ref()
            .and_then(|src| self.natural_sizes.get(src).copied())
            .unwrap_or(self.default_natural_size);
        let mut width = element.width.unwrap_or(natural.width);
        if let Some(MaxWidth::Percent(percent)) = element.max_width {
            let cap = self.parent_frame(element).width() * percent / 100.0;
            width = width.min(cap);
        }
        let height = if natural.width > 0.0 {
            width * natural.height / natural.width
        } else {
            0.0
        };
        Size::new(width, height)
    }

    fn parent_frame(&self, element: &MemoryElement) -> Rect {
        element
            .parent
            .and_then(|p| self.element(p))
            .map_or(Rect::ZERO, |p| p.frame)
    }

    fn alloc(&mut self, element: MemoryElement) -> NodeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.element = Some(element);
            NodeId(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                element: Some(element),
            });
            NodeId(idx, 1)
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut MemoryElement> {
        let slot = self.slots.get_mut(node.idx())?;
        if slot.generation != node.1 {
            return None;
        }
        slot.element.as_mut()
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.element(node).and_then(MemoryElement::parent) else {
            return;
        };
        if let Some(p) = self.element_mut(parent) {
            p.children.retain(|c| *c != node);
        }
        if let Some(e) = self.element_mut(node) {
            e.parent = None;
        }
    }

    fn attach(&mut self, parent: NodeId, node: NodeId, reference: Option<NodeId>) {
        if !self.is_alive(parent) || !self.is_alive(node) || node == parent {
            return;
        }
        self.detach(node);
        let Some(p) = self.element_mut(parent) else {
            return;
        };
        let at = reference
            .and_then(|r| p.children.iter().position(|c| *c == r))
            .unwrap_or(p.children.len());
        p.children.insert(at, node);
        if let Some(e) = self.element_mut(node) {
            e.parent = Some(parent);
        }
    }

    fn free_subtree(&mut self, node: NodeId) {
        let children = self.children(node).to_vec();
        for child in children {
            self.free_subtree(child);
        }
        if let Some(slot) = self.slots.get_mut(node.idx())
            && slot.generation == node.1
            && slot.element.take().is_some()
        {
            self.free.push(node.0);
        }
    }

    /// Depth-first walk in document order; stops when `f` returns `true`.
    fn walk(&self, node: NodeId, f: &mut dyn FnMut(NodeId, &MemoryElement) -> bool) -> bool {
        let Some(element) = self.element(node) else {
            return false;
        };
        if f(node, element) {
            return true;
        }
        element.children.iter().any(|child| self.walk(*child, &mut *f))
    }

    fn scroll_range(&self, node: NodeId) -> Size {
        let frame = self.element(node).map_or(Rect::ZERO, |e| e.frame);
        let content = self.scroll_size(&node);
        Size::new(
            (content.width - frame.width()).max(0.0),
            (content.height - frame.height()).max(0.0),
        )
    }
}

impl PaneHost for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut found = None;
        self.walk(self.root, &mut |node, element| {
            if element.id.as_deref() == Some(id) {
                found = Some(node);
                true
            } else {
                false
            }
        });
        found
    }

    fn create_image(&mut self, id: &str, source: &str) -> Option<NodeId> {
        let mut element = MemoryElement::new(ElementKind::Image, id);
        element.source = Some(source.to_string());
        Some(self.alloc(element))
    }

    fn create_document(&mut self, id: &str, source: &str, size: DocumentSize) -> Option<NodeId> {
        let mut element = MemoryElement::new(ElementKind::Document, id);
        element.source = Some(source.to_string());
        element.document_size = Some(size);
        Some(self.alloc(element))
    }

    fn insert_before(&mut self, parent: &NodeId, node: &NodeId, reference: Option<&NodeId>) {
        self.attach(*parent, *node, reference.copied());
    }

    fn replace_with(&mut self, old: &NodeId, new: &NodeId) {
        let Some(parent) = self.element(*old).and_then(MemoryElement::parent) else {
            return;
        };
        self.attach(parent, *new, Some(*old));
        self.remove(old);
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
        self.free_subtree(*node);
    }

    fn source(&self, node: &NodeId) -> Option<String> {
        self.element(*node)?.source.clone()
    }

    fn set_source(&mut self, node: &NodeId, source: &str) {
        if let Some(e) = self.element_mut(*node) {
            e.source = Some(source.to_string());
        }
    }

    fn set_width(&mut self, node: &NodeId, width: Option<f64>) {
        if let Some(e) = self.element_mut(*node) {
            e.width = width;
        }
    }

    fn set_max_width(&mut self, node: &NodeId, max_width: MaxWidth) {
        if let Some(e) = self.element_mut(*node) {
            e.max_width = Some(max_width);
        }
    }

    fn bind_click(&mut self, node: &NodeId) {
        self.bind_calls += 1;
        let token = self.next_binding;
        if let Some(e) = self.element_mut(*node) {
            e.click_binding = Some(token);
            self.next_binding += 1;
        }
    }

    fn unbind_click(&mut self, node: &NodeId) {
        if let Some(e) = self.element_mut(*node) {
            e.click_binding = None;
        }
    }

    fn client_width(&self, node: &NodeId) -> f64 {
        self.rendered_size(*node).width
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        let Some(element) = self.element(*node) else {
            return Rect::ZERO;
        };
        if element.kind == ElementKind::Block {
            return element.frame;
        }
        // Content sits at the top-left of its parent's scrolled content box.
        let (origin, scroll) = element
            .parent
            .and_then(|p| self.element(p))
            .map_or((Point::ORIGIN, Point::ORIGIN), |p| (p.frame.origin(), p.scroll));
        let top_left = origin - scroll.to_vec2();
        Rect::from_origin_size(top_left, self.rendered_size(*node))
    }

    fn scroll_size(&self, node: &NodeId) -> Size {
        let Some(element) = self.element(*node) else {
            return Size::ZERO;
        };
        if element.kind != ElementKind::Block {
            return self.rendered_size(*node);
        }
        element
            .children
            .iter()
            .filter(|c| self.element(**c).is_some_and(|e| e.kind != ElementKind::Block))
            .map(|c| self.rendered_size(*c))
            .fold(element.frame.size(), |acc, s| {
                Size::new(acc.width.max(s.width), acc.height.max(s.height))
            })
    }

    fn offset_rect(&self, node: &NodeId) -> Rect {
        match self.element(*node) {
            Some(e) if e.kind == ElementKind::Block => e.frame,
            Some(_) => Rect::from_origin_size(Point::ORIGIN, self.rendered_size(*node)),
            None => Rect::ZERO,
        }
    }

    fn scroll_offset(&self, node: &NodeId) -> Point {
        self.element(*node).map_or(Point::ORIGIN, |e| e.scroll)
    }

    fn set_scroll_offset(&mut self, node: &NodeId, offset: Point) {
        let range = self.scroll_range(*node);
        if let Some(e) = self.element_mut(*node) {
            e.scroll = Point::new(
                offset.x.clamp(0.0, range.width),
                offset.y.clamp(0.0, range.height),
            );
        }
    }
}
