// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content switching on the headless host.
//!
//! These exercise the single-content invariant, node reuse, anchor placement
//! and the scroll reset that follows every switch.

use kurbo::{Point, Rect, Size};
use vitrine_pane::{
    ActiveContent, ContentKind, DocumentSize, ElementKind, MemoryDom, NodeId, PaneConfig,
    PaneElements, PaneError, PaneHost, ViewerPane,
};
use vitrine_zoom::MaxWidth;

struct Page {
    dom: MemoryDom,
    viewer: NodeId,
    summary: NodeId,
}

fn page() -> Page {
    let mut dom = MemoryDom::new();
    let viewer = dom.create_block("viewer", Rect::new(200.0, 0.0, 1000.0, 600.0));
    let summary = dom.create_block("summary", Rect::ZERO);
    dom.append(dom.root(), viewer);
    dom.append(viewer, summary);
    dom.set_natural_size("big.png", Size::new(2400.0, 1800.0));
    Page {
        dom,
        viewer,
        summary,
    }
}

fn pane() -> (ViewerPane<MemoryDom>, NodeId, NodeId) {
    let Page {
        dom,
        viewer,
        summary,
    } = page();
    (
        ViewerPane::attach(dom, PaneConfig::default()).unwrap(),
        viewer,
        summary,
    )
}

fn counts(pane: &ViewerPane<MemoryDom>) -> (usize, usize) {
    let host = pane.host();
    (
        host.count_attached(ElementKind::Image),
        host.count_attached(ElementKind::Document),
    )
}

#[test]
fn html_resources_become_a_single_document() {
    let (mut pane, viewer, summary) = pane();
    assert_eq!(pane.switch_content("docs/index.html"), ContentKind::Document);
    assert_eq!(counts(&pane), (0, 1));

    let doc = pane.host().element_by_id_str("html0").unwrap();
    assert_eq!(pane.host().children(viewer), &[doc, summary]);

    let element = pane.host().element(doc).unwrap();
    assert_eq!(element.source.as_deref(), Some("docs/index.html"));
    assert_eq!(element.document_size, Some(DocumentSize::new(100.0, 100.0)));
    assert_eq!(pane.host().rendered_size(doc), Size::new(800.0, 600.0));
}

#[test]
fn other_resources_become_a_single_image() {
    for name in ["plot.png", "photo", "chart.svg", "page.HTML", "trailing."] {
        let (mut pane, viewer, summary) = pane();
        assert_eq!(pane.switch_content(name), ContentKind::Image, "{name}");
        assert_eq!(counts(&pane), (1, 0), "{name}");

        let img = pane.host().element_by_id_str("img0").unwrap();
        assert_eq!(pane.host().children(viewer), &[img, summary], "{name}");
        let element = pane.host().element(img).unwrap();
        assert_eq!(element.source.as_deref(), Some(name), "{name}");
        assert_eq!(element.width, None, "{name}");
        assert_eq!(element.max_width, Some(MaxWidth::Percent(100.0)), "{name}");
    }
}

#[test]
fn switching_to_the_same_image_twice_reuses_the_node() {
    let (mut pane, viewer, _) = pane();
    pane.switch_content("plot.png");
    let first = *pane.active().unwrap().node();
    let children_once = pane.host().children(viewer).to_vec();

    pane.switch_content("plot.png");
    let second = *pane.active().unwrap().node();
    assert_eq!(first, second);
    assert_eq!(pane.host().children(viewer), children_once.as_slice());
    assert_eq!(counts(&pane), (1, 0));
}

#[test]
fn switching_to_a_new_image_mutates_in_place() {
    let (mut pane, _, _) = pane();
    pane.switch_content("a.png");
    let img = *pane.active().unwrap().node();
    pane.host_mut().set_width(&img, Some(1234.0));
    pane.host_mut().set_max_width(&img, MaxWidth::None);

    pane.switch_content("b.png");
    assert_eq!(*pane.active().unwrap().node(), img);
    let element = pane.host().element(img).unwrap();
    assert_eq!(element.source.as_deref(), Some("b.png"));
    assert_eq!(element.width, None);
    assert_eq!(element.max_width, Some(MaxWidth::Percent(100.0)));
    assert_eq!(pane.active().unwrap().source(), "b.png");
}

#[test]
fn switching_documents_twice_keeps_one_document_in_place() {
    let (mut pane, viewer, summary) = pane();
    pane.switch_content("a.html");
    let structure_once = pane.host().children(viewer).len();
    pane.switch_content("a.html");
    assert_eq!(counts(&pane), (0, 1));
    assert_eq!(pane.host().children(viewer).len(), structure_once);

    pane.switch_content("b.html");
    let doc = pane.host().element_by_id_str("html0").unwrap();
    assert_eq!(pane.host().children(viewer), &[doc, summary]);
    assert_eq!(
        pane.host().element(doc).unwrap().source.as_deref(),
        Some("b.html")
    );
}

#[test]
fn alternating_kinds_never_leaves_two_nodes() {
    let (mut pane, viewer, _) = pane();
    let sequence = ["a.png", "b.html", "a.png", "c.html", "c.html", "d", "e.html"];
    for name in sequence {
        let kind = pane.switch_content(name);
        let expected = match kind {
            ContentKind::Image => (1, 0),
            ContentKind::Document => (0, 1),
        };
        assert_eq!(counts(&pane), expected, "after {name}");
        assert_eq!(pane.host().children(viewer).len(), 2, "after {name}");
        assert_eq!(pane.active().map(ActiveContent::kind), Some(kind));
    }
}

#[test]
fn every_switch_scrolls_back_to_origin() {
    let (mut pane, viewer, _) = pane();
    pane.switch_content("big.png");
    let img = *pane.active().unwrap().node();
    pane.host_mut().set_max_width(&img, MaxWidth::None);
    pane.host_mut().set_scroll_offset(&viewer, Point::new(300.0, 200.0));
    assert_ne!(pane.host().scroll_offset(&viewer), Point::ORIGIN);

    for name in ["big.png", "x.html", "big.png"] {
        let img = pane.host().element_by_id_str("img0");
        if let Some(img) = img {
            pane.host_mut().set_max_width(&img, MaxWidth::None);
        }
        pane.host_mut().set_scroll_offset(&viewer, Point::new(50.0, 50.0));
        pane.switch_content(name);
        assert_eq!(pane.host().scroll_offset(&viewer), Point::ORIGIN, "{name}");
    }
}

#[test]
fn handler_is_rebound_not_stacked() {
    let (mut pane, _, _) = pane();
    pane.switch_content("a.png");
    let img = *pane.active().unwrap().node();
    let first = pane.host().element(img).unwrap().click_binding;

    pane.switch_content("b.png");
    pane.switch_content("b.png");
    let element = pane.host().element(img).unwrap();
    assert!(element.click_binding.is_some());
    assert_ne!(element.click_binding, first);
    assert_eq!(pane.host().bind_calls(), 3);
}

#[test]
fn missing_anchor_appends_content() {
    let mut dom = MemoryDom::new();
    let viewer = dom.create_block("view_div", Rect::new(0.0, 0.0, 640.0, 480.0));
    let footer = dom.create_block("footer", Rect::ZERO);
    dom.append(dom.root(), viewer);
    dom.append(viewer, footer);

    let mut pane = ViewerPane::attach(dom, PaneConfig::classic()).unwrap();
    assert_eq!(pane.elements().anchor, None);
    pane.switch_content("a.png");
    let img = pane.host().element_by_id_str("img0").unwrap();
    assert_eq!(pane.host().children(viewer), &[footer, img]);
    assert_eq!(
        pane.host().element(img).unwrap().max_width,
        Some(MaxWidth::Percent(98.0))
    );
}

#[test]
fn missing_container_is_an_error() {
    let dom = MemoryDom::new();
    let err = ViewerPane::attach(dom, PaneConfig::default()).unwrap_err();
    assert!(matches!(err, PaneError::MissingElement { ref id } if id == "viewer"));
    assert_eq!(err.to_string(), "no element with id `viewer` in the page");
}

#[test]
fn explicit_elements_skip_id_lookup() {
    let Page {
        mut dom, summary, ..
    } = page();
    let other = dom.create_block("other", Rect::new(0.0, 0.0, 300.0, 300.0));
    dom.append(dom.root(), other);
    let mut pane = ViewerPane::new(
        dom,
        PaneElements::new(other, Some(summary)),
        PaneConfig::default(),
    );
    pane.switch_content("a.png");
    let img = pane.host().element_by_id_str("img0").unwrap();
    // The anchor lives in another container, so the image is appended.
    assert_eq!(pane.host().children(other), &[img]);
}

#[test]
fn start_screen_image_is_adopted_and_bound() {
    let Page {
        mut dom,
        viewer,
        summary,
    } = page();
    let logo = dom.create_image("img0", "img/logo.png").unwrap();
    dom.insert_before(&viewer, &logo, Some(&summary));

    let mut pane = ViewerPane::attach(dom, PaneConfig::default()).unwrap();
    assert_eq!(pane.active().map(ActiveContent::kind), Some(ContentKind::Image));
    assert_eq!(pane.active().unwrap().source(), "img/logo.png");
    assert!(pane.host().element(logo).unwrap().click_binding.is_some());

    pane.switch_content("next.png");
    assert_eq!(*pane.active().unwrap().node(), logo);
    assert_eq!(counts(&pane), (1, 0));
}

#[test]
fn start_screen_document_is_replaced_in_place() {
    let Page {
        mut dom,
        viewer,
        summary,
    } = page();
    let start = dom
        .create_document("html0", "start.html", DocumentSize::default())
        .unwrap();
    dom.insert_before(&viewer, &start, Some(&summary));

    let mut pane = ViewerPane::attach(dom, PaneConfig::default()).unwrap();
    assert_eq!(
        pane.active().map(ActiveContent::kind),
        Some(ContentKind::Document)
    );

    pane.switch_content("next.html");
    let doc = pane.host().element_by_id_str("html0").unwrap();
    assert_ne!(doc, start);
    assert!(!pane.host().is_alive(start));
    assert_eq!(pane.host().children(viewer), &[doc, summary]);
}

#[test]
fn start_screen_with_both_kinds_keeps_the_image() {
    let Page {
        mut dom,
        viewer,
        summary,
    } = page();
    let doc = dom
        .create_document("html0", "start.html", DocumentSize::default())
        .unwrap();
    let img = dom.create_image("img0", "logo.png").unwrap();
    dom.insert_before(&viewer, &doc, Some(&summary));
    dom.insert_before(&viewer, &img, Some(&summary));

    let pane = ViewerPane::attach(dom, PaneConfig::default()).unwrap();
    assert_eq!(counts(&pane), (1, 0));
    assert_eq!(*pane.active().unwrap().node(), img);
}

#[test]
fn release_click_unbinds_the_active_image() {
    let (mut pane, _, _) = pane();
    pane.switch_content("a.png");
    let img = *pane.active().unwrap().node();
    assert!(pane.host().element(img).unwrap().click_binding.is_some());

    pane.release_click();
    assert_eq!(pane.host().element(img).unwrap().click_binding, None);

    // Nothing to release while a document is shown.
    pane.switch_content("b.html");
    pane.release_click();
    assert_eq!(counts(&pane), (0, 1));
}

/// A [`MemoryDom`] whose element creation can be made to fail.
#[derive(Debug)]
struct FailingDom {
    dom: MemoryDom,
    refuse_creation: bool,
}

impl PaneHost for FailingDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.dom.element_by_id(id)
    }

    fn create_image(&mut self, id: &str, source: &str) -> Option<NodeId> {
        if self.refuse_creation {
            return None;
        }
        self.dom.create_image(id, source)
    }

    fn create_document(&mut self, id: &str, source: &str, size: DocumentSize) -> Option<NodeId> {
        if self.refuse_creation {
            return None;
        }
        self.dom.create_document(id, source, size)
    }

    fn insert_before(&mut self, parent: &NodeId, node: &NodeId, reference: Option<&NodeId>) {
        self.dom.insert_before(parent, node, reference);
    }

    fn replace_with(&mut self, old: &NodeId, new: &NodeId) {
        self.dom.replace_with(old, new);
    }

    fn remove(&mut self, node: &NodeId) {
        self.dom.remove(node);
    }

    fn source(&self, node: &NodeId) -> Option<String> {
        self.dom.source(node)
    }

    fn set_source(&mut self, node: &NodeId, source: &str) {
        self.dom.set_source(node, source);
    }

    fn set_width(&mut self, node: &NodeId, width: Option<f64>) {
        self.dom.set_width(node, width);
    }

    fn set_max_width(&mut self, node: &NodeId, max_width: MaxWidth) {
        self.dom.set_max_width(node, max_width);
    }

    fn bind_click(&mut self, node: &NodeId) {
        self.dom.bind_click(node);
    }

    fn unbind_click(&mut self, node: &NodeId) {
        self.dom.unbind_click(node);
    }

    fn client_width(&self, node: &NodeId) -> f64 {
        self.dom.client_width(node)
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        self.dom.bounding_rect(node)
    }

    fn scroll_size(&self, node: &NodeId) -> Size {
        self.dom.scroll_size(node)
    }

    fn offset_rect(&self, node: &NodeId) -> Rect {
        self.dom.offset_rect(node)
    }

    fn scroll_offset(&self, node: &NodeId) -> Point {
        self.dom.scroll_offset(node)
    }

    fn set_scroll_offset(&mut self, node: &NodeId, offset: Point) {
        self.dom.set_scroll_offset(node, offset);
    }
}

fn failing_pane() -> (ViewerPane<FailingDom>, NodeId) {
    let Page { dom, viewer, .. } = page();
    let host = FailingDom {
        dom,
        refuse_creation: false,
    };
    // Oversized documents so a shown document can be scrolled.
    let config = PaneConfig {
        document_size: DocumentSize::new(150.0, 150.0),
        ..PaneConfig::default()
    };
    (ViewerPane::attach(host, config).unwrap(), viewer)
}

fn failing_counts(pane: &ViewerPane<FailingDom>) -> (usize, usize) {
    let dom = &pane.host().dom;
    (
        dom.count_attached(ElementKind::Image),
        dom.count_attached(ElementKind::Document),
    )
}

/// Makes the content scrollable and scrolls it away from the origin.
fn scroll_away(pane: &mut ViewerPane<FailingDom>, viewer: NodeId) {
    if let Some(img) = pane.host().dom.element_by_id_str("img0") {
        pane.host_mut().set_max_width(&img, MaxWidth::None);
    }
    pane.host_mut()
        .set_scroll_offset(&viewer, Point::new(40.0, 30.0));
}

#[test]
fn failed_document_creation_keeps_the_shown_document() {
    let (mut pane, viewer) = failing_pane();
    pane.switch_content("a.html");
    let doc = *pane.active().unwrap().node();

    pane.host_mut().refuse_creation = true;
    scroll_away(&mut pane, viewer);
    assert_ne!(pane.host().scroll_offset(&viewer), Point::ORIGIN);
    assert_eq!(pane.switch_content("b.html"), ContentKind::Document);

    assert_eq!(failing_counts(&pane), (0, 1));
    assert_eq!(*pane.active().unwrap().node(), doc);
    assert_eq!(pane.active().unwrap().source(), "a.html");
    assert!(pane.host().dom.is_attached(doc));
    assert_eq!(pane.host().scroll_offset(&viewer), Point::ORIGIN);
}

#[test]
fn failed_image_creation_keeps_the_shown_document() {
    let (mut pane, viewer) = failing_pane();
    pane.switch_content("a.html");
    let doc = *pane.active().unwrap().node();

    pane.host_mut().refuse_creation = true;
    scroll_away(&mut pane, viewer);
    assert_eq!(pane.switch_content("b.png"), ContentKind::Image);

    assert_eq!(failing_counts(&pane), (0, 1));
    assert_eq!(*pane.active().unwrap().node(), doc);
    assert!(pane.zoom_state().is_none());
    assert_eq!(pane.host().scroll_offset(&viewer), Point::ORIGIN);
}

#[test]
fn failed_document_creation_keeps_the_shown_image() {
    let (mut pane, viewer) = failing_pane();
    pane.switch_content("big.png");
    let img = *pane.active().unwrap().node();

    pane.host_mut().refuse_creation = true;
    scroll_away(&mut pane, viewer);
    assert_ne!(pane.host().scroll_offset(&viewer), Point::ORIGIN);
    pane.switch_content("b.html");

    assert_eq!(failing_counts(&pane), (1, 0));
    assert_eq!(*pane.active().unwrap().node(), img);
    assert!(pane.host().dom.element(img).unwrap().click_binding.is_some());
    assert_eq!(pane.host().scroll_offset(&viewer), Point::ORIGIN);
}

#[test]
fn failed_creation_on_an_empty_pane_shows_nothing() {
    let (mut pane, viewer) = failing_pane();
    pane.host_mut().refuse_creation = true;
    pane.switch_content("a.png");
    pane.switch_content("a.html");

    assert!(pane.active().is_none());
    assert_eq!(failing_counts(&pane), (0, 0));
    assert_eq!(pane.host().scroll_offset(&viewer), Point::ORIGIN);
}
