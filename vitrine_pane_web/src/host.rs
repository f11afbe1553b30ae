// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`PaneHost`] over real DOM elements.

use core::fmt;

use kurbo::{Point, Rect, Size};
use vitrine_pane::{DocumentSize, PaneError, PaneHost};
use vitrine_zoom::MaxWidth;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::convert::{css_max_width, css_number, css_percent};

/// A [`PaneHost`] backed by the page's `Document`.
///
/// DOM calls that throw are logged with `log::warn!` and otherwise ignored, so
/// the pane never sees an error after construction.
pub struct WebHost {
    document: Document,
    click_listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost")
            .field("has_click_listener", &self.click_listener.is_some())
            .finish_non_exhaustive()
    }
}

impl WebHost {
    /// Creates a host over `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            click_listener: None,
        }
    }

    /// Creates a host over the current window's document.
    pub fn from_window() -> Result<Self, PaneError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(PaneError::NoDocument)
    }

    /// Sets the listener [`PaneHost::bind_click`] installs as `onclick`.
    ///
    /// The host keeps the closure alive; dropping the host invalidates every
    /// binding made with it.
    pub fn set_click_listener(&mut self, listener: Closure<dyn FnMut(MouseEvent)>) {
        self.click_listener = Some(listener);
    }

    fn create(&self, tag: &str, id: &str) -> Option<HtmlElement> {
        let element = report("createElement", self.document.create_element(tag))?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        element.set_id(id);
        Some(element)
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Logs a thrown DOM exception and turns the result into an `Option`.
fn report<T>(op: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{op} failed: {}", describe(&err));
            None
        }
    }
}

fn source_attribute(node: &HtmlElement) -> &'static str {
    if node.tag_name().eq_ignore_ascii_case("object") {
        "data"
    } else {
        "src"
    }
}

impl PaneHost for WebHost {
    type Node = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn create_image(&mut self, id: &str, source: &str) -> Option<HtmlElement> {
        let image = self.create("img", id)?;
        report("set src", image.set_attribute("src", source))?;
        Some(image)
    }

    fn create_document(
        &mut self,
        id: &str,
        source: &str,
        size: DocumentSize,
    ) -> Option<HtmlElement> {
        let object = self.create("object", id)?;
        report("set data", object.set_attribute("data", source))?;
        report(
            "set width",
            object.set_attribute("width", &css_percent(size.width_percent)),
        )?;
        report(
            "set height",
            object.set_attribute("height", &css_percent(size.height_percent)),
        )?;
        Some(object)
    }

    fn insert_before(
        &mut self,
        parent: &HtmlElement,
        node: &HtmlElement,
        reference: Option<&HtmlElement>,
    ) {
        let parent_node: &web_sys::Node = parent.as_ref();
        // `insertBefore` throws when the reference is not a child; append instead.
        let reference: Option<&web_sys::Node> = reference
            .filter(|r| r.parent_node().is_some_and(|p| &p == parent_node))
            .map(AsRef::as_ref);
        report("insertBefore", parent_node.insert_before(node, reference));
    }

    fn replace_with(&mut self, old: &HtmlElement, new: &HtmlElement) {
        if let Some(parent) = old.parent_node() {
            report("replaceChild", parent.replace_child(new, old));
        }
    }

    fn remove(&mut self, node: &HtmlElement) {
        node.remove();
    }

    fn source(&self, node: &HtmlElement) -> Option<String> {
        node.get_attribute(source_attribute(node))
    }

    fn set_source(&mut self, node: &HtmlElement, source: &str) {
        report(
            "set source",
            node.set_attribute(source_attribute(node), source),
        );
    }

    fn set_width(&mut self, node: &HtmlElement, width: Option<f64>) {
        let result = match width {
            Some(width) => node.set_attribute("width", &css_number(width)),
            None => node.remove_attribute("width"),
        };
        report("set width", result);
    }

    fn set_max_width(&mut self, node: &HtmlElement, max_width: MaxWidth) {
        report(
            "set max-width",
            node.style()
                .set_property("max-width", &css_max_width(max_width)),
        );
    }

    fn bind_click(&mut self, node: &HtmlElement) {
        match &self.click_listener {
            // Assigning `onclick` replaces any previous handler.
            Some(listener) => {
                node.set_onclick(Some(listener.as_ref().unchecked_ref::<js_sys::Function>()));
            }
            None => log::warn!("no click listener installed; image clicks will be ignored"),
        }
    }

    fn unbind_click(&mut self, node: &HtmlElement) {
        node.set_onclick(None);
    }

    fn client_width(&self, node: &HtmlElement) -> f64 {
        f64::from(node.client_width())
    }

    fn bounding_rect(&self, node: &HtmlElement) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn scroll_size(&self, node: &HtmlElement) -> Size {
        Size::new(
            f64::from(node.scroll_width()),
            f64::from(node.scroll_height()),
        )
    }

    fn offset_rect(&self, node: &HtmlElement) -> Rect {
        Rect::from_origin_size(
            (f64::from(node.offset_left()), f64::from(node.offset_top())),
            (f64::from(node.offset_width()), f64::from(node.offset_height())),
        )
    }

    fn scroll_offset(&self, node: &HtmlElement) -> Point {
        Point::new(f64::from(node.scroll_left()), f64::from(node.scroll_top()))
    }

    fn set_scroll_offset(&mut self, node: &HtmlElement, offset: Point) {
        node.scroll_to_with_x_and_y(offset.x, offset.y);
    }
}
