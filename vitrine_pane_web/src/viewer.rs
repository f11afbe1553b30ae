// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JavaScript entry points.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kurbo::Point;
use vitrine_pane::{PaneConfig, PaneElements, PaneError, ViewerPane};
use vitrine_zoom::{Click, Modifiers};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use crate::convert::config_from_json;
use crate::host::WebHost;

type SharedPane = Rc<RefCell<ViewerPane<WebHost>>>;

fn to_js(err: PaneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A viewer pane attached to the current page.
///
/// Exported to JavaScript as `WebViewer`. The pane is shared with the click
/// listener bound to the image; the listener holds a weak reference. Dropping
/// the last handle (or calling `free()` from JavaScript) also clears the
/// image's `onclick`, so later clicks do nothing.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebViewer {
    pane: SharedPane,
}

#[wasm_bindgen]
impl WebViewer {
    /// Attaches to the page, reading an optional JSON configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebViewer, JsValue> {
        let config = config_from_json(config_json.as_deref()).map_err(to_js)?;
        Self::with_config(config).map_err(to_js)
    }

    /// Shows `name` in the pane.
    #[wasm_bindgen(js_name = switchContent)]
    pub fn switch_content(&self, name: &str) {
        match self.pane.try_borrow_mut() {
            Ok(mut pane) => {
                pane.switch_content(name);
            }
            Err(_) => log::warn!("switchContent(`{name}`) re-entered while the pane was busy"),
        }
    }

    /// Number of zoom steps applied to the current image, or 0.
    #[wasm_bindgen(getter, js_name = zoomSteps)]
    pub fn zoom_steps(&self) -> u32 {
        self.pane
            .try_borrow()
            .ok()
            .and_then(|pane| pane.zoom_state().map(|state| state.step_count))
            .unwrap_or(0)
    }
}

impl WebViewer {
    /// Attaches to the page with an explicit configuration.
    pub fn with_config(config: PaneConfig) -> Result<Self, PaneError> {
        let mut host = WebHost::from_window()?;
        let elements = PaneElements::locate(&host, &config.ids)?;
        let pane = Rc::new_cyclic(|weak: &Weak<RefCell<ViewerPane<WebHost>>>| {
            host.set_click_listener(click_listener(weak.clone()));
            RefCell::new(ViewerPane::new(host, elements, config))
        });
        log::debug!("viewer attached");
        Ok(Self { pane })
    }

    /// The shared pane.
    #[must_use]
    pub fn pane(&self) -> &Rc<RefCell<ViewerPane<WebHost>>> {
        &self.pane
    }
}

impl Drop for WebViewer {
    fn drop(&mut self) {
        // The click closure dies with the host; `onclick` must not outlive it.
        if Rc::strong_count(&self.pane) > 1 {
            return;
        }
        match self.pane.try_borrow_mut() {
            Ok(mut pane) => pane.release_click(),
            Err(_) => log::warn!("viewer dropped while the pane was busy; image clicks will throw"),
        }
    }
}

fn click_listener(pane: Weak<RefCell<ViewerPane<WebHost>>>) -> Closure<dyn FnMut(MouseEvent)> {
    Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(pane) = pane.upgrade() else {
            return;
        };
        let Some(target) = event
            .current_target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let click = Click::new(
            Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
            Modifiers::from_keys(event.shift_key(), event.ctrl_key()),
        );
        match pane.try_borrow_mut() {
            Ok(mut pane) => {
                pane.click(&target, click);
            }
            Err(_) => log::warn!("click dropped while the pane was busy"),
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

thread_local! {
    static VIEWER: RefCell<Option<WebViewer>> = const { RefCell::new(None) };
}

/// Attaches the page-wide viewer used by [`switch_content`].
///
/// Exported as `installViewer`. Calling it again replaces the previous viewer.
#[wasm_bindgen(js_name = installViewer)]
pub fn install_viewer(config_json: Option<String>) -> Result<(), JsValue> {
    let viewer = WebViewer::new(config_json)?;
    VIEWER.with(|slot| *slot.borrow_mut() = Some(viewer));
    Ok(())
}

/// Shows `name` in the page-wide viewer.
///
/// Exported as `switchContent`, the function sidebar links call.
#[wasm_bindgen(js_name = switchContent)]
pub fn switch_content(name: &str) {
    VIEWER.with(|slot| match slot.borrow().as_ref() {
        Some(viewer) => viewer.switch_content(name),
        None => log::warn!("switchContent(`{name}`) called before installViewer"),
    });
}
