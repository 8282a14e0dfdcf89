//! Browser entry points for the skills cloud.
//!
//! Stateless helpers return JSON strings; `SkillCloud` keeps a catalog and tab
//! selection for a mounted view and can track the mouse over its container.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::catalog::Catalog;
use crate::cloud::{self, SkillCloud};
use crate::layout::SizeF;
use crate::output::CloudOutput;
use crate::pointer::{PointF, PointerLease, PointerState, SharedPointer};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!("panic at {}:{}:{}: {info}", loc.file(), loc.line(), loc.column()),
                None => format!("panic: {info}"),
            };
            console_error(&msg);
        }));
    });
}

/// The built-in catalog as a JSON array.
#[wasm_bindgen]
pub fn default_catalog() -> String {
    serde_json::to_string(&Catalog::default()).unwrap_or_else(|_| "[]".to_string())
}

/// Category tab descriptors, "all" first.
#[wasm_bindgen]
pub fn categories() -> String {
    serde_json::to_string(&Catalog::categories()).unwrap_or_else(|_| "[]".to_string())
}

#[wasm_bindgen]
pub fn level_legend() -> String {
    serde_json::to_string(&Catalog::legend()).unwrap_or_else(|_| "[]".to_string())
}

/// One-shot layout. An empty `catalog_json` uses the built-in catalog;
/// NaN pointer coordinates mean "no pointer yet".
#[wasm_bindgen]
pub fn layout_skills(
    catalog_json: &str,
    category: &str,
    pointer_x: f64,
    pointer_y: f64,
    width: f64,
    height: f64,
) -> String {
    install_panic_hook();
    let pointer = PointerState::at(pointer_x, pointer_y);
    match cloud::render_once(catalog_json, category, &pointer, SizeF::new(width, height)) {
        Ok(output) => output.to_json(),
        Err(e) => {
            console_error(&format!("Error laying out skills: {}", e));
            CloudOutput::from_error(&e, &Default::default()).to_json()
        }
    }
}

/// Stateful cloud for a mounted skills view.
#[wasm_bindgen(js_name = SkillCloud)]
pub struct JsSkillCloud {
    inner: SkillCloud,
    pointer: SharedPointer,
}

#[wasm_bindgen(js_class = SkillCloud)]
impl JsSkillCloud {
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, config_json: &str) -> Result<JsSkillCloud, JsValue> {
        install_panic_hook();
        let inner = SkillCloud::from_json(catalog_json, config_json).map_err(|e| {
            console_error(&format!("Error creating skill cloud: {}", e));
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self { inner, pointer: SharedPointer::new() })
    }

    /// Switch tabs. Returns false (and keeps the current tab) for unknown ids.
    pub fn set_category(&mut self, category: &str) -> bool {
        match self.inner.set_category(Some(category)) {
            Ok(()) => true,
            Err(e) => {
                console_error(&format!("Error switching category: {}", e));
                false
            }
        }
    }

    /// Pointer position relative to the container, for hosts that track it themselves.
    pub fn set_pointer(&self, x: f64, y: f64) {
        self.pointer.set(PointerState::at(x, y));
    }

    pub fn clear_pointer(&self) {
        self.pointer.clear();
    }

    /// Track `mousemove` on `container` until the returned subscription is freed.
    /// Several subscriptions may be live; the pointer resets when the last goes.
    pub fn attach(&self, container: &Element) -> Result<PointerSubscription, JsValue> {
        PointerSubscription::attach(container, &self.pointer)
    }

    pub fn live_subscriptions(&self) -> usize {
        self.pointer.live_leases()
    }

    pub fn render(&self, width: f64, height: f64) -> String {
        self.inner.render(&self.pointer.get(), SizeF::new(width, height)).to_json()
    }
}

/// A live `mousemove` listener. Dropping it (or calling `detach`/`free` from
/// JS) removes the listener and releases its pointer lease.
#[wasm_bindgen]
pub struct PointerSubscription {
    target: Element,
    listener: Closure<dyn FnMut(MouseEvent)>,
    _lease: PointerLease,
}

impl PointerSubscription {
    fn attach(target: &Element, pointer: &SharedPointer) -> Result<Self, JsValue> {
        let element = target.clone();
        let cell = pointer.clone();
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = element.get_bounding_client_rect();
            cell.set(PointerState::from_client(
                PointF::new(event.client_x() as f64, event.client_y() as f64),
                PointF::new(rect.left(), rect.top()),
            ));
        });
        target.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), listener, _lease: pointer.lease() })
    }
}

#[wasm_bindgen]
impl PointerSubscription {
    pub fn detach(self) {}
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("mousemove", self.listener.as_ref().unchecked_ref())
        {
            console_error(&format!("Error removing pointer listener: {:?}", e));
        }
    }
}
