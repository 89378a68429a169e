//! Browser Hosts
//!
//! Pointer events from `window` and the tsParticles engine, which is a
//! global loaded by a `<script>` tag in `index.html`.

use std::cell::RefCell;

use js_sys::{Function, Object, Promise, Reflect, JSON};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use linkmee::effects::EffectError;
use linkmee::page::{
    Bounds, EffectCallback, EffectEngine, PointerHandler, PointerSample, PointerSource,
};

/// Mouse moves over the page container
pub struct WindowPointerSource {
    container: NodeRef<html::Div>,
}

impl WindowPointerSource {
    pub fn new(container: NodeRef<html::Div>) -> Self {
        Self { container }
    }
}

impl PointerSource for WindowPointerSource {
    type Subscription = WindowListenerHandle;

    fn subscribe(&self, handler: PointerHandler) -> WindowListenerHandle {
        let container = self.container;
        let handler = RefCell::new(handler);

        window_event_listener(ev::mousemove, move |event| {
            let bounds = container.get_untracked().map(|el| bounds_of(&el));
            let (x, y) = (event.client_x() as f64, event.client_y() as f64);
            if bounds.is_some_and(|b| !b.contains(x, y)) {
                return;
            }
            (handler.borrow_mut())(PointerSample {
                client_x: x,
                client_y: y,
                bounds,
            });
        })
    }

    fn unsubscribe(&self, handle: WindowListenerHandle) {
        handle.remove();
    }
}

pub fn bounds_of(element: &web_sys::Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// `loadSlim(tsParticles)`, once per page
pub struct TsParticlesEngine;

impl EffectEngine for TsParticlesEngine {
    fn start(&self, on_done: EffectCallback) {
        spawn_local(async move {
            on_done(load_engine().await);
        });
    }
}

async fn load_engine() -> Result<(), EffectError> {
    let engine = global("tsParticles")?;
    let load_slim: Function = global("loadSlim")?
        .dyn_into()
        .map_err(|_| EffectError::Unavailable("`loadSlim` is not a function".into()))?;

    let pending = load_slim
        .call1(&JsValue::NULL, &engine)
        .map_err(|e| EffectError::Setup(describe(&e)))?;
    JsFuture::from(Promise::resolve(&pending))
        .await
        .map_err(|e| EffectError::Setup(describe(&e)))?;
    Ok(())
}

/// Start a particle canvas in the element with `id`. Resolves to the
/// engine's container handle.
pub async fn load_particles(id: &str, options_json: &str) -> Result<JsValue, EffectError> {
    let engine = global("tsParticles")?;
    let load: Function = Reflect::get(&engine, &JsValue::from_str("load"))
        .and_then(|f| f.dyn_into::<Function>())
        .map_err(|_| EffectError::Unavailable("`tsParticles.load` is missing".into()))?;

    let options = JSON::parse(options_json).map_err(|e| EffectError::Options(describe(&e)))?;
    let params = Object::new();
    Reflect::set(&params, &JsValue::from_str("id"), &JsValue::from_str(id))
        .and_then(|_| Reflect::set(&params, &JsValue::from_str("options"), &options))
        .map_err(|e| EffectError::Options(describe(&e)))?;

    let pending = load
        .call1(&engine, &params)
        .map_err(|e| EffectError::Setup(describe(&e)))?;
    JsFuture::from(Promise::resolve(&pending))
        .await
        .map_err(|e| EffectError::Setup(describe(&e)))
}

pub fn destroy_particles(container: &JsValue) {
    let destroy = Reflect::get(container, &JsValue::from_str("destroy"))
        .and_then(|f| f.dyn_into::<Function>());
    if let Ok(destroy) = destroy {
        let _ = destroy.call0(container);
    }
}

fn global(name: &str) -> Result<JsValue, EffectError> {
    let window = web_sys::window().ok_or_else(|| EffectError::Unavailable("no window".into()))?;
    let value = Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|e| EffectError::Unavailable(describe(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Err(EffectError::Unavailable(format!("`{}` is not loaded", name)));
    }
    Ok(value)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
