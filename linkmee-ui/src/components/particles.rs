//! Decorative particle layer
//!
//! Present only once the engine is ready. Options follow the theme; each
//! change restarts the canvas with the new options. A load that resolves
//! after a newer one started is destroyed on arrival.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::state::host::{destroy_particles, load_particles};
use crate::state::use_page;

#[component]
pub fn ParticlesLayer() -> impl IntoView {
    let page = use_page();
    let layer = create_memo(move |_| {
        page.view
            .with(|v| v.as_ref().and_then(|v| v.effect_layer.clone()))
    });
    let node = create_node_ref::<html::Div>();
    let running: Rc<RefCell<Option<JsValue>>> = Rc::default();
    let generations = LoadGenerations::default();

    {
        let running = Rc::clone(&running);
        let generations = generations.clone();
        create_effect(move |_| {
            let Some(layer) = layer.get() else {
                return;
            };
            if node.get().is_none() {
                return;
            }
            let json = match layer.options.to_json() {
                Ok(json) => json,
                Err(e) => {
                    web_sys::console::warn_1(&format!("particle options: {}", e).into());
                    return;
                }
            };

            if let Some(previous) = running.borrow_mut().take() {
                destroy_particles(&previous);
            }
            let ticket = generations.begin();

            let running = Rc::clone(&running);
            let generations = generations.clone();
            spawn_local(async move {
                match load_particles(layer.mount_id, &json).await {
                    Ok(container) if !generations.is_current(ticket) => {
                        destroy_particles(&container)
                    }
                    Ok(container) => {
                        if let Some(previous) = running.borrow_mut().replace(container) {
                            destroy_particles(&previous);
                        }
                    }
                    Err(e) => web_sys::console::warn_1(&format!("particles: {}", e).into()),
                }
            });
        });
    }

    on_cleanup(move || {
        // Disown loads still in flight
        generations.invalidate();
        if let Some(container) = running.borrow_mut().take() {
            destroy_particles(&container);
        }
    });

    move || {
        layer.get().map(|layer| {
            view! { <div id=layer.mount_id node_ref=node class=layer.class /> }
        })
    }
}

/// Numbers particle loads so only the newest one keeps its canvas
#[derive(Clone, Default)]
struct LoadGenerations(Rc<Cell<u64>>);

impl LoadGenerations {
    fn begin(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }

    fn invalidate(&self) {
        self.0.set(self.0.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_supersedes_pending_one() {
        let generations = LoadGenerations::default();
        let dark = generations.begin();
        let light = generations.clone().begin();
        assert!(!generations.is_current(dark));
        assert!(generations.is_current(light));
    }

    #[test]
    fn test_cleanup_disowns_pending_load() {
        let generations = LoadGenerations::default();
        let ticket = generations.begin();
        generations.invalidate();
        assert!(!generations.is_current(ticket));
    }
}
