use folio_core::{ObserverAction, ObserverConfig, ObserverMode, VisibilityState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// An IntersectionObserver attached to one element, feeding a shared
/// [`VisibilityState`]. Reveal-mode observation detaches itself after the
/// first intersection; cull-mode observation lives until drop. Dropping the
/// wrapper disconnects, so no observation outlives its owning binding.
pub struct Observer {
    inner: web::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Observer {
    pub fn attach(
        element: &web::Element,
        config: ObserverConfig,
        mode: ObserverMode,
        state: Rc<RefCell<VisibilityState>>,
        mut on_reveal: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let was_revealed = state.borrow().revealed();
                    let action = state
                        .borrow_mut()
                        .on_intersection(entry.is_intersecting(), mode);
                    if !was_revealed && state.borrow().revealed() {
                        on_reveal();
                    }
                    if action == ObserverAction::Detach {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(_, _)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());
        let inner = web::IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        inner.observe(element);
        Ok(Self {
            inner,
            _closure: closure,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}
