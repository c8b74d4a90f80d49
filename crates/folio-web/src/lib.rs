#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod haptics;
mod keywords;
mod sections;
mod state;
mod tasks;
mod visibility;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<app::App>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match app::App::mount() {
        Ok(instance) => {
            APP.with(|slot| *slot.borrow_mut() = Some(instance));
            if let Some(window) = web::window() {
                wire_page_exit(&window);
            }
        }
        Err(e) => log::error!("mount error: {e:?}"),
    }
    Ok(())
}

/// Tear the pipeline down: every listener, timer, frame callback and
/// observer is cancelled. Idempotent; safe to call from the page shell
/// before replacing the document.
#[wasm_bindgen]
pub fn unmount() {
    APP.with(|slot| {
        if let Some(instance) = slot.borrow_mut().take() {
            instance.borrow_mut().teardown();
        }
    });
}

// The pagehide listener itself is deliberately leaked: it exists to run the
// teardown as the document goes away, so there is no later point to remove it.
fn wire_page_exit(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move || unmount()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
