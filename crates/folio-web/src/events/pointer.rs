use crate::state::PipelineState;
use crate::tasks::Listener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the mouse on pointer-class devices. The handler only records the
/// normalized position; the frame tick consumes it, so any number of
/// mousemove events collapse into one update per frame.
pub fn wire_mouse(window: &web::Window, state: Rc<RefCell<PipelineState>>) -> Option<Listener> {
    Listener::attach(window, "mousemove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
            return;
        };
        let mut st = state.borrow_mut();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let normalized = st.normalize_mouse(client);
        st.pending.mouse = Some(normalized);
    })
}
