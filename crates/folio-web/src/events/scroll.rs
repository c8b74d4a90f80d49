use crate::dom;
use crate::state::PipelineState;
use crate::tasks::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Record the page offset; the frame tick consumes it, so a scroll-event
/// storm still costs one parallax recomputation per frame.
pub fn wire_scroll(window: &web::Window, state: Rc<RefCell<PipelineState>>) -> Option<Listener> {
    let w = window.clone();
    Listener::attach(window, "scroll", move |_| {
        let y = dom::page_scroll_y(&w);
        state.borrow_mut().pending.scroll_y = Some(y);
    })
}

/// Viewport changes feed the policy (mobile cutoff) and input normalization.
pub fn wire_resize(window: &web::Window, state: Rc<RefCell<PipelineState>>) -> Option<Listener> {
    let w = window.clone();
    Listener::attach(window, "resize", move |_| {
        let size = dom::viewport_size(&w);
        state.borrow_mut().viewport = size;
    })
}
