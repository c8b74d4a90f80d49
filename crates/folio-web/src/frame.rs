use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Self-rescheduling requestAnimationFrame loop.
///
/// The tick closure is stored so each frame can reschedule itself; the
/// pending frame id is kept so `stop` can cancel it — after `stop` returns
/// no callback fires. Start/stop are no-ops when already in the requested
/// state, which keeps at most one callback pending.
pub struct FrameLoop {
    window: web::Window,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(window: &web::Window, mut on_tick: impl FnMut() + 'static) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None::<i32>));
        let running = Rc::new(Cell::new(false));

        let tick_inner = tick.clone();
        let raf_inner = raf_id.clone();
        let running_inner = running.clone();
        let window_inner = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_inner.set(None);
            if !running_inner.get() {
                return;
            }
            on_tick();
            // the tick itself may have stopped the loop
            if !running_inner.get() {
                return;
            }
            if let Some(cb) = tick_inner.borrow().as_ref() {
                if let Ok(id) = window_inner.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_inner.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            window: window.clone(),
            tick,
            raf_id,
            running,
        }
    }

    pub fn start(&self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        if let Some(cb) = self.tick.borrow().as_ref() {
            if let Ok(id) = self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.raf_id.set(Some(id));
            }
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}
