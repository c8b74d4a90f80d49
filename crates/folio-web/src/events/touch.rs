use crate::events::orientation;
use crate::haptics::Haptics;
use crate::state::PipelineState;
use crate::tasks::Listener;
use folio_core::HapticPattern;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn first_touch_position(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().item(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Wire the touch lifecycle on touch-class devices.
///
/// touchstart/touchend drive the tracker's phase machine directly (discrete
/// transitions); touchmove is coalesced through the pending slot like mouse
/// and scroll. The first touch also triggers the lazy one-shot
/// device-orientation permission request.
pub fn wire_touch(
    window: &web::Window,
    state: Rc<RefCell<PipelineState>>,
    haptics: Rc<RefCell<Haptics>>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();

    {
        let state = state.clone();
        let haptics = haptics.clone();
        if let Some(l) = Listener::attach(window, "touchstart", move |ev: web::Event| {
            let Ok(ev) = ev.dyn_into::<web::TouchEvent>() else {
                return;
            };
            let Some(client) = first_touch_position(&ev) else {
                return;
            };
            let request_permission = {
                let mut st = state.borrow_mut();
                let normalized = st.normalize_touch(client);
                st.fusion.touch.begin(normalized);
                let wants = !st.permission_requested && st.fusion.wants_permission_request();
                if wants {
                    st.permission_requested = true;
                }
                wants
            };
            haptics.borrow_mut().pulse(HapticPattern::Touch);
            if request_permission {
                orientation::spawn_permission_request(state.clone());
            }
        }) {
            listeners.push(l);
        }
    }

    {
        let state = state.clone();
        let haptics = haptics.clone();
        if let Some(l) = Listener::attach(window, "touchmove", move |ev: web::Event| {
            let Ok(ev) = ev.dyn_into::<web::TouchEvent>() else {
                return;
            };
            let Some(client) = first_touch_position(&ev) else {
                return;
            };
            {
                let mut st = state.borrow_mut();
                let normalized = st.normalize_touch(client);
                st.pending.touch_move = Some(normalized);
            }
            // the move-category cooldown turns this stream into sparse ticks
            haptics.borrow_mut().pulse(HapticPattern::Gentle);
        }) {
            listeners.push(l);
        }
    }

    {
        let state = state.clone();
        let haptics = haptics.clone();
        if let Some(l) = Listener::attach(window, "touchend", move |_| {
            state.borrow_mut().fusion.touch.end();
            haptics.borrow_mut().pulse(HapticPattern::Release);
        }) {
            listeners.push(l);
        }
    }

    {
        if let Some(l) = Listener::attach(window, "touchcancel", move |_| {
            state.borrow_mut().fusion.touch.end();
        }) {
            listeners.push(l);
        }
    }

    listeners
}
