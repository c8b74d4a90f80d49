use crate::state::PipelineState;
use crate::tasks::Listener;
use folio_core::OrientationPermission;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Feed raw device tilt into the orientation tracker. Storing the latest
/// reading is the coalescing step; the smoothing loop consumes it at its own
/// cadence. gamma is left/right (x), beta front/back (y), alpha compass (z).
pub fn wire_orientation(
    window: &web::Window,
    state: Rc<RefCell<PipelineState>>,
) -> Option<Listener> {
    Listener::attach(window, "deviceorientation", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::DeviceOrientationEvent>() else {
            return;
        };
        let raw = Vec3::new(
            ev.gamma().unwrap_or(0.0) as f32,
            ev.beta().unwrap_or(0.0) as f32,
            ev.alpha().unwrap_or(0.0) as f32,
        );
        state.borrow_mut().fusion.orientation.update(raw);
    })
}

/// Run the one-shot permission request and record the terminal outcome.
/// Never called twice: the caller latches `permission_requested` first.
pub fn spawn_permission_request(state: Rc<RefCell<PipelineState>>) {
    spawn_local(async move {
        let outcome = request_permission().await;
        log::info!("[orientation] permission {outcome:?}");
        state.borrow_mut().fusion.set_permission(outcome);
    });
}

/// iOS gates `deviceorientation` behind `DeviceOrientationEvent.requestPermission`,
/// which only exists there. Platforms without the hook but with the event
/// just deliver it, so absence of the hook counts as granted; absence of the
/// whole constructor means there is no sensor to ask about.
async fn request_permission() -> OrientationPermission {
    let global = js_sys::global();
    let ctor = match js_sys::Reflect::get(&global, &JsValue::from_str("DeviceOrientationEvent")) {
        Ok(v) if !v.is_undefined() => v,
        _ => return OrientationPermission::Denied,
    };
    let request = match js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(v) => v,
        Err(_) => return OrientationPermission::Denied,
    };
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return OrientationPermission::Granted;
    };
    let promise = match request.call0(&ctor) {
        Ok(v) => match v.dyn_into::<js_sys::Promise>() {
            Ok(p) => p,
            Err(_) => return OrientationPermission::Denied,
        },
        Err(_) => return OrientationPermission::Denied,
    };
    match JsFuture::from(promise).await {
        Ok(v) if v.as_string().as_deref() == Some("granted") => OrientationPermission::Granted,
        Ok(_) => OrientationPermission::Denied,
        Err(e) => {
            log::warn!("[orientation] permission request failed: {e:?}");
            OrientationPermission::Denied
        }
    }
}
