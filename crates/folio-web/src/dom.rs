use glam::Vec2;
use instant::Instant;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(768.0) as f32;
    Vec2::new(w.max(1.0), h.max(1.0))
}

pub fn page_scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Milliseconds since module start; monotonic (performance.now under wasm).
pub fn now_ms() -> f64 {
    thread_local! {
        static EPOCH: Instant = Instant::now();
    }
    EPOCH.with(|epoch| epoch.elapsed().as_secs_f64() * 1000.0)
}

pub fn media_query_matches(window: &web::Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(mq)) if mq.matches())
}

/// Touch-capable or coarse-pointer device. Drives both the fusion device
/// class and the mobile gate for haptics.
pub fn is_touch_device(window: &web::Window) -> bool {
    let touch_points = window.navigator().max_touch_points();
    touch_points > 0 || media_query_matches(window, "(pointer: coarse)")
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    media_query_matches(window, "(prefers-reduced-motion: reduce)")
}

pub fn storage_get(window: &web::Window, key: &str) -> Option<String> {
    window.local_storage().ok().flatten()?.get_item(key).ok()?
}

pub fn storage_set(window: &web::Window, key: &str, value: &str) {
    if let Ok(Some(storage)) = window.local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("[dom] storage write failed for {key}");
        }
    }
}

/// Parse a float-valued data attribute, falling back on absence or garbage.
pub fn attr_f32(el: &web::Element, name: &str, default: f32) -> f32 {
    el.get_attribute(name)
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(default)
}
