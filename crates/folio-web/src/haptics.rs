use crate::constants::STORAGE_KEY_HAPTICS;
use crate::dom;
use folio_core::{HapticController, HapticGate, HapticPattern};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Bridges the core haptic controller to `navigator.vibrate` and the
/// persisted preference. Vibration failures are logged and swallowed; a
/// broken motor must never break the interaction pipeline.
pub struct Haptics {
    window: web::Window,
    ctl: HapticController,
}

impl Haptics {
    pub fn init(window: &web::Window, mobile: bool) -> Self {
        let supported = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("vibrate"))
            .unwrap_or(false);
        let enabled = match dom::storage_get(window, STORAGE_KEY_HAPTICS).as_deref() {
            Some("false") => false,
            // absent or anything else: default on
            _ => true,
        };
        log::info!("[haptics] supported={supported} mobile={mobile} enabled={enabled}");
        Self {
            window: window.clone(),
            ctl: HapticController::new(HapticGate {
                supported,
                mobile,
                enabled,
            }),
        }
    }

    pub fn enabled(&self) -> bool {
        self.ctl.enabled()
    }

    /// Fire a catalogue pattern, subject to gating and cooldowns.
    pub fn pulse(&mut self, pattern: HapticPattern) {
        if let Some(pulses) = self.ctl.request(pattern, dom::now_ms()) {
            self.vibrate(pulses);
        }
    }

    /// Flip and persist the preference; pulses confirmation when enabling.
    pub fn toggle(&mut self) -> bool {
        let result = self.ctl.toggle();
        dom::storage_set(
            &self.window,
            STORAGE_KEY_HAPTICS,
            if result.enabled { "true" } else { "false" },
        );
        log::info!("[haptics] preference -> {}", result.enabled);
        if let Some(pulses) = result.confirm {
            self.vibrate(pulses);
        }
        result.enabled
    }

    fn vibrate(&self, pulses: &[u32]) {
        let sequence = js_sys::Array::new();
        for p in pulses {
            sequence.push(&JsValue::from_f64(*p as f64));
        }
        if !self
            .window
            .navigator()
            .vibrate_with_pattern(&JsValue::from(sequence))
        {
            log::warn!("[haptics] vibration call rejected");
        }
    }
}
