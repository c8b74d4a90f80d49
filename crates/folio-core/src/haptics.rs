use crate::constants::{HAPTIC_MOVE_COOLDOWN_MS, HAPTIC_TOUCH_COOLDOWN_MS};
use fnv::FnvHashMap;

/// Named vibration intensities. Callers pick from the catalogue; arbitrary
/// patterns are not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticPattern {
    Touch,
    Release,
    LongPress,
    Error,
    Success,
    Gentle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CooldownCategory {
    /// Pulses fired on touch-start style events.
    TouchStart,
    /// Pulses fired repeatedly while the pointer moves.
    Move,
    /// Discrete feedback with no rate limit of its own.
    General,
}

impl CooldownCategory {
    fn window_ms(self) -> f64 {
        match self {
            CooldownCategory::TouchStart => HAPTIC_TOUCH_COOLDOWN_MS,
            CooldownCategory::Move => HAPTIC_MOVE_COOLDOWN_MS,
            CooldownCategory::General => 0.0,
        }
    }
}

impl HapticPattern {
    /// Pulse sequence in milliseconds (vibrate/pause alternation).
    pub fn pulses(self) -> &'static [u32] {
        match self {
            HapticPattern::Touch => &[10],
            HapticPattern::Release => &[5],
            HapticPattern::LongPress => &[15, 10, 15],
            HapticPattern::Error => &[50, 30, 50],
            HapticPattern::Success => &[10, 20, 10],
            HapticPattern::Gentle => &[3],
        }
    }

    pub fn category(self) -> CooldownCategory {
        match self {
            HapticPattern::Touch => CooldownCategory::TouchStart,
            HapticPattern::Gentle => CooldownCategory::Move,
            _ => CooldownCategory::General,
        }
    }
}

/// The three independent conditions that must all hold for any pulse to fire.
#[derive(Clone, Copy, Debug)]
pub struct HapticGate {
    /// Platform exposes a vibration capability.
    pub supported: bool,
    /// Device is mobile-class; desktop browsers ignore vibration anyway.
    pub mobile: bool,
    /// Persisted user preference.
    pub enabled: bool,
}

impl HapticGate {
    pub fn allows(&self) -> bool {
        self.supported && self.mobile && self.enabled
    }
}

/// Result of flipping the haptic preference.
#[derive(Clone, Copy, Debug)]
pub struct HapticToggle {
    pub enabled: bool,
    /// Confirmation pulse, present only on the off-to-on transition.
    pub confirm: Option<&'static [u32]>,
}

/// Decides whether a requested pulse may fire, applying the gate and the
/// per-category cooldown windows. The actual vibration call and preference
/// persistence live in the frontend.
pub struct HapticController {
    gate: HapticGate,
    last_fired: FnvHashMap<CooldownCategory, f64>,
}

impl HapticController {
    pub fn new(gate: HapticGate) -> Self {
        Self {
            gate,
            last_fired: FnvHashMap::default(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.gate.enabled
    }

    pub fn gate(&self) -> HapticGate {
        self.gate
    }

    /// Returns the pulse sequence to emit, or `None` when gated or cooling
    /// down. A granted request records the fire time for its category.
    pub fn request(&mut self, pattern: HapticPattern, now_ms: f64) -> Option<&'static [u32]> {
        if !self.gate.allows() {
            return None;
        }
        let category = pattern.category();
        let window = category.window_ms();
        if window > 0.0 {
            if let Some(last) = self.last_fired.get(&category) {
                if now_ms - last < window {
                    return None;
                }
            }
        }
        self.last_fired.insert(category, now_ms);
        Some(pattern.pulses())
    }

    /// Flip the preference. The confirmation pulse fires only when turning
    /// haptics on, and bypasses the cooldown table (it is its own event).
    pub fn toggle(&mut self) -> HapticToggle {
        self.gate.enabled = !self.gate.enabled;
        let confirm = if self.gate.enabled && self.gate.supported && self.gate.mobile {
            Some(HapticPattern::Success.pulses())
        } else {
            None
        };
        HapticToggle {
            enabled: self.gate.enabled,
            confirm,
        }
    }
}
