// Shared tuning constants used by both the core logic and the web frontend.

// Frame-rate sampling
pub const FPS_WINDOW_MS: f64 = 1000.0; // measurement window length
pub const FPS_HISTORY_LEN: usize = 10; // rolling-average sample count
pub const TIER_HIGH_MIN_FPS: f32 = 55.0;
pub const TIER_MEDIUM_MIN_FPS: f32 = 35.0;

// Animation quality per tier
pub const QUALITY_HIGH: f32 = 1.0;
pub const QUALITY_MEDIUM: f32 = 0.7;
pub const QUALITY_LOW: f32 = 0.4;
pub const MOBILE_MAX_WIDTH: f32 = 768.0; // Low tier below this width disables animation

// Interaction vector
pub const VECTOR_CLAMP: f32 = 0.8; // per-axis bound before screen scaling
pub const TOUCH_SMOOTHING: f32 = 0.1; // exponential follower coefficient
pub const TOUCH_RELEASE_DECAY: f32 = 0.92; // geometric return-to-center per tick
pub const TOUCH_RELEASE_EPSILON: f32 = 0.01; // snap-to-origin threshold
pub const ORIENT_SMOOTHING_XY: f32 = 0.08;
pub const ORIENT_SMOOTHING_Z: f32 = 0.05;
pub const ORIENT_SCALE_X: f32 = 0.15;
pub const ORIENT_SCALE_Y: f32 = 0.10;

// Screen-size attenuation of the fused vector
pub const NARROW_SCREEN_WIDTH: f32 = 400.0;
pub const NARROW_SCREEN_MULTIPLIER: f32 = 0.7;
pub const MEDIUM_SCREEN_WIDTH: f32 = 768.0;
pub const MEDIUM_SCREEN_MULTIPLIER: f32 = 0.85;

// Smoothing loop cadence; the period doubles under the Low tier
pub const SMOOTHING_TICK_MS: f64 = 16.0;

// Transform compositor
pub const INTERACTION_RANGE_PX: f32 = 100.0; // full-deflection travel before clamping
pub const TRANSITION_MS_LOW: u32 = 450; // longer easing masks the reduced cadence
pub const TRANSITION_MS_NORMAL: u32 = 150;

// Haptic cooldown windows per category
pub const HAPTIC_TOUCH_COOLDOWN_MS: f64 = 100.0;
pub const HAPTIC_MOVE_COOLDOWN_MS: f64 = 300.0;

// Visibility observation
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_THRESHOLD_COARSE: f64 = 0.3;
pub const REVEAL_MARGIN_PX: f64 = 50.0; // grows the root downward for earlier reveal
