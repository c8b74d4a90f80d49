use folio_core::{AnimationPolicy, DeviceClass, FrameSampler, Monitor, PointerFusion};
use glam::Vec2;

/// Latest raw input per source, coalesced to one processed update per frame.
/// Handlers overwrite; the frame tick takes and applies. A populated slot is
/// the "pending" flag and the payload in one.
#[derive(Default)]
pub struct PendingInput {
    pub mouse: Option<Vec2>,
    pub touch_move: Option<Vec2>,
    pub scroll_y: Option<f32>,
}

/// Shared mutable pipeline state. Everything the event handlers, smoothing
/// loops and frame tick touch lives here, behind one `Rc<RefCell<_>>`.
pub struct PipelineState {
    pub sampler: FrameSampler,
    pub monitor: Monitor,
    pub policy: AnimationPolicy,
    pub user_enabled: bool,
    pub fusion: PointerFusion,
    pub viewport: Vec2,
    pub scroll_y: f32,
    pub pending: PendingInput,
    /// Set before the async orientation-permission request is spawned so a
    /// second touch cannot double-prompt while it is in flight.
    pub permission_requested: bool,
}

impl PipelineState {
    pub fn new(device: DeviceClass, user_enabled: bool, viewport: Vec2, now_ms: f64) -> Self {
        let sampler = FrameSampler::new(now_ms);
        let policy = AnimationPolicy::derive(sampler.tier(), user_enabled, viewport.x);
        Self {
            sampler,
            monitor: Monitor::default(),
            policy,
            user_enabled,
            fusion: PointerFusion::new(device),
            viewport,
            scroll_y: 0.0,
            pending: PendingInput::default(),
            permission_requested: false,
        }
    }

    /// Mouse offset from screen center, normalized by the full viewport
    /// extent (full-right is x = 0.5).
    pub fn normalize_mouse(&self, client: Vec2) -> Vec2 {
        (client - self.viewport * 0.5) / self.viewport
    }

    /// Touch offset from screen center over the half extent (full-right is
    /// x = 1), clamped later by the tracker.
    pub fn normalize_touch(&self, client: Vec2) -> Vec2 {
        (client - self.viewport * 0.5) / (self.viewport * 0.5)
    }
}
