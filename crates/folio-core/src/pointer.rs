use crate::constants::{
    MEDIUM_SCREEN_MULTIPLIER, MEDIUM_SCREEN_WIDTH, NARROW_SCREEN_MULTIPLIER, NARROW_SCREEN_WIDTH,
    ORIENT_SCALE_X, ORIENT_SCALE_Y, ORIENT_SMOOTHING_XY, ORIENT_SMOOTHING_Z, TOUCH_RELEASE_DECAY,
    TOUCH_RELEASE_EPSILON, TOUCH_SMOOTHING, VECTOR_CLAMP,
};
use crate::policy::AnimationPolicy;
use glam::{Vec2, Vec3};

/// Broad input capability of the host device, probed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Mouse/trackpad device: the raw pointer drives the vector directly.
    Pointer,
    /// Touch-capable or narrow device: touch and tilt compete by priority.
    Touch,
}

/// The single source currently feeding the interaction vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSource {
    None,
    Mouse,
    Touch,
    Orientation,
}

/// Outcome of the one-shot device-orientation permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrientationPermission {
    #[default]
    NotRequested,
    Granted,
    /// Denied or unavailable; terminal for the session, never re-prompted.
    Denied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchPhase {
    #[default]
    Idle,
    Active,
    Releasing,
}

/// Active-touch follower with inertial return-to-center.
///
/// While a touch is down the smoothed position eases toward the raw one.
/// On release the raw position decays geometrically toward the origin each
/// tick until both components are within [`TOUCH_RELEASE_EPSILON`], at which
/// point it snaps to exactly zero and the tracker goes idle.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    raw: Vec2,
    smoothed: Vec2,
    phase: TouchPhase,
}

impl TouchTracker {
    /// Enter the Active phase. A touch landing mid-release discards the decay.
    pub fn begin(&mut self, pos: Vec2) {
        self.raw = clamp_axes(pos);
        self.phase = TouchPhase::Active;
    }

    pub fn movement(&mut self, pos: Vec2) {
        if self.phase == TouchPhase::Active {
            self.raw = clamp_axes(pos);
        }
    }

    pub fn end(&mut self) {
        if self.phase == TouchPhase::Active {
            self.phase = TouchPhase::Releasing;
        }
    }

    /// One smoothing step, driven by the fixed-period smoothing loop.
    pub fn tick(&mut self) {
        if self.phase == TouchPhase::Releasing {
            self.raw *= TOUCH_RELEASE_DECAY;
            if self.raw.x.abs() < TOUCH_RELEASE_EPSILON && self.raw.y.abs() < TOUCH_RELEASE_EPSILON
            {
                self.raw = Vec2::ZERO;
                self.smoothed = Vec2::ZERO;
                self.phase = TouchPhase::Idle;
                return;
            }
        }
        self.smoothed += (self.raw - self.smoothed) * TOUCH_SMOOTHING;
    }

    /// True while the tracker should own the fused vector (touch down, or
    /// still easing back to center).
    pub fn is_engaged(&self) -> bool {
        self.phase != TouchPhase::Idle
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }
}

/// Device-tilt follower. Slower coefficients than touch; z (compass) slower
/// still since it only modulates depth layers.
#[derive(Clone, Debug, Default)]
pub struct OrientationTracker {
    raw: Vec3,
    smoothed: Vec3,
}

impl OrientationTracker {
    pub fn update(&mut self, raw: Vec3) {
        self.raw = raw;
    }

    pub fn tick(&mut self) {
        self.smoothed.x += (self.raw.x - self.smoothed.x) * ORIENT_SMOOTHING_XY;
        self.smoothed.y += (self.raw.y - self.smoothed.y) * ORIENT_SMOOTHING_XY;
        self.smoothed.z += (self.raw.z - self.smoothed.z) * ORIENT_SMOOTHING_Z;
    }

    pub fn smoothed(&self) -> Vec3 {
        self.smoothed
    }
}

/// Attenuates the fused vector on smaller screens, where the same normalized
/// deflection would otherwise read as a larger relative motion.
#[inline]
pub fn screen_multiplier(viewport_width: f32) -> f32 {
    if viewport_width < NARROW_SCREEN_WIDTH {
        NARROW_SCREEN_MULTIPLIER
    } else if viewport_width < MEDIUM_SCREEN_WIDTH {
        MEDIUM_SCREEN_MULTIPLIER
    } else {
        1.0
    }
}

#[inline]
fn clamp_axes(v: Vec2) -> Vec2 {
    Vec2::new(
        v.x.clamp(-VECTOR_CLAMP, VECTOR_CLAMP),
        v.y.clamp(-VECTOR_CLAMP, VECTOR_CLAMP),
    )
}

/// Fuses mouse, touch and device-tilt input into one normalized 2D vector.
///
/// Exactly one source is active at a time, chosen by [`PointerFusion::active_source`]:
/// on touch-class devices an engaged touch always wins, then granted
/// orientation, else nothing; pointer-class devices always follow the mouse.
pub struct PointerFusion {
    device: DeviceClass,
    pub touch: TouchTracker,
    pub orientation: OrientationTracker,
    permission: OrientationPermission,
    mouse: Vec2,
}

impl PointerFusion {
    pub fn new(device: DeviceClass) -> Self {
        Self {
            device,
            touch: TouchTracker::default(),
            orientation: OrientationTracker::default(),
            permission: OrientationPermission::default(),
            mouse: Vec2::ZERO,
        }
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Store the mouse offset from screen center, already normalized by the
    /// viewport dimensions (so full-right is x = 0.5).
    pub fn set_mouse(&mut self, normalized_offset: Vec2) {
        self.mouse = clamp_axes(normalized_offset);
    }

    pub fn permission(&self) -> OrientationPermission {
        self.permission
    }

    /// Record the permission outcome. One-shot: a terminal state is never
    /// overwritten, so a late grant after a denial cannot re-enable tilt.
    pub fn set_permission(&mut self, outcome: OrientationPermission) {
        if self.permission == OrientationPermission::NotRequested {
            self.permission = outcome;
        }
    }

    /// Whether the frontend should issue the lazy permission request now.
    pub fn wants_permission_request(&self) -> bool {
        self.device == DeviceClass::Touch && self.permission == OrientationPermission::NotRequested
    }

    /// Priority function selecting the single active source.
    pub fn active_source(&self) -> ActiveSource {
        match self.device {
            DeviceClass::Pointer => ActiveSource::Mouse,
            DeviceClass::Touch => {
                if self.touch.is_engaged() {
                    ActiveSource::Touch
                } else if self.permission == OrientationPermission::Granted {
                    ActiveSource::Orientation
                } else {
                    ActiveSource::None
                }
            }
        }
    }

    /// Advance both smoothing followers by one tick.
    pub fn tick(&mut self) {
        self.touch.tick();
        self.orientation.tick();
    }

    /// The fused interaction vector for this frame.
    pub fn vector(&self, viewport_width: f32, policy: &AnimationPolicy) -> Vec2 {
        let mult = screen_multiplier(viewport_width);
        match self.active_source() {
            ActiveSource::Touch => clamp_axes(self.touch.smoothed()) * mult,
            ActiveSource::Orientation => {
                let tilt = self.orientation.smoothed();
                clamp_axes(Vec2::new(tilt.x * ORIENT_SCALE_X, tilt.y * ORIENT_SCALE_Y)) * mult
            }
            ActiveSource::Mouse => clamp_axes(self.mouse * policy.quality_factor),
            ActiveSource::None => Vec2::ZERO,
        }
    }
}
