use crate::constants::{
    FPS_HISTORY_LEN, FPS_WINDOW_MS, QUALITY_HIGH, QUALITY_LOW, QUALITY_MEDIUM,
    SMOOTHING_TICK_MS, TIER_HIGH_MIN_FPS, TIER_MEDIUM_MIN_FPS,
};
use smallvec::SmallVec;

/// Discrete performance classification derived from the rolling average FPS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PerfTier {
    #[default]
    High,
    Medium,
    Low,
}

impl PerfTier {
    pub fn from_average_fps(avg: f32) -> Self {
        if avg >= TIER_HIGH_MIN_FPS {
            PerfTier::High
        } else if avg >= TIER_MEDIUM_MIN_FPS {
            PerfTier::Medium
        } else {
            PerfTier::Low
        }
    }

    /// Scalar attenuation applied to animation displacement under this tier.
    pub fn quality_factor(self) -> f32 {
        match self {
            PerfTier::High => QUALITY_HIGH,
            PerfTier::Medium => QUALITY_MEDIUM,
            PerfTier::Low => QUALITY_LOW,
        }
    }

    /// Period of the touch/orientation smoothing loops. Doubled when
    /// constrained, trading smoothness for CPU headroom.
    pub fn smoothing_interval_ms(self) -> f64 {
        match self {
            PerfTier::Low => SMOOTHING_TICK_MS * 2.0,
            _ => SMOOTHING_TICK_MS,
        }
    }
}

/// Measures rendering throughput from per-frame callbacks.
///
/// Each call to [`FrameSampler::on_frame`] counts one frame; once a window of
/// at least [`FPS_WINDOW_MS`] has elapsed the per-window FPS is pushed into a
/// fixed-capacity history and the tier is re-derived from the rolling mean.
pub struct FrameSampler {
    frames: u32,
    window_start_ms: f64,
    history: SmallVec<[f32; FPS_HISTORY_LEN]>,
    tier: PerfTier,
}

impl FrameSampler {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start_ms: now_ms,
            history: SmallVec::new(),
            tier: PerfTier::default(),
        }
    }

    /// Record one rendered frame. Returns the freshly derived tier when a
    /// measurement window closed, `None` otherwise.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<PerfTier> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        let fps = (self.frames as f64 * 1000.0 / elapsed).round() as f32;
        self.push_sample(fps);
        let prev = self.tier;
        self.tier = PerfTier::from_average_fps(self.average_fps());
        if self.tier != prev {
            log::info!("[perf] tier {:?} -> {:?} (avg {:.1} fps)", prev, self.tier, self.average_fps());
        }
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(self.tier)
    }

    pub fn tier(&self) -> PerfTier {
        self.tier
    }

    /// Arithmetic mean of the retained window samples; full quality until the
    /// first window closes.
    pub fn average_fps(&self) -> f32 {
        if self.history.is_empty() {
            return TIER_HIGH_MIN_FPS;
        }
        self.history.iter().sum::<f32>() / self.history.len() as f32
    }

    fn push_sample(&mut self, fps: f32) {
        if self.history.len() == FPS_HISTORY_LEN {
            self.history.remove(0);
        }
        self.history.push(fps);
    }
}

/// Idempotent on/off switch for the sampling loop. The frontend schedules its
/// frame callback only when `start` reports a state change, and cancels it
/// only when `stop` does, so repeated calls leave exactly one (or zero)
/// callbacks pending.
#[derive(Debug, Default)]
pub struct Monitor {
    active: bool,
}

impl Monitor {
    pub fn start(&mut self) -> bool {
        let started = !self.active;
        self.active = true;
        started
    }

    pub fn stop(&mut self) -> bool {
        let stopped = self.active;
        self.active = false;
        stopped
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
