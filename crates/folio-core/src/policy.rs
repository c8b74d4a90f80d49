//! Adaptive animation policy.
//!
//! A pure function of the sampled performance tier, the static enabled flag
//! (site configuration AND the absence of a reduced-motion preference) and
//! the viewport width. Recomputed on every tier change, flag change and
//! resize; consumed by the parallax source and the transform compositor.

use crate::constants::MOBILE_MAX_WIDTH;
use crate::perf::PerfTier;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationPolicy {
    pub tier: PerfTier,
    pub user_enabled: bool,
    pub quality_factor: f32,
    pub should_animate: bool,
}

impl AnimationPolicy {
    pub fn derive(tier: PerfTier, user_enabled: bool, viewport_width: f32) -> Self {
        let low_power_mobile = tier == PerfTier::Low && viewport_width <= MOBILE_MAX_WIDTH;
        Self {
            tier,
            user_enabled,
            quality_factor: tier.quality_factor(),
            should_animate: user_enabled && !low_power_mobile,
        }
    }

    /// Policy for a session where the static flag is off: everything renders
    /// at rest and no loops are scheduled.
    pub fn disabled() -> Self {
        Self::derive(PerfTier::default(), false, 0.0)
    }
}

impl Default for AnimationPolicy {
    fn default() -> Self {
        Self::derive(PerfTier::default(), true, f32::MAX)
    }
}
