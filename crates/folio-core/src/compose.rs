use crate::constants::{INTERACTION_RANGE_PX, TRANSITION_MS_LOW, TRANSITION_MS_NORMAL};
use crate::perf::PerfTier;
use crate::policy::AnimationPolicy;
use glam::Vec2;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("unknown size class '{0}'")]
pub struct SizeClassParseError(String);

/// Visual footprint of a decorative element. Larger elements move less and
/// are allowed less total travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub fn sensitivity(self) -> f32 {
        match self {
            SizeClass::Small => 1.2,
            SizeClass::Medium => 1.0,
            SizeClass::Large => 0.6,
        }
    }

    /// Per-axis travel bound in CSS pixels, before quality attenuation.
    pub fn max_displacement(self) -> f32 {
        match self {
            SizeClass::Small => 60.0,
            SizeClass::Medium => 45.0,
            SizeClass::Large => 30.0,
        }
    }
}

impl FromStr for SizeClass {
    type Err = SizeClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(SizeClass::Small),
            "medium" => Ok(SizeClass::Medium),
            "large" => Ok(SizeClass::Large),
            other => Err(SizeClassParseError(other.to_string())),
        }
    }
}

/// Per-element motion configuration, read from the element's data attributes.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    pub speed: f32,
    pub interaction_speed: f32,
    pub size: SizeClass,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed: 0.5,
            interaction_speed: 1.0,
            size: SizeClass::default(),
        }
    }
}

/// The transform to apply to one element this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementTransform {
    /// Static rest position: no transform, no transition.
    Rest,
    Animated { translate: Vec2, transition_ms: u32 },
}

impl ElementTransform {
    pub fn css_transform(&self) -> Option<String> {
        match self {
            ElementTransform::Rest => None,
            ElementTransform::Animated { translate, .. } => Some(format!(
                "translate3d({:.2}px, {:.2}px, 0)",
                translate.x, translate.y
            )),
        }
    }

    pub fn css_transition(&self) -> Option<String> {
        match self {
            ElementTransform::Rest => None,
            ElementTransform::Animated { transition_ms, .. } => {
                Some(format!("transform {}ms ease-out", transition_ms))
            }
        }
    }
}

/// Combine the scroll offset and the fused interaction vector into one
/// bounded translation.
///
/// Each axis is clamped independently to the size class's travel bound scaled
/// by the quality factor. Disabled animation renders at rest; under the Low
/// tier, off-screen elements skip the computation entirely.
pub fn compose(
    params: &MotionParams,
    scroll_offset: f32,
    interaction: Vec2,
    policy: &AnimationPolicy,
    in_view: bool,
) -> ElementTransform {
    if !policy.should_animate {
        return ElementTransform::Rest;
    }
    if policy.tier == PerfTier::Low && !in_view {
        return ElementTransform::Rest;
    }

    let gain = params.interaction_speed * params.size.sensitivity() * INTERACTION_RANGE_PX;
    let raw = Vec2::new(
        interaction.x * gain,
        scroll_offset + interaction.y * gain,
    );
    let bound = params.size.max_displacement() * policy.quality_factor;
    let translate = Vec2::new(raw.x.clamp(-bound, bound), raw.y.clamp(-bound, bound));

    let transition_ms = match policy.tier {
        PerfTier::Low => TRANSITION_MS_LOW,
        _ => TRANSITION_MS_NORMAL,
    };
    ElementTransform::Animated {
        translate,
        transition_ms,
    }
}
