// Host-side tests for the transform compositor.

use folio_core::{
    compose, AnimationPolicy, ElementTransform, MotionParams, ParallaxSource, PerfTier, SizeClass,
};
use glam::Vec2;

fn params(size: SizeClass) -> MotionParams {
    MotionParams {
        speed: 0.5,
        interaction_speed: 2.0,
        size,
    }
}

fn animated(t: ElementTransform) -> (Vec2, u32) {
    match t {
        ElementTransform::Animated {
            translate,
            transition_ms,
        } => (translate, transition_ms),
        ElementTransform::Rest => panic!("expected an animated transform"),
    }
}

#[test]
fn displacement_never_exceeds_size_bound() {
    // Extreme inputs across every size class and tier: the emitted
    // displacement stays within maxDisplacement * qualityFactor per axis.
    let inputs = [
        (Vec2::new(0.8, 0.8), 5000.0),
        (Vec2::new(-0.8, 0.8), -5000.0),
        (Vec2::new(0.8, -0.8), 120.0),
        (Vec2::new(0.01, -0.01), 0.0),
    ];
    for size in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
        for tier in [PerfTier::High, PerfTier::Medium, PerfTier::Low] {
            let policy = AnimationPolicy::derive(tier, true, 1440.0);
            let bound = size.max_displacement() * policy.quality_factor;
            for (interaction, scroll) in inputs {
                let (translate, _) = animated(compose(
                    &params(size),
                    scroll,
                    interaction,
                    &policy,
                    true,
                ));
                assert!(
                    translate.x.abs() <= bound + 1e-4,
                    "{size:?}/{tier:?}: x {} exceeds {bound}",
                    translate.x
                );
                assert!(
                    translate.y.abs() <= bound + 1e-4,
                    "{size:?}/{tier:?}: y {} exceeds {bound}",
                    translate.y
                );
            }
        }
    }
}

#[test]
fn small_elements_are_more_sensitive_than_large() {
    let policy = AnimationPolicy::derive(PerfTier::High, true, 1440.0);
    let interaction = Vec2::new(0.1, 0.0);
    let (small, _) = animated(compose(&params(SizeClass::Small), 0.0, interaction, &policy, true));
    let (large, _) = animated(compose(&params(SizeClass::Large), 0.0, interaction, &policy, true));
    assert!(
        small.x > large.x,
        "small {} should out-travel large {}",
        small.x,
        large.x
    );
    assert!((small.x / large.x - 1.2 / 0.6).abs() < 1e-3);
}

#[test]
fn disabled_policy_renders_at_rest() {
    let policy = AnimationPolicy::derive(PerfTier::High, false, 1440.0);
    let t = compose(&params(SizeClass::Medium), 300.0, Vec2::new(0.5, 0.5), &policy, true);
    assert_eq!(t, ElementTransform::Rest);
    assert_eq!(t.css_transform(), None);
    assert_eq!(t.css_transition(), None);
}

#[test]
fn low_tier_culls_offscreen_elements() {
    let low = AnimationPolicy::derive(PerfTier::Low, true, 1440.0);
    let t = compose(&params(SizeClass::Medium), 100.0, Vec2::new(0.2, 0.2), &low, false);
    assert_eq!(t, ElementTransform::Rest, "offscreen under Low tier skips work");
    let t = compose(&params(SizeClass::Medium), 100.0, Vec2::new(0.2, 0.2), &low, true);
    assert!(matches!(t, ElementTransform::Animated { .. }));

    // Offscreen elements still animate on healthier tiers.
    let high = AnimationPolicy::derive(PerfTier::High, true, 1440.0);
    let t = compose(&params(SizeClass::Medium), 100.0, Vec2::new(0.2, 0.2), &high, false);
    assert!(matches!(t, ElementTransform::Animated { .. }));
}

#[test]
fn transition_lengthens_under_low_tier() {
    let scroll = 10.0;
    let interaction = Vec2::new(0.1, 0.1);
    let (_, low_ms) = animated(compose(
        &params(SizeClass::Medium),
        scroll,
        interaction,
        &AnimationPolicy::derive(PerfTier::Low, true, 1440.0),
        true,
    ));
    let (_, high_ms) = animated(compose(
        &params(SizeClass::Medium),
        scroll,
        interaction,
        &AnimationPolicy::derive(PerfTier::High, true, 1440.0),
        true,
    ));
    assert!(low_ms > high_ms, "low {low_ms}ms must exceed high {high_ms}ms");
}

#[test]
fn css_strings_are_well_formed() {
    let t = ElementTransform::Animated {
        translate: Vec2::new(12.5, -6.0),
        transition_ms: 150,
    };
    assert_eq!(
        t.css_transform().unwrap(),
        "translate3d(12.50px, -6.00px, 0)"
    );
    assert_eq!(t.css_transition().unwrap(), "transform 150ms ease-out");
}

#[test]
fn scroll_offset_scales_with_speed_and_quality() {
    let source = ParallaxSource::new(0.4);
    let high = AnimationPolicy::derive(PerfTier::High, true, 1440.0);
    let medium = AnimationPolicy::derive(PerfTier::Medium, true, 1440.0);
    assert_eq!(source.offset(500.0, &high), 500.0 * 0.4);
    assert!((source.offset(500.0, &medium) - 500.0 * 0.4 * 0.7).abs() < 1e-3);
}

#[test]
fn scroll_offset_is_identically_zero_when_disabled() {
    let source = ParallaxSource::new(0.4);
    let off = AnimationPolicy::derive(PerfTier::High, false, 1440.0);
    for scroll in [0.0, 1.0, 250.0, 10_000.0] {
        assert_eq!(source.offset(scroll, &off), 0.0);
    }
}

#[test]
fn size_class_parses_from_attributes() {
    assert_eq!("small".parse::<SizeClass>().unwrap(), SizeClass::Small);
    assert_eq!("medium".parse::<SizeClass>().unwrap(), SizeClass::Medium);
    assert_eq!("large".parse::<SizeClass>().unwrap(), SizeClass::Large);
    assert!("huge".parse::<SizeClass>().is_err());
}
