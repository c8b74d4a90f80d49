// Host-side tests for the frame-rate sampler and the derived policy.

use folio_core::constants::{FPS_HISTORY_LEN, MOBILE_MAX_WIDTH};
use folio_core::{AnimationPolicy, FrameSampler, Monitor, PerfTier};

/// Drive the sampler through one full window at the given frame rate and
/// return the tier it reports at the window boundary.
fn run_window(sampler: &mut FrameSampler, start_ms: f64, fps: u32) -> PerfTier {
    let step = 1000.0 / fps as f64;
    let mut now = start_ms;
    // Frames arrive at the given cadence until the window closes; two
    // windows' worth is always enough to cross the boundary.
    for _ in 0..(fps * 2) {
        now += step;
        if let Some(tier) = sampler.on_frame(now) {
            return tier;
        }
    }
    panic!("window never closed at {fps}fps");
}

#[test]
fn tier_is_step_function_of_average() {
    assert_eq!(PerfTier::from_average_fps(60.0), PerfTier::High);
    assert_eq!(PerfTier::from_average_fps(55.0), PerfTier::High);
    assert_eq!(PerfTier::from_average_fps(54.9), PerfTier::Medium);
    assert_eq!(PerfTier::from_average_fps(40.0), PerfTier::Medium);
    assert_eq!(PerfTier::from_average_fps(35.0), PerfTier::Medium);
    assert_eq!(PerfTier::from_average_fps(34.9), PerfTier::Low);
    assert_eq!(PerfTier::from_average_fps(20.0), PerfTier::Low);
}

#[test]
fn sampler_reports_no_tier_inside_window() {
    let mut sampler = FrameSampler::new(0.0);
    for i in 1..60 {
        let at = i as f64 * 16.0; // stays under the 1000ms boundary
        assert_eq!(sampler.on_frame(at), None, "no window close at {at}ms");
    }
}

#[test]
fn sampler_derives_tier_from_sustained_rate() {
    let mut sampler = FrameSampler::new(0.0);
    let mut start = 0.0;
    for _ in 0..3 {
        let tier = run_window(&mut sampler, start, 60);
        assert_eq!(tier, PerfTier::High);
        start += 1000.0;
    }

    let mut sampler = FrameSampler::new(0.0);
    let mut start = 0.0;
    let mut tier = PerfTier::High;
    // Sustained 20fps must eventually drag the average below Medium.
    for _ in 0..FPS_HISTORY_LEN {
        tier = run_window(&mut sampler, start, 20);
        start += 1000.0;
    }
    assert_eq!(tier, PerfTier::Low);
}

#[test]
fn rolling_average_is_mean_of_last_samples() {
    let mut sampler = FrameSampler::new(0.0);
    let mut start = 0.0;
    // Fill the history beyond capacity with alternating rates; average must
    // track only the retained window.
    for i in 0..(FPS_HISTORY_LEN + 5) {
        let fps = if i % 2 == 0 { 60 } else { 30 };
        run_window(&mut sampler, start, fps);
        start += 1100.0;
    }
    let avg = sampler.average_fps();
    assert!(
        avg > 30.0 && avg < 60.0,
        "average {avg} should lie between the alternating rates"
    );
}

#[test]
fn monitor_start_stop_is_idempotent() {
    let mut monitor = Monitor::default();
    assert!(monitor.start(), "first start schedules the callback");
    assert!(!monitor.start(), "second start must not schedule another");
    assert!(monitor.is_active());
    assert!(monitor.stop(), "first stop cancels the callback");
    assert!(!monitor.stop(), "second stop has nothing to cancel");
    assert!(!monitor.is_active());
}

#[test]
fn smoothing_interval_doubles_under_low_tier() {
    assert_eq!(
        PerfTier::Low.smoothing_interval_ms(),
        PerfTier::High.smoothing_interval_ms() * 2.0
    );
    assert_eq!(
        PerfTier::Medium.smoothing_interval_ms(),
        PerfTier::High.smoothing_interval_ms()
    );
}

#[test]
fn policy_quality_factor_follows_tier() {
    let wide = 1440.0;
    assert_eq!(AnimationPolicy::derive(PerfTier::High, true, wide).quality_factor, 1.0);
    assert_eq!(AnimationPolicy::derive(PerfTier::Medium, true, wide).quality_factor, 0.7);
    assert_eq!(AnimationPolicy::derive(PerfTier::Low, true, wide).quality_factor, 0.4);
}

#[test]
fn policy_disables_on_low_tier_mobile_width() {
    let p = AnimationPolicy::derive(PerfTier::Low, true, MOBILE_MAX_WIDTH);
    assert!(!p.should_animate, "low tier at mobile width disables animation");
    let p = AnimationPolicy::derive(PerfTier::Low, true, MOBILE_MAX_WIDTH + 1.0);
    assert!(p.should_animate, "low tier on a wide viewport stays animated");
    let p = AnimationPolicy::derive(PerfTier::High, true, 320.0);
    assert!(p.should_animate, "high tier animates at any width");
}

#[test]
fn policy_user_flag_overrides_everything() {
    for tier in [PerfTier::High, PerfTier::Medium, PerfTier::Low] {
        let p = AnimationPolicy::derive(tier, false, 1920.0);
        assert!(!p.should_animate, "disabled flag must win under {tier:?}");
    }
}
