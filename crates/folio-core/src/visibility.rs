//! Viewport-visibility bookkeeping.
//!
//! Two observation modes share one state type: reveal mode latches on first
//! intersection and asks the frontend to detach the observer; cull mode keeps
//! observing and toggles the in-view flag both ways so off-screen elements
//! can skip transform work under constrained performance.

use crate::constants::{REVEAL_MARGIN_PX, REVEAL_THRESHOLD, REVEAL_THRESHOLD_COARSE};
use crate::perf::PerfTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverMode {
    /// One-shot reveal animation trigger.
    Reveal,
    /// Persistent viewport culling.
    Cull,
}

/// Intersection-observer tuning per performance tier. The Low tier trades an
/// earlier, smoother trigger for a coarser, cheaper one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin_px: f64,
}

impl ObserverConfig {
    pub fn for_tier(tier: PerfTier) -> Self {
        match tier {
            PerfTier::Low => Self {
                threshold: REVEAL_THRESHOLD_COARSE,
                root_margin_px: 0.0,
            },
            _ => Self {
                threshold: REVEAL_THRESHOLD,
                root_margin_px: REVEAL_MARGIN_PX,
            },
        }
    }

    /// CSS-style margin string growing the root downward.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_px)
    }
}

/// What the frontend should do with the observer after an intersection event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverAction {
    Keep,
    Detach,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityState {
    revealed: bool,
    in_view: bool,
}

impl VisibilityState {
    pub fn on_intersection(&mut self, intersecting: bool, mode: ObserverMode) -> ObserverAction {
        match mode {
            ObserverMode::Reveal => {
                if intersecting && !self.revealed {
                    self.revealed = true;
                    self.in_view = true;
                    return ObserverAction::Detach;
                }
                ObserverAction::Keep
            }
            ObserverMode::Cull => {
                self.in_view = intersecting;
                if intersecting {
                    self.revealed = true;
                }
                ObserverAction::Keep
            }
        }
    }

    /// Once true, never reverts.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }
}
