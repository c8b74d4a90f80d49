use crate::constants::{ATTR_KEYWORDS, ATTR_MOTION};
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use crate::haptics::Haptics;
use crate::keywords::KeywordRotator;
use crate::sections::{self, MountedSections, ParallaxElement, RevealBinding};
use crate::state::PipelineState;
use crate::tasks::{Interval, Listener};
use folio_core::{AnimationPolicy, DeviceClass, PerfTier};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Owns every binding, timer and observer in the pipeline. Teardown is the
/// inverse of mount: dropping the owned handles removes their callbacks, so
/// nothing survives the app.
pub struct App {
    window: web::Window,
    state: Rc<RefCell<PipelineState>>,
    parallax: Vec<ParallaxElement>,
    reveals: Vec<RevealBinding>,
    listeners: Vec<Listener>,
    smoothing: Option<[Interval; 2]>,
    keyword_el: Option<web::Element>,
    keywords: Option<KeywordRotator>,
    frame: Option<FrameLoop>,
    last_tier: PerfTier,
}

impl App {
    pub fn mount() -> anyhow::Result<Rc<RefCell<App>>> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        let viewport = dom::viewport_size(&window);
        let touch_device = dom::is_touch_device(&window);
        let device = if touch_device {
            DeviceClass::Touch
        } else {
            DeviceClass::Pointer
        };
        let config_on = document
            .body()
            .map(|body| body.get_attribute(ATTR_MOTION).as_deref() != Some("off"))
            .unwrap_or(true);
        let reduced_motion = dom::prefers_reduced_motion(&window);
        let user_enabled = config_on && !reduced_motion;
        log::info!(
            "[app] device={device:?} enabled={user_enabled} reduced_motion={reduced_motion} viewport={:.0}x{:.0}",
            viewport.x,
            viewport.y
        );

        let state = Rc::new(RefCell::new(PipelineState::new(
            device,
            user_enabled,
            viewport,
            dom::now_ms(),
        )));
        let haptics = Rc::new(RefCell::new(Haptics::init(&window, touch_device)));

        // Haptics run on their own preference regardless of motion policy.
        let mut listeners = sections::wire_card_pulses(&document, haptics.clone());
        if let Some(l) = sections::wire_haptics_toggle(&document, haptics.clone()) {
            listeners.push(l);
        }

        if !user_enabled {
            // Static rendition: everything visible at rest, nothing scheduled.
            sections::reveal_everything(&document);
            return Ok(Rc::new(RefCell::new(App {
                window,
                state,
                parallax: Vec::new(),
                reveals: Vec::new(),
                listeners,
                smoothing: None,
                keyword_el: None,
                keywords: None,
                frame: None,
                last_tier: PerfTier::default(),
            })));
        }

        let tier = state.borrow().sampler.tier();
        let MountedSections { parallax, reveals } = sections::mount_all(&document, tier);

        if let Some(l) = events::wire_scroll(&window, state.clone()) {
            listeners.push(l);
        }
        if let Some(l) = events::wire_resize(&window, state.clone()) {
            listeners.push(l);
        }
        match device {
            DeviceClass::Pointer => {
                if let Some(l) = events::wire_mouse(&window, state.clone()) {
                    listeners.push(l);
                }
            }
            DeviceClass::Touch => {
                listeners.extend(events::wire_touch(&window, state.clone(), haptics.clone()));
                if let Some(l) = events::wire_orientation(&window, state.clone()) {
                    listeners.push(l);
                }
            }
        }

        let keyword_el = document
            .query_selector(&format!("[{ATTR_KEYWORDS}]"))
            .ok()
            .flatten();

        let app = Rc::new(RefCell::new(App {
            window: window.clone(),
            state,
            parallax,
            reveals,
            listeners,
            smoothing: None,
            keyword_el,
            keywords: None,
            frame: None,
            last_tier: tier,
        }));

        // The loop holds only a weak handle; once the app is torn down an
        // in-flight callback finds nothing to drive.
        let weak: Weak<RefCell<App>> = Rc::downgrade(&app);
        let frame = FrameLoop::new(&window, move || {
            if let Some(app) = weak.upgrade() {
                app.borrow_mut().tick();
            }
        });
        {
            let mut this = app.borrow_mut();
            if this.state.borrow_mut().monitor.start() {
                frame.start();
            }
            this.frame = Some(frame);
            this.sync_loops();
        }
        Ok(app)
    }

    /// One animation frame: sample, re-derive policy, consume coalesced
    /// input, then composite. Ordering guarantees each stage sees this
    /// frame's tier and quality.
    fn tick(&mut self) {
        let now = dom::now_ms();
        {
            let mut st = self.state.borrow_mut();
            if st.monitor.is_active() {
                _ = st.sampler.on_frame(now);
            }
            let tier = st.sampler.tier();
            st.policy = AnimationPolicy::derive(tier, st.user_enabled, st.viewport.x);
            if let Some(y) = st.pending.scroll_y.take() {
                st.scroll_y = y;
            }
            if let Some(v) = st.pending.mouse.take() {
                st.fusion.set_mouse(v);
            }
            if let Some(v) = st.pending.touch_move.take() {
                st.fusion.touch.movement(v);
            }
        }
        self.sync_loops();

        let st = self.state.borrow();
        if st.policy.should_animate {
            let interaction = st.fusion.vector(st.viewport.x, &st.policy);
            for element in &self.parallax {
                element.apply(st.scroll_y, interaction, &st.policy);
            }
        } else {
            for element in &self.parallax {
                element.rest();
            }
        }
    }

    /// Keep the recurring timers consistent with the policy: cancelled while
    /// animation is off, the smoothing pair re-spawned with the doubled
    /// period on tier change.
    fn sync_loops(&mut self) {
        let (should_animate, tier) = {
            let st = self.state.borrow();
            (st.policy.should_animate, st.policy.tier)
        };
        if !should_animate {
            if self.smoothing.take().is_some() {
                log::info!("[app] smoothing loops cancelled");
            }
            self.keywords = None;
        } else {
            if self.smoothing.is_none() || tier != self.last_tier {
                self.smoothing = self.spawn_smoothing(tier);
            }
            if self.keywords.is_none() {
                if let Some(el) = &self.keyword_el {
                    self.keywords = KeywordRotator::mount(&self.window, el);
                    if self.keywords.is_none() {
                        // nothing to rotate; stop re-probing the element
                        self.keyword_el = None;
                    }
                }
            }
        }
        self.last_tier = tier;
    }

    fn spawn_smoothing(&self, tier: PerfTier) -> Option<[Interval; 2]> {
        let period = tier.smoothing_interval_ms();
        let touch_state = self.state.clone();
        let touch = Interval::every(&self.window, period, move || {
            touch_state.borrow_mut().fusion.touch.tick();
        })?;
        let orientation_state = self.state.clone();
        let orientation = Interval::every(&self.window, period, move || {
            orientation_state.borrow_mut().fusion.orientation.tick();
        })?;
        log::info!("[app] smoothing loops at {period}ms ({tier:?})");
        Some([touch, orientation])
    }

    pub fn teardown(&mut self) {
        if let Some(frame) = &self.frame {
            frame.stop();
        }
        _ = self.state.borrow_mut().monitor.stop();
        self.frame = None;
        self.smoothing = None;
        if self.keywords.take().is_some() {
            log::info!("[app] keyword rotator stopped");
        }
        self.listeners.clear();
        log::info!(
            "[app] torn down ({} parallax, {} reveal bindings dropped)",
            self.parallax.len(),
            self.reveals.len()
        );
        self.parallax.clear();
        self.reveals.clear();
    }
}
