use crate::constants::{
    ATTR_ANIMATE, ATTR_DELAY, ATTR_HAPTICS_TOGGLE, ATTR_INTERACTION, ATTR_PARALLAX, ATTR_SIGNAL,
    ATTR_SIZE, ATTR_TIMELINE, CLASS_ANIMATE_PREFIX, CLASS_VISIBLE,
};
use crate::dom;
use crate::haptics::Haptics;
use crate::tasks::Listener;
use crate::visibility::Observer;
use folio_core::{
    compose, AnimationPolicy, HapticPattern, MotionParams, ObserverConfig, ObserverMode,
    ParallaxSource, PerfTier, SizeClass, VisibilityState,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A decorative element driven by scroll and the fused interaction vector.
///
/// Observation runs in cull mode for the element's whole lifetime; the
/// compositor consults the in-view flag only under the Low tier.
pub struct ParallaxElement {
    el: web::HtmlElement,
    params: MotionParams,
    source: ParallaxSource,
    visibility: Rc<RefCell<VisibilityState>>,
    _observer: Option<Observer>,
}

impl ParallaxElement {
    pub fn mount(el: web::HtmlElement, tier: PerfTier) -> Self {
        let params = MotionParams {
            speed: dom::attr_f32(&el, ATTR_PARALLAX, 0.5),
            interaction_speed: dom::attr_f32(&el, ATTR_INTERACTION, 1.0),
            size: el
                .get_attribute(ATTR_SIZE)
                .and_then(|v| v.parse::<SizeClass>().ok())
                .unwrap_or_default(),
        };
        let source = ParallaxSource::new(params.speed);
        let visibility = Rc::new(RefCell::new(VisibilityState::default()));
        let observer = match Observer::attach(
            &el,
            ObserverConfig::for_tier(tier),
            ObserverMode::Cull,
            visibility.clone(),
            || {},
        ) {
            Ok(o) => Some(o),
            Err(e) => {
                // No observation support: treat the element as always
                // on-screen rather than culling it forever.
                visibility
                    .borrow_mut()
                    .on_intersection(true, ObserverMode::Cull);
                log::warn!("[sections] intersection observer unavailable: {e:?}");
                None
            }
        };
        Self {
            el,
            params,
            source,
            visibility,
            _observer: observer,
        }
    }

    /// Compose and apply this frame's transform.
    pub fn apply(&self, scroll_y: f32, interaction: Vec2, policy: &AnimationPolicy) {
        let offset = self.source.offset(scroll_y, policy);
        let in_view = self.visibility.borrow().in_view();
        let transform = compose(&self.params, offset, interaction, policy, in_view);
        let style = self.el.style();
        match transform.css_transform() {
            Some(v) => _ = style.set_property("transform", &v),
            None => _ = style.remove_property("transform"),
        }
        match transform.css_transition() {
            Some(v) => _ = style.set_property("transition", &v),
            None => _ = style.remove_property("transition"),
        }
    }

    /// Drop back to the static rest position.
    pub fn rest(&self) {
        let style = self.el.style();
        _ = style.remove_property("transform");
        _ = style.remove_property("transition");
    }
}

/// A content block revealed once on first viewport entry: an animated
/// section, timeline item or signal card.
pub struct RevealBinding {
    _observer: Option<Observer>,
}

impl RevealBinding {
    pub fn mount(el: web::HtmlElement, tier: PerfTier) -> Self {
        if let Some(name) = el.get_attribute(ATTR_ANIMATE) {
            _ = el.class_list().add_1(&format!("{CLASS_ANIMATE_PREFIX}{name}"));
        }
        let delay_ms = dom::attr_f32(&el, ATTR_DELAY, 0.0);
        if delay_ms > 0.0 {
            _ = el
                .style()
                .set_property("transition-delay", &format!("{delay_ms:.0}ms"));
        }

        let visibility = Rc::new(RefCell::new(VisibilityState::default()));
        let reveal_el = el.clone();
        let observer = match Observer::attach(
            &el,
            ObserverConfig::for_tier(tier),
            ObserverMode::Reveal,
            visibility,
            move || {
                _ = reveal_el.class_list().add_1(CLASS_VISIBLE);
            },
        ) {
            Ok(o) => Some(o),
            Err(e) => {
                _ = el.class_list().add_1(CLASS_VISIBLE);
                log::warn!("[sections] intersection observer unavailable: {e:?}");
                None
            }
        };
        Self {
            _observer: observer,
        }
    }
}

pub struct MountedSections {
    pub parallax: Vec<ParallaxElement>,
    pub reveals: Vec<RevealBinding>,
}

/// Scan the document and bind every annotated element.
pub fn mount_all(document: &web::Document, tier: PerfTier) -> MountedSections {
    let mut parallax = Vec::new();
    for el in select_all(document, &format!("[{ATTR_PARALLAX}]")) {
        parallax.push(ParallaxElement::mount(el, tier));
    }
    let mut reveals = Vec::new();
    for attr in [ATTR_ANIMATE, ATTR_TIMELINE, ATTR_SIGNAL] {
        for el in select_all(document, &format!("[{attr}]")) {
            reveals.push(RevealBinding::mount(el, tier));
        }
    }
    log::info!(
        "[sections] mounted {} parallax elements, {} reveal targets",
        parallax.len(),
        reveals.len()
    );
    MountedSections { parallax, reveals }
}

/// Static fallback when the pipeline is disabled: everything visible, at
/// rest, with no observers or transforms.
pub fn reveal_everything(document: &web::Document) {
    for attr in [ATTR_ANIMATE, ATTR_TIMELINE, ATTR_SIGNAL] {
        for el in select_all(document, &format!("[{attr}]")) {
            _ = el.class_list().add_1(CLASS_VISIBLE);
        }
    }
}

/// Pulse on card presses; the controller's cooldown absorbs jitter taps.
pub fn wire_card_pulses(
    document: &web::Document,
    haptics: Rc<RefCell<Haptics>>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for el in select_all(document, &format!("[{ATTR_SIGNAL}]")) {
        let haptics = haptics.clone();
        if let Some(l) = Listener::attach(&el, "pointerdown", move |_| {
            haptics.borrow_mut().pulse(HapticPattern::Touch);
        }) {
            listeners.push(l);
        }
    }
    listeners
}

/// Bind the haptics preference button, if the page has one.
pub fn wire_haptics_toggle(
    document: &web::Document,
    haptics: Rc<RefCell<Haptics>>,
) -> Option<Listener> {
    let el = select_all(document, &format!("[{ATTR_HAPTICS_TOGGLE}]"))
        .into_iter()
        .next()?;
    _ = el.set_attribute(
        "aria-pressed",
        if haptics.borrow().enabled() { "true" } else { "false" },
    );
    let button = el.clone();
    Listener::attach(&el, "click", move |_| {
        let enabled = haptics.borrow_mut().toggle();
        _ = button.set_attribute("aria-pressed", if enabled { "true" } else { "false" });
    })
}

fn select_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}
