// Markup contract between the page shell and the animation pipeline.

// Data attributes the mounter scans for.
pub const ATTR_PARALLAX: &str = "data-parallax"; // value: scroll speed multiplier
pub const ATTR_INTERACTION: &str = "data-interaction"; // value: interaction speed multiplier
pub const ATTR_SIZE: &str = "data-size"; // small | medium | large
pub const ATTR_ANIMATE: &str = "data-animate"; // value: reveal animation name
pub const ATTR_TIMELINE: &str = "data-timeline"; // marks a timeline item
pub const ATTR_SIGNAL: &str = "data-signal"; // marks a proof-of-work card
pub const ATTR_DELAY: &str = "data-delay"; // reveal transition delay, ms
pub const ATTR_KEYWORDS: &str = "data-keywords"; // comma-separated hero keywords
pub const ATTR_HAPTICS_TOGGLE: &str = "data-haptics-toggle";
pub const ATTR_MOTION: &str = "data-motion"; // "off" on <body> disables the pipeline

pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ANIMATE_PREFIX: &str = "anim-";

// Durable preference storage.
pub const STORAGE_KEY_HAPTICS: &str = "folio:haptics";

// Hero keyword rotation cadence.
pub const KEYWORD_ROTATE_MS: f64 = 2400.0;
