// Host-side tests for the markup contract constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn data_attributes_are_distinct() {
    let attrs = [
        ATTR_PARALLAX,
        ATTR_INTERACTION,
        ATTR_SIZE,
        ATTR_ANIMATE,
        ATTR_TIMELINE,
        ATTR_SIGNAL,
        ATTR_DELAY,
        ATTR_KEYWORDS,
        ATTR_HAPTICS_TOGGLE,
        ATTR_MOTION,
    ];
    for (i, a) in attrs.iter().enumerate() {
        assert!(a.starts_with("data-"), "{a} must be a data attribute");
        for b in attrs.iter().skip(i + 1) {
            assert_ne!(a, b, "attribute names must not collide");
        }
    }
}

#[test]
fn class_names_are_valid_tokens() {
    assert!(!CLASS_VISIBLE.contains(' '));
    assert!(CLASS_ANIMATE_PREFIX.ends_with('-'));
}

#[test]
fn keyword_cadence_is_readable() {
    // Slow enough to read a word, fast enough to register as motion.
    assert!(KEYWORD_ROTATE_MS >= 1000.0 && KEYWORD_ROTATE_MS <= 5000.0);
}

#[test]
fn storage_key_is_namespaced() {
    assert!(STORAGE_KEY_HAPTICS.starts_with("folio:"));
}
