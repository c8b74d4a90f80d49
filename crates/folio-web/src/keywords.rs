use crate::constants::{ATTR_KEYWORDS, KEYWORD_ROTATE_MS};
use crate::tasks::Interval;
use web_sys as web;

/// Rotates the hero keyword text on a fixed-period timer.
///
/// The element lists its words in `data-keywords`, comma-separated; the
/// timer swaps one word in per period and dies with this handle.
pub struct KeywordRotator {
    _interval: Interval,
}

impl KeywordRotator {
    pub fn mount(window: &web::Window, element: &web::Element) -> Option<Self> {
        let words: Vec<String> = element
            .get_attribute(ATTR_KEYWORDS)?
            .split(',')
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        element.set_text_content(Some(&words[0]));
        log::info!("[keywords] rotating {} words", words.len());

        let el = element.clone();
        let mut index = 0usize;
        let interval = Interval::every(window, KEYWORD_ROTATE_MS, move || {
            index = (index + 1) % words.len();
            el.set_text_content(Some(&words[index]));
        })?;
        Some(Self {
            _interval: interval,
        })
    }
}
