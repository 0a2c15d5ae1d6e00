//! Scroll-driven page affordances: the scroll-to-top threshold and in-page
//! anchor navigation below the sticky header.
//!
//! Everything here works against the [`Viewport`] trait so it can run
//! without a browser. `scroll::browser` provides the `web-sys` binding.

use log::debug;

use crate::config::{HEADER_HEIGHT_PX, SCROLL_TOP_THRESHOLD_PX};

/// Anchors reachable from the site header.
pub const NAV_ANCHORS: [&str; 4] = ["features", "how", "trust", "cases"];

pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Distance of the element with `id` from the top of the document, or
    /// `None` when no such element exists.
    fn anchor_offset(&self, id: &str) -> Option<f64>;

    /// Start a smooth scroll to `top`. A later call supersedes one still in
    /// progress.
    fn smooth_scroll_to(&self, top: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdState {
    BelowThreshold,
    AboveThreshold,
}

impl ThresholdState {
    pub fn for_offset(offset: f64) -> Self {
        if is_past_threshold(offset) {
            ThresholdState::AboveThreshold
        } else {
            ThresholdState::BelowThreshold
        }
    }
}

/// Strict comparison, an offset of exactly 300 is still below.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD_PX
}

/// Where the viewport has to go so the element at `element_top` sits right
/// under the header. Never negative.
pub fn anchor_scroll_target(element_top: f64) -> f64 {
    (element_top - HEADER_HEIGHT_PX).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    scroll_top: f64,
    state: ThresholdState,
}

impl ScrollState {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            scroll_top: initial_offset,
            state: ThresholdState::for_offset(initial_offset),
        }
    }

    /// Record a scroll sample. Returns the new state only when the sample
    /// crossed the threshold.
    pub fn sample(&mut self, offset: f64) -> Option<ThresholdState> {
        self.scroll_top = offset;
        let next = ThresholdState::for_offset(offset);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn state(&self) -> ThresholdState {
        self.state
    }

    pub fn is_past_threshold(&self) -> bool {
        self.state == ThresholdState::AboveThreshold
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Section id named by a location fragment such as `#how`.
pub fn anchor_from_fragment(fragment: &str) -> Option<&str> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    (!id.is_empty()).then_some(id)
}

pub fn scroll_to_top(viewport: &impl Viewport) {
    viewport.smooth_scroll_to(0.0);
}

/// Smooth-scroll to the section `target_id`. Returns `false` without
/// scrolling when the document has no such element.
pub fn navigate_to_anchor(viewport: &impl Viewport, target_id: &str) -> bool {
    match viewport.anchor_offset(target_id) {
        Some(element_top) => {
            viewport.smooth_scroll_to(anchor_scroll_target(element_top));
            true
        }
        None => {
            debug!("anchor #{} not found, ignoring navigation", target_id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Viewport whose smooth scrolls complete instantly.
    #[derive(Default)]
    struct FakeViewport {
        offset: Cell<f64>,
        anchors: HashMap<String, f64>,
        requests: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        fn with_anchor(mut self, id: &str, top: f64) -> Self {
            self.anchors.insert(id.to_string(), top);
            self
        }

        fn user_scrolls_to(&self, offset: f64) {
            self.offset.set(offset);
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn anchor_offset(&self, id: &str) -> Option<f64> {
            self.anchors.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
            self.offset.set(top);
        }
    }

    #[test]
    fn threshold_boundary_is_strict() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(300.0));
        assert!(is_past_threshold(300.5));
        assert!(is_past_threshold(301.0));
    }

    #[test]
    fn sample_reports_only_crossings() {
        let mut state = ScrollState::default();
        assert_eq!(state.sample(120.0), None);
        assert_eq!(state.sample(300.0), None);
        assert_eq!(state.sample(301.0), Some(ThresholdState::AboveThreshold));
        assert_eq!(state.sample(900.0), None);
        assert_eq!(state.scroll_top(), 900.0);
        assert_eq!(state.sample(300.0), Some(ThresholdState::BelowThreshold));
        assert!(!state.is_past_threshold());
    }

    #[test]
    fn state_created_mid_page_starts_above() {
        let state = ScrollState::new(1200.0);
        assert_eq!(state.state(), ThresholdState::AboveThreshold);
    }

    #[test]
    fn scroll_to_top_lands_at_zero() {
        let viewport = FakeViewport::default();
        viewport.user_scrolls_to(2400.0);
        scroll_to_top(&viewport);
        assert_eq!(viewport.scroll_offset(), 0.0);

        // already at top
        scroll_to_top(&viewport);
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert_eq!(*viewport.requests.borrow(), vec![0.0, 0.0]);
    }

    #[test]
    fn process_link_lands_below_header() {
        let viewport = FakeViewport::default().with_anchor("how", 1200.0);
        assert!(navigate_to_anchor(&viewport, "how"));
        assert_eq!(viewport.scroll_offset(), 1120.0);
    }

    #[test]
    fn anchor_near_top_clamps_to_zero() {
        let viewport = FakeViewport::default().with_anchor("features", 40.0);
        viewport.user_scrolls_to(500.0);
        assert!(navigate_to_anchor(&viewport, "features"));
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert_eq!(anchor_scroll_target(80.0), 0.0);
    }

    #[test]
    fn missing_anchor_does_not_scroll() {
        let viewport = FakeViewport::default().with_anchor("how", 1200.0);
        viewport.user_scrolls_to(640.0);
        assert!(!navigate_to_anchor(&viewport, "pricing"));
        assert_eq!(viewport.scroll_offset(), 640.0);
        assert!(viewport.requests.borrow().is_empty());
    }

    #[test]
    fn fragments_name_sections() {
        assert_eq!(anchor_from_fragment("#how"), Some("how"));
        assert_eq!(anchor_from_fragment("cases"), Some("cases"));
        assert_eq!(anchor_from_fragment("#"), None);
        assert_eq!(anchor_from_fragment(""), None);
        for anchor in NAV_ANCHORS {
            assert_eq!(anchor_from_fragment(&format!("#{}", anchor)), Some(anchor));
        }
    }

    #[test]
    fn last_navigation_wins() {
        let viewport = FakeViewport::default()
            .with_anchor("trust", 2600.0)
            .with_anchor("cases", 3400.0);
        navigate_to_anchor(&viewport, "trust");
        navigate_to_anchor(&viewport, "cases");
        assert_eq!(viewport.scroll_offset(), 3320.0);
    }

    #[test]
    fn scroll_to_top_scenario() {
        let viewport = FakeViewport::default();
        let mut state = ScrollState::new(viewport.scroll_offset());
        assert!(!state.is_past_threshold());

        viewport.user_scrolls_to(450.0);
        assert_eq!(
            state.sample(viewport.scroll_offset()),
            Some(ThresholdState::AboveThreshold)
        );

        scroll_to_top(&viewport);
        assert_eq!(
            state.sample(viewport.scroll_offset()),
            Some(ThresholdState::BelowThreshold)
        );
        assert!(!state.is_past_threshold());
    }

    proptest! {
        #[test]
        fn visibility_follows_offset(offset in 0u32..20_000) {
            let offset = f64::from(offset);
            let mut state = ScrollState::default();
            state.sample(offset);
            prop_assert_eq!(state.is_past_threshold(), offset > 300.0);
        }

        #[test]
        fn anchor_target_is_offset_minus_header(top in 0u32..50_000) {
            let top = f64::from(top);
            let target = anchor_scroll_target(top);
            prop_assert!(target >= 0.0);
            if top >= 80.0 {
                prop_assert_eq!(target, top - 80.0);
            } else {
                prop_assert_eq!(target, 0.0);
            }
        }
    }
}
