//! Scroll-position driven category tracking.
//!
//! The pure part of the products page navigator: which section is "in view"
//! for a given scroll offset, where to scroll when a category control is
//! clicked, and how far to scroll the horizontal category strip so the
//! active control sits in its middle. The DOM shell lives in the frontend
//! and only feeds measurements in.

/// Distance below the viewport top used as the "in view" probe. Covers the
/// sticky navbar plus the sticky category strip.
pub const DEFAULT_LOOKAHEAD_PX: f64 = 250.0;

/// Strip movements smaller than this are treated as "already centered"
pub const CENTERING_TOLERANCE_PX: f64 = 0.5;

/// What happens to the active category when the probe is outside every
/// section (above the first one or past the last one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRangePolicy {
    /// Keep whatever was active before
    Retain,
    /// Drop to "no category active"
    #[default]
    Clear,
}

/// Vertical extent of one rendered category section, in document pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub slug: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(slug: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            slug: slug.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        self.is_measurable() && y >= self.top && y < self.top + self.height
    }

    /// False for sections that were not laid out yet (zero or NaN sizes)
    pub fn is_measurable(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height > 0.0
    }
}

/// Section containing `scroll_offset + lookahead`, first match in DOM order
pub fn resolve_active(scroll_offset: f64, lookahead: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_offset + lookahead;
    sections
        .iter()
        .find(|s| s.contains(probe))
        .map(|s| s.slug.as_str())
}

/// Active-category state machine: `None` is "no category active".
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    active: Option<String>,
    lookahead: f64,
    policy: OutOfRangePolicy,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_PX, OutOfRangePolicy::default())
    }
}

impl ScrollSpy {
    pub fn new(lookahead: f64, policy: OutOfRangePolicy) -> Self {
        Self {
            active: None,
            lookahead,
            policy,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Scroll tick. Returns true when the active category changed.
    pub fn on_scroll(&mut self, scroll_offset: f64, sections: &[SectionBounds]) -> bool {
        let next = match resolve_active(scroll_offset, self.lookahead, sections) {
            Some(slug) => Some(slug.to_string()),
            None => match self.policy {
                OutOfRangePolicy::Retain => return false,
                OutOfRangePolicy::Clear => None,
            },
        };
        self.set_active(next)
    }

    /// Click on a category control.
    ///
    /// Activates `slug` right away and returns the document offset to
    /// smooth-scroll to. A section that is not mounted yet leaves the state
    /// untouched and yields `None`.
    pub fn navigate_to(&mut self, slug: &str, sections: &[SectionBounds]) -> Option<f64> {
        let section = sections
            .iter()
            .find(|s| s.slug == slug && s.is_measurable())?;
        let target = section.top - self.lookahead;
        self.set_active(Some(section.slug.clone()));
        Some(target)
    }

    /// Drop the active category when it is no longer rendered (e.g. the
    /// search filtered its section away). Returns true on change.
    pub fn retain_known(&mut self, known_slugs: &[String]) -> bool {
        match &self.active {
            Some(active) if !known_slugs.iter().any(|s| s == active) => self.set_active(None),
            _ => false,
        }
    }

    fn set_active(&mut self, next: Option<String>) -> bool {
        if self.active == next {
            return false;
        }
        self.active = next;
        true
    }
}

// ============================================================================
// Strip centering
// ============================================================================

/// Horizontal geometry of the scrollable category strip. `left` and `width`
/// are viewport (bounding rect) values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub scroll_left: f64,
    pub left: f64,
    pub width: f64,
    /// Full content width, when known; enables clamping to the scroll range
    pub scroll_width: Option<f64>,
}

/// Bounding rect of the active control, viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlGeometry {
    pub left: f64,
    pub width: f64,
}

/// `scroll_left` that puts the control's center on the strip's center,
/// clamped to the scrollable range.
pub fn centering_target(strip: StripGeometry, control: ControlGeometry) -> f64 {
    let raw = strip.scroll_left + (control.left - strip.left) - strip.width / 2.0
        + control.width / 2.0;

    match strip.scroll_width {
        Some(scroll_width) => {
            let max = (scroll_width - strip.width).max(0.0);
            raw.clamp(0.0, max)
        }
        None => raw,
    }
}

/// Scroll position to apply, or `None` when the strip is already centered.
///
/// Because the control's rect moves together with the strip's scroll
/// position, calling this again after the scroll has landed yields `None`.
pub fn centering_scroll(strip: StripGeometry, control: ControlGeometry) -> Option<f64> {
    let target = centering_target(strip, control);
    if !target.is_finite() || (target - strip.scroll_left).abs() < CENTERING_TOLERANCE_PX {
        return None;
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("sweets", 0.0, 500.0),
            SectionBounds::new("nuts", 500.0, 700.0),
            SectionBounds::new("tea", 1200.0, 800.0),
        ]
    }

    #[test]
    fn test_resolve_uses_lookahead_probe() {
        let sections = three_sections();
        assert_eq!(resolve_active(400.0, 250.0, &sections), Some("nuts"));
        assert_eq!(resolve_active(0.0, 250.0, &sections), Some("sweets"));
        assert_eq!(resolve_active(950.0, 250.0, &sections), Some("tea"));
    }

    #[test]
    fn test_resolve_bounds_are_half_open() {
        let sections = three_sections();
        assert_eq!(resolve_active(250.0, 250.0, &sections), Some("nuts"));
        assert_eq!(resolve_active(1750.0, 250.0, &sections), None);
    }

    #[test]
    fn test_scroll_changes_active_once() {
        let sections = three_sections();
        let mut spy = ScrollSpy::new(250.0, OutOfRangePolicy::Clear);
        assert!(spy.on_scroll(400.0, &sections));
        assert_eq!(spy.active(), Some("nuts"));
        assert!(!spy.on_scroll(420.0, &sections));
    }

    #[test]
    fn test_clear_policy_past_last_section() {
        let sections = three_sections();
        let mut spy = ScrollSpy::new(250.0, OutOfRangePolicy::Clear);
        spy.on_scroll(1000.0, &sections);
        assert_eq!(spy.active(), Some("tea"));
        assert!(spy.on_scroll(5000.0, &sections));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_retain_policy_past_last_section() {
        let sections = three_sections();
        let mut spy = ScrollSpy::new(250.0, OutOfRangePolicy::Retain);
        spy.on_scroll(1000.0, &sections);
        assert!(!spy.on_scroll(5000.0, &sections));
        assert_eq!(spy.active(), Some("tea"));
    }

    fn sections_below_header() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("sweets", 600.0, 500.0),
            SectionBounds::new("nuts", 1100.0, 700.0),
        ]
    }

    #[test]
    fn test_clear_policy_above_first_section() {
        let sections = sections_below_header();
        let mut spy = ScrollSpy::new(250.0, OutOfRangePolicy::Clear);
        assert!(!spy.on_scroll(0.0, &sections));
        assert_eq!(spy.active(), None);

        assert!(spy.on_scroll(400.0, &sections));
        assert_eq!(spy.active(), Some("sweets"));
        assert!(spy.on_scroll(0.0, &sections));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_retain_policy_above_first_section() {
        let sections = sections_below_header();
        let mut spy = ScrollSpy::new(250.0, OutOfRangePolicy::Retain);
        assert!(!spy.on_scroll(0.0, &sections));
        assert_eq!(spy.active(), None);

        spy.on_scroll(400.0, &sections);
        assert!(!spy.on_scroll(0.0, &sections));
        assert_eq!(spy.active(), Some("sweets"));
    }

    #[test]
    fn test_navigate_sets_active_synchronously() {
        let sections = three_sections();
        let mut spy = ScrollSpy::new(250.0, OutOfRangePolicy::Clear);
        assert_eq!(spy.navigate_to("tea", &sections), Some(950.0));
        assert_eq!(spy.active(), Some("tea"));
        // the smooth scroll lands on the same section
        assert!(!spy.on_scroll(950.0, &sections));
    }

    #[test]
    fn test_navigate_to_unmounted_section_is_noop() {
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.navigate_to("tea", &[]), None);
        assert_eq!(spy.active(), None);

        let unlaid = vec![SectionBounds::new("tea", 0.0, 0.0)];
        assert_eq!(spy.navigate_to("tea", &unlaid), None);
    }

    #[test]
    fn test_no_sections_is_valid_empty_state() {
        let mut spy = ScrollSpy::default();
        assert!(!spy.on_scroll(300.0, &[]));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_retain_known_clears_filtered_out_section() {
        let sections = three_sections();
        let mut spy = ScrollSpy::default();
        spy.navigate_to("nuts", &sections);
        assert!(!spy.retain_known(&["nuts".to_string()]));
        assert!(spy.retain_known(&["tea".to_string()]));
        assert_eq!(spy.active(), None);
    }

    fn strip(scroll_left: f64) -> StripGeometry {
        StripGeometry {
            scroll_left,
            left: 10.0,
            width: 300.0,
            scroll_width: Some(1000.0),
        }
    }

    /// Control at `content_x` inside the strip content, as its bounding rect
    /// would report for the given strip scroll position.
    fn control(strip: StripGeometry, content_x: f64, width: f64) -> ControlGeometry {
        ControlGeometry {
            left: strip.left + content_x - strip.scroll_left,
            width,
        }
    }

    #[test]
    fn test_centering_target_formula() {
        let s = strip(0.0);
        let c = control(s, 600.0, 80.0);
        assert_eq!(centering_target(s, c), 490.0);
    }

    #[test]
    fn test_centering_is_idempotent() {
        let s = strip(0.0);
        let first = centering_scroll(s, control(s, 600.0, 80.0)).unwrap();

        let landed = strip(first);
        assert_eq!(centering_scroll(landed, control(landed, 600.0, 80.0)), None);
    }

    #[test]
    fn test_centering_clamps_to_scroll_range() {
        let s = strip(0.0);
        let target = centering_scroll(s, control(s, 950.0, 50.0)).unwrap();
        assert_eq!(target, 700.0);

        let landed = strip(target);
        assert_eq!(centering_scroll(landed, control(landed, 950.0, 50.0)), None);

        let first_control = control(s, 0.0, 80.0);
        assert_eq!(centering_scroll(s, first_control), None);
    }

    #[test]
    fn test_centering_without_scroll_width_is_unclamped() {
        let s = StripGeometry {
            scroll_width: None,
            ..strip(0.0)
        };
        assert_eq!(centering_target(s, control(s, 0.0, 80.0)), -110.0);
    }
}
