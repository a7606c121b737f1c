//! DOM shell around [`ScrollSpy`]: measures sections, listens to scroll and
//! resize, and keeps the active strip control centered.

use contracts::shared::scroll_spy::{
    centering_scroll, ControlGeometry, OutOfRangePolicy, ScrollSpy, SectionBounds, StripGeometry,
};
use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::constants::{
    nav_dom_id, section_dom_id, BACK_TO_TOP_THRESHOLD_PX, CATEGORY_STRIP_ID,
    SCROLL_SPY_LOOKAHEAD_PX,
};

#[derive(Clone, Copy)]
pub struct ScrollSpyHandle {
    spy: StoredValue<ScrollSpy>,
    slugs: Signal<Vec<String>>,
    active: RwSignal<Option<String>>,
    show_back_to_top: RwSignal<bool>,
    frame_pending: StoredValue<bool>,
}

impl ScrollSpyHandle {
    pub fn active(&self) -> Signal<Option<String>> {
        self.active.into()
    }

    pub fn show_back_to_top(&self) -> Signal<bool> {
        self.show_back_to_top.into()
    }

    /// Activate `slug` and smooth-scroll its section under the sticky header.
    /// No-op while the section is not rendered.
    pub fn navigate_to(&self, slug: &str) {
        let sections = measure_sections(&self.slugs.get_untracked());
        let target = self
            .spy
            .try_update_value(|spy| spy.navigate_to(slug, &sections))
            .flatten();

        if let Some(top) = target {
            self.publish();
            scroll_window_to(top.max(0.0));
        }
    }

    pub fn scroll_to_top(&self) {
        scroll_window_to(0.0);
    }

    /// Coalesce bursts of scroll/resize events into one evaluation per frame
    fn schedule(&self) {
        if self.frame_pending.get_value() {
            return;
        }
        self.frame_pending.set_value(true);

        let handle = *self;
        request_animation_frame(move || {
            handle.frame_pending.set_value(false);
            handle.evaluate();
        });
    }

    fn evaluate(&self) {
        let offset = window_scroll_offset();
        let sections = measure_sections(&self.slugs.get_untracked());

        let changed = self
            .spy
            .try_update_value(|spy| spy.on_scroll(offset, &sections))
            .unwrap_or(false);
        if changed {
            self.publish();
        }

        let past_threshold = offset > BACK_TO_TOP_THRESHOLD_PX;
        if self.show_back_to_top.get_untracked() != past_threshold {
            self.show_back_to_top.set(past_threshold);
        }
    }

    fn publish(&self) {
        let active = self
            .spy
            .with_value(|spy| spy.active().map(str::to_string));
        self.active.set(active);
    }
}

/// Attach a scroll spy to the sections currently rendered for `slugs`.
///
/// Listeners are removed when the owning component unmounts.
pub fn use_scroll_spy(slugs: Signal<Vec<String>>) -> ScrollSpyHandle {
    let handle = ScrollSpyHandle {
        spy: StoredValue::new(ScrollSpy::new(
            SCROLL_SPY_LOOKAHEAD_PX,
            OutOfRangePolicy::Clear,
        )),
        slugs,
        active: RwSignal::new(None),
        show_back_to_top: RwSignal::new(false),
        frame_pending: StoredValue::new(false),
    };

    let scroll_listener = window_event_listener(ev::scroll, move |_| handle.schedule());
    let resize_listener = window_event_listener(ev::resize, move |_| handle.schedule());
    on_cleanup(move || {
        scroll_listener.remove();
        resize_listener.remove();
    });

    // Search changes the rendered sections: forget a vanished category and
    // re-evaluate once the new layout is painted.
    Effect::new(move |_| {
        let known = slugs.get();
        let dropped = handle
            .spy
            .try_update_value(|spy| spy.retain_known(&known))
            .unwrap_or(false);
        if dropped {
            handle.publish();
        }
        handle.schedule();
    });

    Effect::new(move |_| {
        if let Some(slug) = handle.active.get() {
            request_animation_frame(move || center_strip_control(&slug));
        }
    });

    handle
}

fn window_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Document-relative bounds of every mounted section; missing ones are skipped
fn measure_sections(slugs: &[String]) -> Vec<SectionBounds> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    slugs
        .iter()
        .filter_map(|slug| {
            let element = document.get_element_by_id(&section_dom_id(slug))?;
            let rect = element.get_bounding_client_rect();
            Some(SectionBounds::new(
                slug.clone(),
                rect.top() + scroll_y,
                rect.height(),
            ))
        })
        .filter(SectionBounds::is_measurable)
        .collect()
}

fn scroll_window_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn center_strip_control(slug: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(strip), Some(control)) = (
        document.get_element_by_id(CATEGORY_STRIP_ID),
        document.get_element_by_id(&nav_dom_id(slug)),
    ) else {
        return;
    };

    let strip_rect = strip.get_bounding_client_rect();
    let control_rect = control.get_bounding_client_rect();
    let strip_geometry = StripGeometry {
        scroll_left: f64::from(strip.scroll_left()),
        left: strip_rect.left(),
        width: strip_rect.width(),
        scroll_width: Some(f64::from(strip.scroll_width())),
    };
    let control_geometry = ControlGeometry {
        left: control_rect.left(),
        width: control_rect.width(),
    };

    if let Some(left) = centering_scroll(strip_geometry, control_geometry) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        strip.scroll_to_with_scroll_to_options(&options);
    }
}
