//! Timing and layout constants of the storefront pages

pub use contracts::shared::scroll_spy::DEFAULT_LOOKAHEAD_PX as SCROLL_SPY_LOOKAHEAD_PX;

/// Navbar inquiry badge refresh
pub const INQUIRY_BADGE_POLL_MS: u32 = 1_000;

/// Footer business-hours refresh
pub const BUSINESS_HOURS_REFRESH_MS: u32 = 60_000;

pub const SEARCH_DEBOUNCE_MS: u32 = 150;

/// Scroll offset past which the back-to-top button shows
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 400.0;

/// Backend port used by [`crate::shared::api_utils::api_base`]
pub const BACKEND_PORT: u16 = 3000;

/// DOM id prefix of catalog sections, `section-<slug>`
pub const SECTION_ID_PREFIX: &str = "section-";

/// DOM id prefix of category strip buttons, `nav-<slug>`
pub const NAV_ID_PREFIX: &str = "nav-";

pub const CATEGORY_STRIP_ID: &str = "category-strip";

pub fn section_dom_id(slug: &str) -> String {
    format!("{}{}", SECTION_ID_PREFIX, slug)
}

pub fn nav_dom_id(slug: &str) -> String {
    format!("{}{}", NAV_ID_PREFIX, slug)
}
