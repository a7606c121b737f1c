pub mod business_hours;
pub mod catalog_filter;
pub mod contact_draft;
pub mod inquiry_cart;
pub mod scroll_spy;
