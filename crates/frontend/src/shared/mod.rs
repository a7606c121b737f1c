pub mod api_utils;
pub mod constants;
pub mod inquiry_context;
pub mod scroll_spy;
pub mod search_input;
pub mod storage;
