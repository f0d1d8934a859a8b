pub mod navbar;
pub mod scroll_to_top;
