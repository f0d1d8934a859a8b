use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::JsCast;

/// Section id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls so the section starts just below the fixed navbar. Missing
/// sections are ignored.
pub fn scroll_to_section(href: &str, navbar_id: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let header_height = document
        .get_element_by_id(navbar_id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map_or(0, |header| header.offset_height());

    smooth_scroll_to(f64::from(target.offset_top() - header_height));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about"), None);
    }
}
