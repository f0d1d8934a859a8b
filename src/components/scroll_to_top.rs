use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::smooth_scroll_to;

pub fn is_visible(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TO_TOP_AFTER
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <button
            class={classes!("scroll-to-top", is_visible(scroll_y).then(|| "visible"))}
            aria-label="Scroll to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_only_past_threshold() {
        assert!(!is_visible(120.0));
        assert!(!is_visible(500.0));
        assert!(is_visible(501.0));
    }
}
