// Hero slider
pub const SLIDE_DURATION_MS: u32 = 5_000; // 5 seconds per slide
pub const LEAVE_TRANSITION_MS: u32 = 1_000; // matches the .prev css animation
pub const SLIDER_START_DELAY_MS: u32 = 100; // let the reveal library settle first

// Scroll thresholds in px
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const SCROLL_TO_TOP_AFTER: f64 = 500.0;

// Contact form
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;

// Reveal-on-scroll (AOS) options
pub const REVEAL_DURATION_MS: u32 = 1_000;
pub const REVEAL_ONCE: bool = true;
pub const REVEAL_OFFSET_PX: u32 = 100;
pub const REVEAL_EASING: &str = "ease-in-out";

pub const BRAND_NAME: &str = "Home Shield";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
